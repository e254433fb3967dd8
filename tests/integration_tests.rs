//! End-to-end generation against a registry of host types.

use insta::assert_snapshot;
use jsio::jsio_codegen::{PeeringFragmentGenerator, Strategy};
use jsio::jsio_core::{Convention, RegistrationError};
use jsio::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn jso() -> TypeRef {
    TypeRef::class(well_known::JAVA_SCRIPT_OBJECT)
}

fn callable(name: &str) -> ClassEntry {
    ClassEntry::interface(name).with_interface(well_known::JS_FUNCTION)
}

fn factory(ret: &str) -> MethodEntry {
    MethodEntry::new("createPeer")
        .as_static()
        .with_param("obj", jso())
        .returns(TypeRef::class(ret))
}

/// `Base` declares the peer field, `Node` only the factory.
fn registry() -> TypeRegistry {
    let mut types = TypeRegistry::with_runtime_types();
    types
        .register_all([
            ClassEntry::class("com.example.Base").with_field(FieldEntry::new("jsoPeer", jso())),
            ClassEntry::class("com.example.Node")
                .with_superclass("com.example.Base")
                .with_method(factory("com.example.Node")),
            ClassEntry::class("com.example.Plain")
                .with_field(FieldEntry::new("jsoPeer", TypeRef::int())),
            callable("com.example.Adder").with_method(
                MethodEntry::new("add")
                    .as_static()
                    .with_param("a", TypeRef::int())
                    .with_param("b", TypeRef::int())
                    .returns(TypeRef::int()),
            ),
            callable("com.example.Visitor").with_method(
                MethodEntry::new("visit")
                    .with_param("node", TypeRef::class("com.example.Node"))
                    .with_param("depth", TypeRef::int())
                    .returns(TypeRef::boolean()),
            ),
            callable("com.example.StaticVisitor").with_method(
                MethodEntry::new("visit")
                    .as_static()
                    .with_param("node", TypeRef::class("com.example.Node")),
            ),
            callable("com.example.Empty"),
            callable("com.example.Two")
                .with_method(MethodEntry::new("first"))
                .with_method(MethodEntry::new("second")),
            callable("com.example.Designated")
                .with_metadata("gwt.exported", ["second"])
                .with_method(MethodEntry::new("first"))
                .with_method(MethodEntry::new("second").as_static()),
            callable("com.example.Recursive").with_method(
                MethodEntry::new("call").with_param("again", TypeRef::class("com.example.Recursive")),
            ),
            callable("com.example.Outer").with_method(
                MethodEntry::new("call").with_param("inner", TypeRef::class("com.example.Adder")),
            ),
        ])
        .unwrap();
    types.validate_hierarchy().unwrap();
    types
}

fn generate(types: &TypeRegistry, direction: Direction, ty: &str, name: &str) -> GenResult<String> {
    init_tracing();
    let oracle = FragmentGeneratorOracle::with_builtins(types, GeneratorConfig::default());
    oracle.generate_to_string(types, direction, &TypeRef::class(ty), name)
}

// ============================================================================
// Function strategy
// ============================================================================

#[test]
fn static_identity_callable_is_a_bare_reference() {
    let types = registry();
    let js = generate(&types, Direction::ToJs, "com.example.Adder", "fn").unwrap();
    assert_eq!(
        js,
        "(fn.@com.google.gwt.jsio.client.JSFunction::exportedFunction || \
         (fn.@com.google.gwt.jsio.client.JSFunction::exportedFunction = \
         @com.example.Adder::add(II)))"
    );
    assert!(!js.contains("function("));
}

#[test]
fn instance_callable_gets_cached_linkage_function() {
    let types = registry();
    let js = generate(&types, Direction::ToJs, "com.example.Visitor", "visitor").unwrap();
    assert_eq!(
        js,
        concat!(
            "(visitor.@com.google.gwt.jsio.client.JSFunction::exportedFunction || ",
            "(visitor.@com.google.gwt.jsio.client.JSFunction::exportedFunction = function(arg0, arg1) {\n",
            "  return visitor.@com.example.Visitor::visit(Lcom/example/Node;I)(\n",
            "      arg0.__gwtPeer || @com.example.Node::createPeer(Lcom/google/gwt/core/client/JavaScriptObject;)(arg0), \n",
            "      arg1);\n",
            "}))",
        )
    );
}

#[test]
fn static_callable_with_peered_param_is_called_statically() {
    let types = registry();
    let js = generate(&types, Direction::ToJs, "com.example.StaticVisitor", "fn").unwrap();
    assert_snapshot!(js, @r"
    (fn.@com.google.gwt.jsio.client.JSFunction::exportedFunction || (fn.@com.google.gwt.jsio.client.JSFunction::exportedFunction = function(arg0) {
      return @com.example.StaticVisitor::visit(Lcom/example/Node;)(
          arg0.__gwtPeer || @com.example.Node::createPeer(Lcom/google/gwt/core/client/JavaScriptObject;)(arg0));
    }))
    ");
}

#[test]
fn repeated_conversion_reuses_cached_function() {
    let types = registry();
    let first = generate(&types, Direction::ToJs, "com.example.Visitor", "v").unwrap();
    let second = generate(&types, Direction::ToJs, "com.example.Visitor", "v").unwrap();
    assert_eq!(first, second);

    let cache = "v.@com.google.gwt.jsio.client.JSFunction::exportedFunction";
    assert!(first.starts_with(&format!("({cache} || ({cache} = function(")));
}

#[test]
fn designated_method_is_exported() {
    let types = registry();
    let js = generate(&types, Direction::ToJs, "com.example.Designated", "fn").unwrap();
    assert!(js.ends_with("= @com.example.Designated::second()))"));
}

#[test]
fn callable_without_methods_fails() {
    let types = registry();
    let err = generate(&types, Direction::ToJs, "com.example.Empty", "fn").unwrap_err();
    assert!(err.to_string().contains("no functions declared"));
}

#[test]
fn callable_with_two_methods_is_ambiguous() {
    let types = registry();
    let err = generate(&types, Direction::ToJs, "com.example.Two", "fn").unwrap_err();
    assert!(matches!(err, GenerationError::AmbiguousExport { count: 2, .. }));
    assert!(err.to_string().contains("ambiguous"));
}

#[test]
fn callable_from_js_always_fails() {
    let types = registry();
    for ty in ["com.example.Empty", "com.example.Adder", "com.example.Two"] {
        let err = generate(&types, Direction::FromJs, ty, "fn").unwrap_err();
        assert!(
            matches!(err, GenerationError::DisallowedDirection { .. }),
            "{ty}: {err}"
        );
    }
}

#[test]
fn nested_callable_parameter_fails_and_leaves_no_output() {
    let types = registry();
    let oracle = FragmentGeneratorOracle::with_builtins(&types, GeneratorConfig::default());
    let mut out = CodeWriter::new();
    out.print("var f = ");

    let err = oracle
        .generate(
            &types,
            Direction::ToJs,
            &TypeRef::class("com.example.Outer"),
            "fn",
            &mut out,
        )
        .unwrap_err();
    assert!(matches!(err, GenerationError::DisallowedDirection { .. }));
    assert_eq!(out.as_str(), "var f = ");
}

#[test]
fn self_referencing_callable_is_rejected() {
    let types = registry();
    let err = generate(&types, Direction::ToJs, "com.example.Recursive", "fn").unwrap_err();
    assert!(matches!(err, GenerationError::RecursiveType { .. }));
}

// ============================================================================
// Peering strategy
// ============================================================================

#[test]
fn node_uses_inherited_peer_field_and_own_factory() {
    let types = registry();
    let oracle = FragmentGeneratorOracle::with_builtins(&types, GeneratorConfig::default());
    let node = TypeRef::class("com.example.Node");

    let generator = oracle.find_fragment_generator(&types, &node).unwrap();
    assert_eq!(generator.name(), "peering");
    assert!(!generator.is_identity());
    assert_eq!(oracle.default_value(&types, &node).unwrap(), "null");

    let to_js = oracle
        .generate_to_string(&types, Direction::ToJs, &node, "node")
        .unwrap();
    assert_eq!(to_js, "node.@com.example.Base::jsoPeer");

    // the runtime handle read by toJS is what fromJS receives
    let from_js = oracle
        .generate_to_string(&types, Direction::FromJs, &node, &to_js)
        .unwrap();
    assert_eq!(
        from_js,
        "node.@com.example.Base::jsoPeer.__gwtPeer || \
         @com.example.Node::createPeer(Lcom/google/gwt/core/client/JavaScriptObject;)\
         (node.@com.example.Base::jsoPeer)"
    );
}

#[test]
fn type_without_conventions_is_not_accepted() {
    let types = registry();
    let oracle = FragmentGeneratorOracle::with_builtins(&types, GeneratorConfig::default());
    let plain = TypeRef::class("com.example.Plain");

    let err = oracle.find_fragment_generator(&types, &plain).unwrap_err();
    assert!(matches!(err, GenerationError::UnresolvableType { .. }));

    let peering = oracle
        .strategies()
        .iter()
        .find_map(|s| match s {
            Strategy::Peering(g) => Some(g),
            _ => None,
        })
        .unwrap();
    assert!(!peering.accepts(&types, oracle.config(), &plain));

    let ctx = oracle.context(&types, plain.clone(), "p");
    let mut out = CodeWriter::new();
    for (direction, convention) in [
        (Direction::ToJs, Convention::PeerField),
        (Direction::FromJs, Convention::FactoryMethod),
        (Direction::Extractor, Convention::ExtractorField),
    ] {
        let err = Strategy::Peering(PeeringFragmentGenerator::build(&types, oracle.config()))
            .emit(direction, &ctx, &mut out)
            .unwrap_err();
        match err {
            GenerationError::MissingConvention {
                convention: found, ..
            } => assert_eq!(found, convention),
            other => panic!("unexpected error: {other}"),
        }
    }
    assert!(out.is_empty());
}

// ============================================================================
// Oracle
// ============================================================================

#[derive(Debug)]
struct ArrayGenerator;

impl FragmentGenerator for ArrayGenerator {
    fn name(&self) -> &'static str {
        "array"
    }

    fn accepts(&self, _types: &dyn TypeOracle, _config: &GeneratorConfig, ty: &TypeRef) -> bool {
        matches!(ty, TypeRef::Array(_))
    }

    fn to_js(&self, ctx: &FragmentContext<'_>, out: &mut CodeWriter) -> GenResult<()> {
        out.print(&format!("@com.example.Arrays::toJS({})", ctx.parameter_name()));
        Ok(())
    }

    fn from_js(&self, ctx: &FragmentContext<'_>, out: &mut CodeWriter) -> GenResult<()> {
        out.print(&format!("@com.example.Arrays::fromJS({})", ctx.parameter_name()));
        Ok(())
    }
}

#[test]
fn custom_strategy_handles_nested_parameters() {
    let mut types = registry();
    types
        .register_class(
            callable("com.example.Sink")
                .with_method(MethodEntry::new("accept").with_param("xs", TypeRef::array(TypeRef::int()))),
        )
        .unwrap();

    let mut oracle = FragmentGeneratorOracle::with_builtins(&types, GeneratorConfig::default());
    oracle.register(Strategy::Custom(Box::new(ArrayGenerator)));

    let js = oracle
        .generate_to_string(&types, Direction::ToJs, &TypeRef::class("com.example.Sink"), "s")
        .unwrap();
    assert!(js.contains("    @com.example.Arrays::fromJS(arg0));"));
}

#[test]
fn identity_types_pass_through() {
    let types = registry();
    let oracle = FragmentGeneratorOracle::with_builtins(&types, GeneratorConfig::default());

    for ty in [TypeRef::int(), TypeRef::class(well_known::STRING), jso()] {
        assert_eq!(
            oracle.generate_to_string(&types, Direction::ToJs, &ty, "v").unwrap(),
            "v"
        );
        assert!(oracle.find_fragment_generator(&types, &ty).unwrap().is_identity());
    }
    assert_eq!(oracle.default_value(&types, &TypeRef::boolean()).unwrap(), "false");
}

#[test]
fn custom_indent_unit_is_used() {
    let types = registry();
    let oracle = FragmentGeneratorOracle::with_builtins(
        &types,
        GeneratorConfig::default().with_indent_unit("\t"),
    );
    let js = oracle
        .generate_to_string(&types, Direction::ToJs, &TypeRef::class("com.example.Visitor"), "v")
        .unwrap();
    assert!(js.contains("\n\treturn v.@com.example.Visitor::visit"));
    assert!(js.contains("\n\t\t\targ1);"));
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn registration_errors_convert_to_top_level() {
    let mut types = registry();
    let err: JsioError = types
        .register_class(ClassEntry::class("com.example.Node"))
        .unwrap_err()
        .into();
    assert_eq!(
        err,
        JsioError::Registration(RegistrationError::DuplicateType("com.example.Node".into()))
    );
}
