//! jsio: marshalling code generation between host objects and runtime objects.
//!
//! For every type crossing the boundary the generator picks a strategy and
//! emits the expression converting a value in the requested direction.
//!
//! ```
//! use jsio::prelude::*;
//!
//! let mut types = TypeRegistry::with_runtime_types();
//! types
//!     .register_class(
//!         ClassEntry::interface("com.example.Adder")
//!             .with_interface(well_known::JS_FUNCTION)
//!             .with_method(
//!                 MethodEntry::new("add")
//!                     .as_static()
//!                     .with_param("a", TypeRef::int())
//!                     .with_param("b", TypeRef::int())
//!                     .returns(TypeRef::int()),
//!             ),
//!     )
//!     .unwrap();
//!
//! let oracle = FragmentGeneratorOracle::with_builtins(&types, GeneratorConfig::default());
//! let js = oracle
//!     .generate_to_string(&types, Direction::ToJs, &TypeRef::class("com.example.Adder"), "fn")
//!     .unwrap();
//! assert!(js.ends_with("= @com.example.Adder::add(II)))"));
//! ```

pub use jsio_codegen;
pub use jsio_core;
pub use jsio_registry;

pub mod prelude {
    pub use jsio_codegen::{
        CodeWriter, Direction, ExportWriter, FragmentContext, FragmentGenerator,
        FragmentGeneratorOracle, GeneratorConfig, Strategy,
    };
    pub use jsio_core::{
        ClassEntry, FieldEntry, GenResult, GenerationError, JsioError, MethodEntry, TypeOracle,
        TypeRef, well_known,
    };
    pub use jsio_registry::TypeRegistry;
}
