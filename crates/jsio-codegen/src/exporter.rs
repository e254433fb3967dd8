//! Export of host methods onto runtime objects.
//!
//! Methods tagged as exported on a class or its superclasses become properties
//! of a runtime object. Each property holds the same function object the
//! callable strategy would emit for the method: a direct reference when no
//! conversion is needed, a linkage function otherwise.

use rustc_hash::FxHashSet;
use tracing::{debug, debug_span, error};

use jsio_core::{ClassEntry, GenResult, GenerationError, MethodEntry, SuperclassChain, TypeOracle};

use crate::context::FragmentContext;
use crate::function::write_function_for_method;
use crate::oracle::{FragmentGeneratorOracle, transactional};
use crate::writer::CodeWriter;

/// An exported method and the property it is exported as.
#[derive(Debug, Clone, Copy)]
pub struct Export<'a> {
    /// Property name on the runtime object.
    pub name: &'a str,
    /// Declaring class.
    pub owner: &'a ClassEntry,
    pub method: &'a MethodEntry,
}

/// Writes export, binding and constructor statements for a class.
pub struct ExportWriter<'a> {
    types: &'a dyn TypeOracle,
    oracle: &'a FragmentGeneratorOracle,
}

impl<'a> ExportWriter<'a> {
    pub fn new(types: &'a dyn TypeOracle, oracle: &'a FragmentGeneratorOracle) -> Self {
        Self { types, oracle }
    }

    /// Exported methods of `class` and its superclasses.
    ///
    /// The property name is the method name unless a field-name tag gives one.
    /// A declaration nearer `class` hides one further up with the same name.
    pub fn exports(&self, class: &'a ClassEntry) -> Vec<Export<'a>> {
        let tags = &self.oracle.config().tags;
        let mut seen = FxHashSet::default();
        let mut exports = Vec::new();

        for owner in SuperclassChain::new(self.types, class) {
            for method in owner.methods.iter().filter(|m| m.metadata.has(&tags.exported)) {
                let name = method
                    .metadata
                    .single_value(&tags.field_name)
                    .unwrap_or(&method.name);
                if seen.insert(name) {
                    exports.push(Export {
                        name,
                        owner,
                        method,
                    });
                }
            }
        }
        exports
    }

    /// Write `target.name = <function>;` for every export of `class`.
    ///
    /// Instance methods are invoked on `instance`.
    pub fn write_exports(
        &self,
        class: &'a ClassEntry,
        target: &str,
        instance: &str,
        out: &mut CodeWriter,
    ) -> GenResult<()> {
        let _span = debug_span!("write_exports", type_name = %class.name, object = target).entered();
        transactional(out, |out| self.write_export_statements(class, target, instance, out))
    }

    /// Bind `instance` to the runtime object `target`, then export onto it.
    ///
    /// The back-reference makes a later conversion of `target` back to the host
    /// yield `instance`.
    pub fn write_binding(
        &self,
        class: &'a ClassEntry,
        target: &str,
        instance: &str,
        out: &mut CodeWriter,
    ) -> GenResult<()> {
        let _span = debug_span!("write_binding", type_name = %class.name, object = target).entered();
        let back_reference = &self.oracle.config().conventions.back_reference;
        transactional(out, |out| {
            out.println(&format!("{target}.{back_reference} = {instance};"));
            self.write_export_statements(class, target, instance, out)
        })
    }

    /// Write `return new <expr>();` for the runtime constructor of `class`.
    ///
    /// The constructor tag of `method`, when given, takes precedence over the
    /// class tag.
    pub fn write_constructor(
        &self,
        class: &ClassEntry,
        method: Option<&MethodEntry>,
        out: &mut CodeWriter,
    ) -> GenResult<()> {
        let tag = &self.oracle.config().tags.constructor;
        let expr = method
            .and_then(|m| m.metadata.single_value(tag))
            .or_else(|| class.metadata.single_value(tag));

        let Some(expr) = expr else {
            let type_name = class.qualified_name();
            error!(type_name = %type_name, tag = %tag, "no runtime constructor declared");
            return Err(GenerationError::MissingConstructor {
                type_name,
                tag: tag.clone(),
            });
        };

        out.println(&format!("return new {expr}();"));
        Ok(())
    }

    fn write_export_statements(
        &self,
        class: &'a ClassEntry,
        target: &str,
        instance: &str,
        out: &mut CodeWriter,
    ) -> GenResult<()> {
        let ctx = FragmentContext::new(self.types, self.oracle, class.as_type_ref(), instance);
        for export in self.exports(class) {
            debug!(export = export.name, owner = %export.owner.name, "exporting method");
            out.print(&format!("{target}.{} = ", export.name));
            write_function_for_method(&ctx, export.owner, export.method, out)?;
            out.println(";");
        }
        Ok(())
    }
}
