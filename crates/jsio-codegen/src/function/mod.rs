//! Callable types exported to the runtime as function objects.
//!
//! A callable type is a sub-interface of the `JSFunction` marker naming one
//! method. Converting an instance to the runtime yields a function object
//! cached on the instance, so repeated conversions return the same object.

mod linkage;

use std::fmt::Write;

use jsio_core::{ClassEntry, GenResult, GenerationError, MethodEntry, TypeHash, TypeOracle, TypeRef};
use tracing::{debug, debug_span, error};

use crate::config::GeneratorConfig;
use crate::context::FragmentContext;
use crate::generator::{Direction, FragmentGenerator, disallowed};
use crate::writer::CodeWriter;

pub(crate) use linkage::write_function_for_method;

/// Converts callable types to runtime functions.
///
/// Only the host-to-runtime direction is supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionFragmentGenerator;

impl FragmentGenerator for FunctionFragmentGenerator {
    fn name(&self) -> &'static str {
        "function"
    }

    fn accepts(&self, types: &dyn TypeOracle, config: &GeneratorConfig, ty: &TypeRef) -> bool {
        ty.as_class().is_some()
            && types.is_assignable(ty, &TypeRef::class(&config.types.js_function))
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    fn to_js(&self, ctx: &FragmentContext<'_>, out: &mut CodeWriter) -> GenResult<()> {
        let _span = debug_span!("to_js", strategy = "function", type_name = %ctx.return_type()).entered();
        let config = ctx.config();

        let Some(class) = ctx.types().resolve(ctx.return_type()) else {
            let type_name = ctx.return_type().qualified_source_name();
            error!(type_name = %type_name, "callable type is not registered");
            return Err(GenerationError::UnknownType { type_name });
        };

        if class.type_hash == TypeHash::from_name(&config.types.js_function) {
            let type_name = class.qualified_name();
            error!(
                type_name = %type_name,
                "a sub-interface of the callable marker is needed to extract a method signature"
            );
            return Err(GenerationError::MalformedMarker { type_name });
        }

        let method = find_exported_method(class, config)?;

        let p = ctx.parameter_name();
        let marker = &config.types.js_function;
        let cached = &config.conventions.exported_function;
        write!(out, "({p}.@{marker}::{cached} || ({p}.@{marker}::{cached} = ")?;
        write_function_for_method(ctx, class, method, out)?;
        out.print("))");
        Ok(())
    }

    fn from_js(&self, ctx: &FragmentContext<'_>, _out: &mut CodeWriter) -> GenResult<()> {
        Err(disallowed(ctx, Direction::FromJs, self.name()))
    }
}

/// Find the method a callable type exports.
///
/// A class-level export tag naming one method selects it. Without the tag the
/// type must declare exactly one method.
pub fn find_exported_method<'c>(
    class: &'c ClassEntry,
    config: &GeneratorConfig,
) -> GenResult<&'c MethodEntry> {
    let tag = &config.tags.exported;
    let designated = class.metadata.single_value(tag);
    let methods = &class.methods;

    if designated.is_none() && methods.len() > 1 {
        let type_name = class.qualified_name();
        error!(type_name = %type_name, count = methods.len(), "callable types with several methods must designate one with '{}'", tag);
        return Err(GenerationError::AmbiguousExport {
            type_name,
            count: methods.len(),
            tag: tag.clone(),
        });
    }

    let Some(first) = methods.first() else {
        let type_name = class.qualified_name();
        error!(type_name = %type_name, "callable type declares no functions");
        return Err(GenerationError::NoFunctionsDeclared { type_name });
    };

    let Some(name) = designated else {
        return Ok(first);
    };

    debug!(type_name = %class.name, method = name, "using export designation");
    match methods.iter().find(|m| m.name == name) {
        Some(method) => Ok(method),
        None => {
            let type_name = class.qualified_name();
            error!(type_name = %type_name, method = name, "exported function not found");
            Err(GenerationError::ExportedMethodNotFound {
                type_name,
                method: name.to_string(),
            })
        }
    }
}
