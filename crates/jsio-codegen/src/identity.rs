//! Values that are the same on both sides of the boundary.

use jsio_core::{GenResult, PrimitiveKind, TypeOracle, TypeRef};

use crate::config::GeneratorConfig;
use crate::context::FragmentContext;
use crate::generator::FragmentGenerator;
use crate::writer::CodeWriter;

/// Passes primitives, strings and runtime object handles through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFragmentGenerator;

impl FragmentGenerator for IdentityFragmentGenerator {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn accepts(&self, types: &dyn TypeOracle, config: &GeneratorConfig, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Primitive(_) => true,
            TypeRef::Class(class) => {
                class.name.to_string() == config.types.string
                    || types.is_assignable(ty, &TypeRef::class(&config.types.java_script_object))
            }
            TypeRef::Array(_) => false,
        }
    }

    fn is_identity(&self) -> bool {
        true
    }

    fn default_value(&self, _types: &dyn TypeOracle, ty: &TypeRef) -> String {
        let literal = match ty.as_primitive() {
            Some(PrimitiveKind::Boolean) => "false",
            Some(kind) if kind.is_numeric() => "0",
            _ => "null",
        };
        literal.to_string()
    }

    fn to_js(&self, ctx: &FragmentContext<'_>, out: &mut CodeWriter) -> GenResult<()> {
        out.print(ctx.parameter_name());
        Ok(())
    }

    fn from_js(&self, ctx: &FragmentContext<'_>, out: &mut CodeWriter) -> GenResult<()> {
        out.print(ctx.parameter_name());
        Ok(())
    }
}
