//! The fragment generator contract.
//!
//! A [`FragmentGenerator`] converts values of the types it accepts between the
//! host and runtime representations by emitting source fragments into a
//! [`CodeWriter`]. Built-in strategies are registered as [`Strategy`] variants
//! and probed in order by the [`FragmentGeneratorOracle`](crate::FragmentGeneratorOracle).

use std::fmt;

use jsio_core::{GenResult, GenerationError, TypeOracle, TypeRef};
use tracing::error;

use crate::config::GeneratorConfig;
use crate::context::FragmentContext;
use crate::function::FunctionFragmentGenerator;
use crate::identity::IdentityFragmentGenerator;
use crate::peering::PeeringFragmentGenerator;
use crate::writer::CodeWriter;

/// Which conversion to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Host value to runtime value.
    ToJs,
    /// Runtime value to host value.
    FromJs,
    /// Reference to a function extracting host values from a runtime collection.
    Extractor,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::ToJs => "toJS",
            Direction::FromJs => "fromJS",
            Direction::Extractor => "extractor reference",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-type conversion strategy.
///
/// Emitting operations write an expression with no trailing terminator so it
/// composes into a larger expression. A failing operation logs the offending
/// type before returning its error.
pub trait FragmentGenerator: fmt::Debug {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Check if this strategy handles `ty`. Must be pure.
    fn accepts(&self, types: &dyn TypeOracle, config: &GeneratorConfig, ty: &TypeRef) -> bool;

    /// True when both representations are the same value and no code is needed.
    fn is_identity(&self) -> bool {
        false
    }

    /// A literal usable as a placeholder value of `ty`.
    fn default_value(&self, _types: &dyn TypeOracle, _ty: &TypeRef) -> String {
        "null".to_string()
    }

    /// Emit an expression converting the host value `ctx.parameter_name()` to
    /// its runtime representation.
    fn to_js(&self, ctx: &FragmentContext<'_>, out: &mut CodeWriter) -> GenResult<()>;

    /// Emit an expression converting the runtime value `ctx.parameter_name()`
    /// to a host value of `ctx.return_type()`.
    fn from_js(&self, ctx: &FragmentContext<'_>, out: &mut CodeWriter) -> GenResult<()>;

    /// Emit a reference (not a call) to an extractor for `ctx.return_type()`.
    fn write_extractor_reference(
        &self,
        ctx: &FragmentContext<'_>,
        _out: &mut CodeWriter,
    ) -> GenResult<()> {
        Err(disallowed(ctx, Direction::Extractor, self.name()))
    }
}

/// Build and log a [`GenerationError::DisallowedDirection`].
pub(crate) fn disallowed(
    ctx: &FragmentContext<'_>,
    direction: Direction,
    strategy: &'static str,
) -> GenerationError {
    let type_name = ctx.return_type().qualified_source_name();
    error!(type_name = %type_name, strategy, "{} is not allowed", direction);
    GenerationError::DisallowedDirection {
        type_name,
        operation: direction.as_str(),
        strategy,
    }
}

/// A registered strategy.
#[derive(Debug)]
pub enum Strategy {
    Identity(IdentityFragmentGenerator),
    Function(FunctionFragmentGenerator),
    Peering(PeeringFragmentGenerator),
    /// A caller-supplied strategy.
    Custom(Box<dyn FragmentGenerator>),
}

impl Strategy {
    /// Get the strategy as a trait object.
    pub fn generator(&self) -> &dyn FragmentGenerator {
        match self {
            Strategy::Identity(g) => g,
            Strategy::Function(g) => g,
            Strategy::Peering(g) => g,
            Strategy::Custom(g) => g.as_ref(),
        }
    }

    /// Emit the conversion for `direction`.
    pub fn emit(
        &self,
        direction: Direction,
        ctx: &FragmentContext<'_>,
        out: &mut CodeWriter,
    ) -> GenResult<()> {
        let generator = self.generator();
        match direction {
            Direction::ToJs => generator.to_js(ctx, out),
            Direction::FromJs => generator.from_js(ctx, out),
            Direction::Extractor => generator.write_extractor_reference(ctx, out),
        }
    }
}

impl From<Box<dyn FragmentGenerator>> for Strategy {
    fn from(generator: Box<dyn FragmentGenerator>) -> Self {
        Strategy::Custom(generator)
    }
}
