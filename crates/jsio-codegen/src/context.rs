//! Conversion context.

use std::fmt;

use jsio_core::{GenResult, GenerationError, TypeHash, TypeOracle, TypeRef};
use tracing::error;

use crate::config::GeneratorConfig;
use crate::generator::{Direction, Strategy};
use crate::oracle::FragmentGeneratorOracle;
use crate::writer::CodeWriter;

/// The value being converted and where its type information comes from.
///
/// Contexts are immutable. Nested conversions (such as the parameters of a
/// linkage function) get a fresh context from [`sub_context`](Self::sub_context)
/// that records the enclosing types, so a callable that re-enters its own
/// conversion is reported instead of recursing.
#[derive(Clone)]
pub struct FragmentContext<'a> {
    return_type: TypeRef,
    parameter_name: String,
    types: &'a dyn TypeOracle,
    oracle: &'a FragmentGeneratorOracle,
    enclosing: Vec<TypeHash>,
}

impl fmt::Debug for FragmentContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FragmentContext")
            .field("return_type", &self.return_type)
            .field("parameter_name", &self.parameter_name)
            .field("enclosing", &self.enclosing)
            .finish_non_exhaustive()
    }
}

impl<'a> FragmentContext<'a> {
    /// Create a top-level context.
    pub fn new(
        types: &'a dyn TypeOracle,
        oracle: &'a FragmentGeneratorOracle,
        return_type: TypeRef,
        parameter_name: impl Into<String>,
    ) -> Self {
        Self {
            return_type,
            parameter_name: parameter_name.into(),
            types,
            oracle,
            enclosing: Vec::new(),
        }
    }

    /// Type of the value being converted.
    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    /// Identifier of the value in emitted code.
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    pub fn types(&self) -> &'a dyn TypeOracle {
        self.types
    }

    pub fn oracle(&self) -> &'a FragmentGeneratorOracle {
        self.oracle
    }

    pub fn config(&self) -> &'a GeneratorConfig {
        self.oracle.config()
    }

    /// Nesting depth; zero for a top-level context.
    pub fn depth(&self) -> usize {
        self.enclosing.len()
    }

    /// Create the context for converting a nested value.
    ///
    /// Fails when `ty` is a callable type already being converted further out,
    /// or when nesting exceeds the configured maximum depth. Other types may
    /// repeat along the chain: their conversions do not nest.
    pub fn sub_context(
        &self,
        ty: &TypeRef,
        parameter_name: impl Into<String>,
    ) -> GenResult<FragmentContext<'a>> {
        let depth = self.depth() + 1;
        let parent = self.return_type.type_hash();
        let reentered = ty.as_class().is_some_and(|class| {
            (class.hash == parent || self.enclosing.contains(&class.hash))
                && self.is_callable(ty)
        });

        if reentered || depth > self.config().max_depth {
            let type_name = ty.qualified_source_name();
            error!(type_name = %type_name, depth, "recursive conversion");
            return Err(GenerationError::RecursiveType { type_name, depth });
        }

        let mut enclosing = self.enclosing.clone();
        enclosing.push(parent);
        Ok(FragmentContext {
            return_type: ty.clone(),
            parameter_name: parameter_name.into(),
            types: self.types,
            oracle: self.oracle,
            enclosing,
        })
    }

    fn is_callable(&self, ty: &TypeRef) -> bool {
        let js_function = TypeRef::class(&self.config().types.js_function);
        self.types.is_assignable(ty, &js_function)
    }

    /// Find the strategy for this context's type.
    pub fn strategy(&self) -> GenResult<&'a Strategy> {
        self.oracle.find_strategy(self.types, &self.return_type)
    }

    /// Emit this context's conversion with whichever strategy accepts its type.
    pub fn emit(&self, direction: Direction, out: &mut CodeWriter) -> GenResult<()> {
        self.strategy()?.emit(direction, self, out)
    }
}
