//! Strategy selection and the top-level generation entry points.

use jsio_core::{GenResult, GenerationError, TypeOracle, TypeRef};
use tracing::{debug, debug_span, error};

use crate::config::GeneratorConfig;
use crate::context::FragmentContext;
use crate::function::FunctionFragmentGenerator;
use crate::generator::{Direction, FragmentGenerator, Strategy};
use crate::identity::IdentityFragmentGenerator;
use crate::peering::PeeringFragmentGenerator;
use crate::writer::CodeWriter;

/// Ordered set of strategies; the first one accepting a type handles it.
#[derive(Debug)]
pub struct FragmentGeneratorOracle {
    config: GeneratorConfig,
    strategies: Vec<Strategy>,
}

impl FragmentGeneratorOracle {
    /// Create an oracle with no strategies.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            strategies: Vec::new(),
        }
    }

    /// Create an oracle with the identity, function and peering strategies,
    /// in that order.
    ///
    /// The peering convention members of every class known to `types` are
    /// resolved here, once.
    pub fn with_builtins(types: &dyn TypeOracle, config: GeneratorConfig) -> Self {
        let peering = PeeringFragmentGenerator::build(types, &config);
        let mut oracle = Self::new(config);
        oracle.register(Strategy::Identity(IdentityFragmentGenerator));
        oracle.register(Strategy::Function(FunctionFragmentGenerator));
        oracle.register(Strategy::Peering(peering));
        oracle
    }

    /// Append a strategy. It is probed after those already registered.
    pub fn register(&mut self, strategy: Strategy) {
        self.strategies.push(strategy);
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Find the first strategy accepting `ty`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn find_strategy(&self, types: &dyn TypeOracle, ty: &TypeRef) -> GenResult<&Strategy> {
        let found = self
            .strategies
            .iter()
            .find(|s| s.generator().accepts(types, &self.config, ty));

        match found {
            Some(strategy) => {
                debug!(type_name = %ty, strategy = strategy.generator().name(), "selected fragment generator");
                Ok(strategy)
            }
            None => {
                let type_name = ty.qualified_source_name();
                error!(type_name = %type_name, "no fragment generator accepts type");
                Err(GenerationError::UnresolvableType { type_name })
            }
        }
    }

    /// Find the generator for `ty`.
    pub fn find_fragment_generator(
        &self,
        types: &dyn TypeOracle,
        ty: &TypeRef,
    ) -> GenResult<&dyn FragmentGenerator> {
        self.find_strategy(types, ty).map(Strategy::generator)
    }

    /// Placeholder literal for `ty`.
    pub fn default_value(&self, types: &dyn TypeOracle, ty: &TypeRef) -> GenResult<String> {
        Ok(self.find_fragment_generator(types, ty)?.default_value(types, ty))
    }

    /// Create a top-level context for converting `name` of type `ty`.
    pub fn context<'a>(
        &'a self,
        types: &'a dyn TypeOracle,
        ty: TypeRef,
        name: &str,
    ) -> FragmentContext<'a> {
        FragmentContext::new(types, self, ty, name)
    }

    /// Emit the `direction` conversion of `name` (of type `ty`) into `out`.
    ///
    /// On failure nothing is left in `out` from this call.
    pub fn generate(
        &self,
        types: &dyn TypeOracle,
        direction: Direction,
        ty: &TypeRef,
        name: &str,
        out: &mut CodeWriter,
    ) -> GenResult<()> {
        let _span = debug_span!("generate", %direction, type_name = %ty, param = name).entered();
        let ctx = self.context(types, ty.clone(), name);
        transactional(out, |out| ctx.emit(direction, out))
    }

    /// Like [`generate`](Self::generate) but into a fresh buffer.
    pub fn generate_to_string(
        &self,
        types: &dyn TypeOracle,
        direction: Direction,
        ty: &TypeRef,
        name: &str,
    ) -> GenResult<String> {
        let mut out = CodeWriter::with_indent_unit(self.config.indent_unit.as_str());
        self.generate(types, direction, ty, name, &mut out)?;
        Ok(out.finish())
    }
}

/// Run `f`, discarding its output if it fails.
pub(crate) fn transactional<T>(
    out: &mut CodeWriter,
    f: impl FnOnce(&mut CodeWriter) -> GenResult<T>,
) -> GenResult<T> {
    let checkpoint = out.checkpoint();
    match f(out) {
        Ok(value) => {
            debug_assert_eq!(
                out.indent_level(),
                checkpoint.indent_level(),
                "unbalanced indentation"
            );
            Ok(value)
        }
        Err(err) => {
            out.rollback(checkpoint);
            Err(err)
        }
    }
}
