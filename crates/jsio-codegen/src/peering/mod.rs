//! Host objects backed by a runtime object.
//!
//! A peered type is recognised by convention members rather than a declared
//! interface: a static factory building the host object from a runtime handle,
//! a field holding the handle, and a field holding an extractor. Any of them may
//! be inherited.

mod index;

use std::fmt::Write;

use jsio_core::{Convention, GenResult, GenerationError, TypeOracle, TypeRef};
use tracing::{debug_span, error, warn};

use crate::config::GeneratorConfig;
use crate::context::FragmentContext;
use crate::generator::FragmentGenerator;
use crate::writer::CodeWriter;

pub use index::{FactoryRef, MemberRef, PeeringIndex, PeeringMembers};

/// Converts peered types through their convention members.
#[derive(Debug, Clone, Default)]
pub struct PeeringFragmentGenerator {
    index: PeeringIndex,
}

impl PeeringFragmentGenerator {
    pub fn new(index: PeeringIndex) -> Self {
        Self { index }
    }

    /// Index every class known to `types`.
    pub fn build(types: &dyn TypeOracle, config: &GeneratorConfig) -> Self {
        Self::new(PeeringIndex::build(types, config))
    }

    pub fn index(&self) -> &PeeringIndex {
        &self.index
    }

    fn members(&self, ty: &TypeRef) -> Option<&PeeringMembers> {
        ty.as_class().and_then(|c| self.index.get(c.hash))
    }
}

impl FragmentGenerator for PeeringFragmentGenerator {
    fn name(&self) -> &'static str {
        "peering"
    }

    fn accepts(&self, _types: &dyn TypeOracle, _config: &GeneratorConfig, ty: &TypeRef) -> bool {
        self.members(ty).is_some()
    }

    /// `p.__gwtPeer || @Owner::createPeer(Lcom/google/gwt/core/client/JavaScriptObject;)(p)`
    fn from_js(&self, ctx: &FragmentContext<'_>, out: &mut CodeWriter) -> GenResult<()> {
        let _span = debug_span!("from_js", strategy = "peering", type_name = %ctx.return_type()).entered();
        let ty = ctx.return_type();
        let config = ctx.config();

        let factory = match self.members(ty).and_then(|m| m.factory.as_ref()) {
            Some(factory) if ctx.types().is_assignable(&factory.return_type, ty) => factory,
            Some(factory) => {
                warn!(
                    type_name = %ty,
                    owner = %factory.member.owner,
                    "inherited factory returns a supertype, ignoring it"
                );
                return Err(missing(ctx, Convention::FactoryMethod, &config.conventions.factory_method));
            }
            None => {
                return Err(missing(ctx, Convention::FactoryMethod, &config.conventions.factory_method));
            }
        };

        let p = ctx.parameter_name();
        let back_reference = &config.conventions.back_reference;
        write!(
            out,
            "{p}.{back_reference} || {}({})({p})",
            factory.member.jsni_reference(),
            factory.signature
        )?;
        Ok(())
    }

    /// `p.@Owner::jsoPeer`
    fn to_js(&self, ctx: &FragmentContext<'_>, out: &mut CodeWriter) -> GenResult<()> {
        let _span = debug_span!("to_js", strategy = "peering", type_name = %ctx.return_type()).entered();
        let Some(peer) = self.members(ctx.return_type()).and_then(|m| m.peer_field.as_ref()) else {
            return Err(missing(ctx, Convention::PeerField, &ctx.config().conventions.peer_field));
        };

        out.print(ctx.parameter_name());
        out.print(".");
        out.print(&peer.jsni_reference());
        Ok(())
    }

    /// `@Owner::__extractor`
    fn write_extractor_reference(
        &self,
        ctx: &FragmentContext<'_>,
        out: &mut CodeWriter,
    ) -> GenResult<()> {
        let Some(extractor) = self.members(ctx.return_type()).and_then(|m| m.extractor.as_ref())
        else {
            return Err(missing(
                ctx,
                Convention::ExtractorField,
                &ctx.config().conventions.extractor_field,
            ));
        };

        out.print(&extractor.jsni_reference());
        Ok(())
    }
}

fn missing(ctx: &FragmentContext<'_>, convention: Convention, member: &str) -> GenerationError {
    let type_name = ctx.return_type().qualified_source_name();
    error!(
        type_name = %type_name,
        %convention,
        member,
        "the type or a supertype must declare the {} to be converted", convention
    );
    GenerationError::MissingConvention {
        type_name,
        convention,
        member: member.to_string(),
    }
}
