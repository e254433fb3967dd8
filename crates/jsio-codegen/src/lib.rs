//! jsio code generation.
//!
//! Emits the source fragments that move values between host objects and
//! runtime objects. Each type crossing the boundary is handled by the first
//! registered strategy that accepts it:
//!
//! 1. [`IdentityFragmentGenerator`]: primitives, strings, runtime handles
//! 2. [`FunctionFragmentGenerator`]: callable types, as cached runtime functions
//! 3. [`PeeringFragmentGenerator`]: host objects backed by a runtime object
//!
//! ## Modules
//!
//! - [`writer`]: Indentation-aware output buffer
//! - [`config`]: Convention names, well-known types and limits
//! - [`context`]: Immutable conversion context
//! - [`generator`]: The [`FragmentGenerator`] contract and [`Strategy`] dispatch
//! - [`oracle`]: Strategy selection and transactional generation
//! - [`exporter`]: Method exports, bindings and constructors

pub mod config;
pub mod context;
pub mod exporter;
pub mod function;
pub mod generator;
pub mod identity;
pub mod oracle;
pub mod peering;
pub mod writer;

pub use config::{Conventions, GeneratorConfig, MetaDataTags, WellKnownTypes};
pub use context::FragmentContext;
pub use exporter::{Export, ExportWriter};
pub use function::{FunctionFragmentGenerator, find_exported_method};
pub use generator::{Direction, FragmentGenerator, Strategy};
pub use identity::IdentityFragmentGenerator;
pub use oracle::FragmentGeneratorOracle;
pub use peering::{PeeringFragmentGenerator, PeeringIndex, PeeringMembers};
pub use writer::{Checkpoint, CodeWriter};
