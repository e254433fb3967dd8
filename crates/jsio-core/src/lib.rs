//! jsio core types.
//!
//! The host-side type model consumed by the marshalling generator, together with
//! the [`TypeOracle`] interface that supplies it and the error types shared by
//! every crate in the workspace.
//!
//! ## Modules
//!
//! - [`type_hash`]: Deterministic hash-based identity for types and members
//! - [`qualified_name`]: Package-qualified host type names
//! - [`type_ref`]: References to primitive, class and array types
//! - [`entries`]: Class, method and field entries with modifiers and metadata
//! - [`oracle`]: The read-only [`TypeOracle`] interface and superclass walking
//! - [`well_known`]: Names of the runtime types the generator relies on
//! - [`error`]: Registration and generation errors

pub mod entries;
pub mod error;
pub mod oracle;
pub mod qualified_name;
pub mod type_hash;
pub mod type_ref;
pub mod well_known;

pub use entries::{ClassEntry, ClassKind, FieldEntry, MetaData, MethodEntry, Modifiers, Param};
pub use error::{Convention, GenResult, GenerationError, JsioError, RegistrationError};
pub use oracle::{SuperclassChain, TypeOracle};
pub use qualified_name::QualifiedName;
pub use type_hash::TypeHash;
pub use type_ref::{ClassRef, PrimitiveKind, TypeRef};
