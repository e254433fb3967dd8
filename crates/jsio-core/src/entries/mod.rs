//! Host type entries.
//!
//! - [`ClassEntry`] - Classes and interfaces
//! - [`MethodEntry`] - Declared methods with [`Param`]s
//! - [`FieldEntry`] - Declared fields
//!
//! Supporting types:
//! - [`Modifiers`] - `static`, `final`, `abstract`
//! - [`MetaData`] - Declarative markers attached to classes and members

mod class;
mod field;
mod metadata;
mod method;
mod modifiers;

pub use class::{ClassEntry, ClassKind};
pub use field::FieldEntry;
pub use metadata::MetaData;
pub use method::{MethodEntry, Param};
pub use modifiers::Modifiers;
