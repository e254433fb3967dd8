//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash that identifies host types. Hashes are
//! computed from qualified source names, so a type can be referenced (for
//! example as a method parameter) before its entry is registered.
//!
//! # Examples
//!
//! ```
//! use jsio_core::{TypeHash, TypeRef};
//!
//! let node = TypeHash::from_name("com.example.Node");
//! assert_eq!(node, TypeHash::from_name("com.example.Node"));
//! assert_eq!(TypeRef::class("com.example.Node").type_hash(), node);
//! assert_ne!(node, TypeHash::from_name("com.example.Base"));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into every type hash.
const TYPE_DOMAIN: u64 = 0x2fac10b63a6cc57c;

/// A deterministic 64-bit hash identifying a host type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Create a type hash from a qualified source name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(TYPE_DOMAIN ^ xxh64(name.as_bytes(), 0))
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
