//! jsio Registry crate.
//!
//! Provides [`TypeRegistry`], the in-memory [`TypeOracle`](jsio_core::TypeOracle)
//! the generator reads host types from.

mod registry;

pub use registry::TypeRegistry;
