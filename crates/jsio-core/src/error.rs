//! Error types shared across the workspace.
//!
//! ```text
//! JsioError (top-level wrapper)
//! ├── RegistrationError - Building the type model
//! └── GenerationError   - Emitting conversion fragments
//! ```
//!
//! Every generation error names the offending type (and member, where there is
//! one) so a failure can be diagnosed from the message alone.

use std::fmt;

use thiserror::Error;

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors that occur while registering host types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// A type with this name is already registered.
    #[error("duplicate type: '{0}' is already registered")]
    DuplicateType(String),

    /// A referenced type is not registered.
    #[error("type not found: '{name}' (referenced by '{referenced_by}')")]
    TypeNotFound { name: String, referenced_by: String },

    /// The inheritance graph contains a cycle.
    #[error("cyclic inheritance involving '{0}'")]
    CyclicInheritance(String),
}

// ============================================================================
// Generation Errors
// ============================================================================

/// A member located by naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// Field holding the runtime handle of a peered object.
    PeerField,
    /// Static factory constructing a host object from a runtime handle.
    FactoryMethod,
    /// Field holding an extractor for runtime collections.
    ExtractorField,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Convention::PeerField => "peer field",
            Convention::FactoryMethod => "factory method",
            Convention::ExtractorField => "extractor field",
        };
        f.write_str(s)
    }
}

/// Errors that abort generation of a member.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// A callable type declares no methods.
    #[error("no functions declared in '{type_name}'")]
    NoFunctionsDeclared { type_name: String },

    /// A callable type declares several methods and none is designated.
    #[error(
        "ambiguous export in '{type_name}': {count} methods declared and no single method designated with '{tag}'"
    )]
    AmbiguousExport {
        type_name: String,
        count: usize,
        tag: String,
    },

    /// The designated method does not exist.
    #[error("exported method '{method}' not found in '{type_name}'")]
    ExportedMethodNotFound { type_name: String, method: String },

    /// A required convention member is missing from the type and its ancestors.
    #[error("'{type_name}' has no {convention} named '{member}'")]
    MissingConvention {
        type_name: String,
        convention: Convention,
        member: String,
    },

    /// The conversion direction is not supported for this kind of type.
    #[error("{operation} is not allowed for '{type_name}' ({strategy})")]
    DisallowedDirection {
        type_name: String,
        operation: &'static str,
        strategy: &'static str,
    },

    /// The callable marker type was used directly instead of a subtype.
    #[error("'{type_name}' is the callable marker type; declare a sub-interface with a concrete method")]
    MalformedMarker { type_name: String },

    /// No strategy accepts a referenced type.
    #[error("no fragment generator accepts '{type_name}'")]
    UnresolvableType { type_name: String },

    /// Conversion of a type re-entered itself or nested too deeply.
    #[error("recursive conversion of '{type_name}' at depth {depth}")]
    RecursiveType { type_name: String, depth: usize },

    /// A class type is referenced but not registered with the oracle.
    #[error("unknown type '{type_name}'")]
    UnknownType { type_name: String },

    /// No runtime constructor expression is declared.
    #[error("no constructor declared for '{type_name}' (expected '{tag}')")]
    MissingConstructor { type_name: String, tag: String },

    /// Writing to the output sink failed.
    #[error("failed to write generated code")]
    Write(#[from] fmt::Error),
}

impl GenerationError {
    /// Name of the type the error concerns.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            GenerationError::NoFunctionsDeclared { type_name }
            | GenerationError::AmbiguousExport { type_name, .. }
            | GenerationError::ExportedMethodNotFound { type_name, .. }
            | GenerationError::MissingConvention { type_name, .. }
            | GenerationError::DisallowedDirection { type_name, .. }
            | GenerationError::MalformedMarker { type_name }
            | GenerationError::UnresolvableType { type_name }
            | GenerationError::RecursiveType { type_name, .. }
            | GenerationError::UnknownType { type_name }
            | GenerationError::MissingConstructor { type_name, .. } => Some(type_name),
            GenerationError::Write(_) => None,
        }
    }
}

/// Result of a generation step.
pub type GenResult<T> = Result<T, GenerationError>;

// ============================================================================
// Top-level Error
// ============================================================================

/// Any error produced by the workspace.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsioError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
