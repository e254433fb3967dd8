use std::fmt;

use crate::TypeHash;

/// Package-qualified name of a host type.
///
/// Nested types keep their enclosing type in `name`, separated by `.`
/// (`Outer.Inner`). The source form joins everything with `.`, while the
/// binary form used in JNI descriptors uses `/` for packages and `$` for
/// nesting.
///
/// # Examples
///
/// ```
/// use jsio_core::QualifiedName;
///
/// let node = QualifiedName::parse("com.example.Tree.Node");
/// assert_eq!(node.package(), "com.example");
/// assert_eq!(node.simple_name(), "Tree.Node");
/// assert_eq!(node.to_string(), "com.example.Tree.Node");
/// assert_eq!(node.binary_name(), "com/example/Tree$Node");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    /// Dotted package (e.g., "com.example"). Empty for the default package.
    pub package: String,
    /// Simple name, including enclosing types for nested types.
    pub name: String,
}

impl QualifiedName {
    /// Create a qualified name from a package and a (possibly nested) name.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Parse a dotted source name.
    ///
    /// Leading segments that start with a lowercase letter form the package;
    /// the first segment that does not starts the (possibly nested) type name.
    /// Primitive names such as `int` parse as a name in the default package.
    pub fn parse(s: &str) -> Self {
        let parts: Vec<&str> = s.split('.').filter(|p| !p.is_empty()).collect();
        let split = parts
            .iter()
            .position(|p| !p.starts_with(|c: char| c.is_ascii_lowercase()))
            .unwrap_or(parts.len().saturating_sub(1));
        Self {
            package: parts[..split].join("."),
            name: parts[split..].join("."),
        }
    }

    /// Check if this name is in the default package.
    pub fn is_default_package(&self) -> bool {
        self.package.is_empty()
    }

    /// Get the dotted package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Get the simple name (with enclosing types for nested types).
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Get the qualified source name (`com.example.Tree.Node`).
    pub fn source_name(&self) -> String {
        self.to_string()
    }

    /// Get the binary name used in JNI descriptors (`com/example/Tree$Node`).
    pub fn binary_name(&self) -> String {
        let nested = self.name.replace('.', "$");
        if self.package.is_empty() {
            nested
        } else {
            format!("{}/{}", self.package.replace('.', "/"), nested)
        }
    }

    /// Get the type hash for this name.
    pub fn type_hash(&self) -> TypeHash {
        TypeHash::from_name(&self.to_string())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
