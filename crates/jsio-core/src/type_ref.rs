//! References to host types.
//!
//! A [`TypeRef`] names the type of a parameter, return value or field. It is a
//! lightweight handle: class references carry only the hash and name, and are
//! resolved to a [`ClassEntry`](crate::ClassEntry) through a
//! [`TypeOracle`](crate::TypeOracle) when members are needed.

use std::fmt;

use crate::{QualifiedName, TypeHash};

/// Built-in primitive types of the host language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Get the source name of this primitive type.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Get the JNI descriptor character.
    pub const fn jni_descriptor(self) -> char {
        match self {
            PrimitiveKind::Void => 'V',
            PrimitiveKind::Boolean => 'Z',
            PrimitiveKind::Byte => 'B',
            PrimitiveKind::Char => 'C',
            PrimitiveKind::Short => 'S',
            PrimitiveKind::Int => 'I',
            PrimitiveKind::Long => 'J',
            PrimitiveKind::Float => 'F',
            PrimitiveKind::Double => 'D',
        }
    }

    /// Check if this is a numeric type (`char` included).
    pub const fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveKind::Void | PrimitiveKind::Boolean)
    }

    /// Get the TypeHash for this primitive type.
    pub fn type_hash(self) -> TypeHash {
        TypeHash::from_name(self.name())
    }
}

/// A reference to a class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef {
    /// Identity of the referenced type.
    pub hash: TypeHash,
    /// Qualified name of the referenced type.
    pub name: QualifiedName,
}

impl ClassRef {
    /// Create a class reference from a qualified name.
    pub fn new(name: QualifiedName) -> Self {
        Self {
            hash: name.type_hash(),
            name,
        }
    }
}

/// The type of a value crossing the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive, including `void` for return types.
    Primitive(PrimitiveKind),
    /// A class or interface.
    Class(ClassRef),
    /// An array of the element type.
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Reference a class or interface by dotted source name.
    pub fn class(name: &str) -> Self {
        TypeRef::Class(ClassRef::new(QualifiedName::parse(name)))
    }

    /// Reference an array of `element`.
    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    pub const fn void() -> Self {
        TypeRef::Primitive(PrimitiveKind::Void)
    }

    pub const fn boolean() -> Self {
        TypeRef::Primitive(PrimitiveKind::Boolean)
    }

    pub const fn int() -> Self {
        TypeRef::Primitive(PrimitiveKind::Int)
    }

    pub const fn double() -> Self {
        TypeRef::Primitive(PrimitiveKind::Double)
    }

    /// Get the identity of the referenced type.
    ///
    /// Arrays hash their source name (`int[]`), so two references to the same
    /// array type compare equal by hash.
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeRef::Primitive(kind) => kind.type_hash(),
            TypeRef::Class(class) => class.hash,
            TypeRef::Array(_) => TypeHash::from_name(&self.qualified_source_name()),
        }
    }

    /// Get the class reference if this is a class or interface.
    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            TypeRef::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Get the primitive kind if this is a primitive.
    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            TypeRef::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Check if this is `void`.
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Primitive(PrimitiveKind::Void))
    }

    /// Get the qualified source name (`int`, `com.example.Node`, `int[]`).
    pub fn qualified_source_name(&self) -> String {
        match self {
            TypeRef::Primitive(kind) => kind.name().to_string(),
            TypeRef::Class(class) => class.name.to_string(),
            TypeRef::Array(element) => format!("{}[]", element.qualified_source_name()),
        }
    }

    /// Get the JNI signature fragment (`I`, `Lcom/example/Node;`, `[I`).
    ///
    /// Concatenating the fragments of every parameter gives the canonical
    /// parameter-type signature used in JSNI method references.
    pub fn jni_signature(&self) -> String {
        match self {
            TypeRef::Primitive(kind) => kind.jni_descriptor().to_string(),
            TypeRef::Class(class) => format!("L{};", class.name.binary_name()),
            TypeRef::Array(element) => format!("[{}", element.jni_signature()),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_source_name())
    }
}

impl From<PrimitiveKind> for TypeRef {
    fn from(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive(kind)
    }
}
