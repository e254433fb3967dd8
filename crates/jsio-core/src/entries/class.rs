//! Class and interface entry.

use crate::{ClassRef, FieldEntry, MetaData, MethodEntry, Modifiers, QualifiedName, TypeHash, TypeRef};

/// Whether an entry is a class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
}

/// Registry entry for a host class or interface.
///
/// Only *declared* members are stored; inherited members are found by walking
/// the superclass chain through a [`TypeOracle`](crate::TypeOracle).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassEntry {
    /// Qualified name.
    pub name: QualifiedName,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    pub kind: ClassKind,
    pub modifiers: Modifiers,

    // === Inheritance ===
    /// Superclass (single inheritance). Interfaces have none.
    pub superclass: Option<TypeRef>,
    /// Implemented (or, for interfaces, extended) interfaces.
    pub interfaces: Vec<TypeRef>,

    // === Members ===
    /// Declared methods in declaration order.
    pub methods: Vec<MethodEntry>,
    /// Declared fields in declaration order.
    pub fields: Vec<FieldEntry>,

    /// Declarative markers on the type itself.
    pub metadata: MetaData,
}

impl ClassEntry {
    /// Create an entry of the given kind.
    pub fn new(name: impl Into<QualifiedName>, kind: ClassKind) -> Self {
        let name = name.into();
        Self {
            type_hash: name.type_hash(),
            name,
            kind,
            modifiers: Modifiers::empty(),
            superclass: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            metadata: MetaData::new(),
        }
    }

    /// Create a class entry from a dotted source name.
    pub fn class(name: &str) -> Self {
        Self::new(QualifiedName::parse(name), ClassKind::Class)
    }

    /// Create an interface entry from a dotted source name.
    pub fn interface(name: &str) -> Self {
        let mut entry = Self::new(QualifiedName::parse(name), ClassKind::Interface);
        entry.modifiers |= Modifiers::ABSTRACT;
        entry
    }

    // === Builder Methods ===

    /// Set the superclass by dotted source name.
    pub fn with_superclass(mut self, name: &str) -> Self {
        self.superclass = Some(TypeRef::class(name));
        self
    }

    /// Add an implemented interface by dotted source name.
    pub fn with_interface(mut self, name: &str) -> Self {
        self.interfaces.push(TypeRef::class(name));
        self
    }

    /// Add a method.
    pub fn with_method(mut self, method: MethodEntry) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a field.
    pub fn with_field(mut self, field: FieldEntry) -> Self {
        self.fields.push(field);
        self
    }

    /// Attach a metadata tag.
    pub fn with_metadata<I, S>(mut self, tag: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.push(tag, values);
        self
    }

    /// Mark the class `final`.
    pub fn as_final(mut self) -> Self {
        self.modifiers |= Modifiers::FINAL;
        self
    }

    // === Queries ===

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// Qualified source name (`com.example.Node`).
    pub fn qualified_name(&self) -> String {
        self.name.to_string()
    }

    /// Find a declared field by name.
    pub fn find_field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Find a declared method by name and exact parameter types.
    pub fn find_method(&self, name: &str, params: &[TypeRef]) -> Option<&MethodEntry> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.has_param_types(params))
    }

    /// Declared methods with the given name.
    pub fn methods_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a MethodEntry> + use<'a, 'n> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// Superclass hash, if any.
    pub fn superclass_hash(&self) -> Option<TypeHash> {
        self.superclass.as_ref().map(TypeRef::type_hash)
    }

    /// Direct supertypes: the superclass followed by the interfaces.
    pub fn supertypes(&self) -> impl Iterator<Item = &TypeRef> {
        self.superclass.iter().chain(self.interfaces.iter())
    }

    /// A type reference to this class.
    pub fn as_type_ref(&self) -> TypeRef {
        TypeRef::Class(ClassRef {
            hash: self.type_hash,
            name: self.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_builder() {
        let node = ClassEntry::class("com.example.Node")
            .with_superclass("com.example.Base")
            .with_field(FieldEntry::new("value", TypeRef::int()))
            .with_method(MethodEntry::new("visit").with_param("depth", TypeRef::int()));

        assert_eq!(node.type_hash, TypeHash::from_name("com.example.Node"));
        assert_eq!(node.superclass_hash(), Some(TypeHash::from_name("com.example.Base")));
        assert!(node.find_field("value").is_some());
        assert!(node.find_field("missing").is_none());
        assert!(node.find_method("visit", &[TypeRef::int()]).is_some());
        assert!(node.find_method("visit", &[]).is_none());
        assert!(!node.is_interface());
    }

    #[test]
    fn interface_is_abstract() {
        let cb = ClassEntry::interface("com.example.Callback")
            .with_interface("com.google.gwt.jsio.client.JSFunction");
        assert!(cb.is_interface());
        assert!(cb.modifiers.is_abstract());
        assert_eq!(cb.supertypes().count(), 1);
    }

    #[test]
    fn as_type_ref_matches_name() {
        let node = ClassEntry::class("com.example.Node");
        assert_eq!(node.as_type_ref(), TypeRef::class("com.example.Node"));
    }

    #[test]
    fn methods_named_finds_overloads() {
        let math = ClassEntry::class("com.example.Math")
            .with_method(MethodEntry::new("f").with_param("x", TypeRef::int()))
            .with_method(MethodEntry::new("f"))
            .with_method(MethodEntry::new("g"));
        assert_eq!(math.methods_named("f").count(), 2);
    }
}
