use crate::{Modifiers, TypeRef};

/// A field declared on a class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub field_type: TypeRef,
    pub modifiers: Modifiers,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            field_type,
            modifiers: Modifiers::empty(),
        }
    }

    /// Mark the field `static`.
    pub fn as_static(mut self) -> Self {
        self.modifiers |= Modifiers::STATIC;
        self
    }

    /// Mark the field `final`.
    pub fn as_final(mut self) -> Self {
        self.modifiers |= Modifiers::FINAL;
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }
}
