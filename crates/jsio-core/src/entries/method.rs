use crate::{MetaData, Modifiers, TypeRef};

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub param_type: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, param_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            param_type,
        }
    }
}

/// A method declared on a class or interface.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodEntry {
    /// Method name.
    pub name: String,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    /// Return type (`void` when nothing is returned).
    pub return_type: TypeRef,
    pub modifiers: Modifiers,
    /// Declarative markers (`gwt.exported`, `gwt.fieldName`, ...).
    pub metadata: MetaData,
}

impl MethodEntry {
    /// Create a `void` method with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: TypeRef::void(),
            modifiers: Modifiers::empty(),
            metadata: MetaData::new(),
        }
    }

    // === Builder Methods ===

    /// Append a parameter.
    pub fn with_param(mut self, name: impl Into<String>, param_type: TypeRef) -> Self {
        self.params.push(Param::new(name, param_type));
        self
    }

    /// Set the return type.
    pub fn returns(mut self, return_type: TypeRef) -> Self {
        self.return_type = return_type;
        self
    }

    /// Mark the method `static`.
    pub fn as_static(mut self) -> Self {
        self.modifiers |= Modifiers::STATIC;
        self
    }

    /// Mark the method `abstract`.
    pub fn as_abstract(mut self) -> Self {
        self.modifiers |= Modifiers::ABSTRACT;
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

    // === Queries ===

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }

    /// Parameter types in declaration order.
    pub fn param_types(&self) -> impl Iterator<Item = &TypeRef> {
        self.params.iter().map(|p| &p.param_type)
    }

    /// Check if the parameter types match `types` exactly.
    pub fn has_param_types(&self, types: &[TypeRef]) -> bool {
        self.params.len() == types.len() && self.param_types().zip(types).all(|(a, b)| a == b)
    }

    /// Concatenated JNI signatures of the parameters (`ILjava/lang/String;`).
    pub fn jni_param_signature(&self) -> String {
        self.param_types().map(TypeRef::jni_signature).collect()
    }
}
