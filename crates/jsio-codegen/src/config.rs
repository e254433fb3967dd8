//! Generator configuration.
//!
//! The convention names are a compatibility contract with existing peered
//! types: the defaults below must not change.

use jsio_core::well_known;

/// Name of the field holding a peered object's runtime handle.
pub const PEER_FIELD: &str = "jsoPeer";
/// Name of the static factory building a host object from a runtime handle.
pub const FACTORY_METHOD: &str = "createPeer";
/// Name of the field holding a peered type's extractor.
pub const EXTRACTOR_FIELD: &str = "__extractor";
/// Runtime property caching the host object bound to a runtime handle.
pub const BACK_REFERENCE: &str = "__gwtPeer";
/// Property on the callable marker caching its exported runtime function.
pub const EXPORTED_FUNCTION: &str = "exportedFunction";
/// Prefix of linkage function parameter names (`arg0`, `arg1`, ...).
pub const LINKAGE_PARAM_PREFIX: &str = "arg";

/// Metadata tag designating exported methods.
pub const EXPORTED_TAG: &str = "gwt.exported";
/// Metadata tag renaming an exported member.
pub const FIELD_NAME_TAG: &str = "gwt.fieldName";
/// Metadata tag giving the runtime constructor expression.
pub const CONSTRUCTOR_TAG: &str = "gwt.constructor";

/// Well-known member names located by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    pub peer_field: String,
    pub factory_method: String,
    pub extractor_field: String,
    pub back_reference: String,
    pub exported_function: String,
    pub linkage_param_prefix: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            peer_field: PEER_FIELD.into(),
            factory_method: FACTORY_METHOD.into(),
            extractor_field: EXTRACTOR_FIELD.into(),
            back_reference: BACK_REFERENCE.into(),
            exported_function: EXPORTED_FUNCTION.into(),
            linkage_param_prefix: LINKAGE_PARAM_PREFIX.into(),
        }
    }
}

/// Qualified names of the runtime types the strategies test against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellKnownTypes {
    pub java_script_object: String,
    pub js_function: String,
    pub extractor: String,
    pub string: String,
}

impl Default for WellKnownTypes {
    fn default() -> Self {
        Self {
            java_script_object: well_known::JAVA_SCRIPT_OBJECT.into(),
            js_function: well_known::JS_FUNCTION.into(),
            extractor: well_known::EXTRACTOR.into(),
            string: well_known::STRING.into(),
        }
    }
}

/// Metadata tags read from classes and methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaDataTags {
    pub exported: String,
    pub field_name: String,
    pub constructor: String,
}

impl Default for MetaDataTags {
    fn default() -> Self {
        Self {
            exported: EXPORTED_TAG.into(),
            field_name: FIELD_NAME_TAG.into(),
            constructor: CONSTRUCTOR_TAG.into(),
        }
    }
}

/// Configuration shared by every strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub conventions: Conventions,
    pub types: WellKnownTypes,
    pub tags: MetaDataTags,
    /// Indent string for one level of nesting.
    pub indent_unit: String,
    /// Maximum nesting of sub-conversions.
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            conventions: Conventions::default(),
            types: WellKnownTypes::default(),
            tags: MetaDataTags::default(),
            indent_unit: "  ".into(),
            max_depth: 32,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conventions(mut self, conventions: Conventions) -> Self {
        self.conventions = conventions;
        self
    }

    pub fn with_types(mut self, types: WellKnownTypes) -> Self {
        self.types = types;
        self
    }

    pub fn with_tags(mut self, tags: MetaDataTags) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_conventions() {
        let config = GeneratorConfig::default();
        assert_eq!(config.conventions.peer_field, "jsoPeer");
        assert_eq!(config.conventions.factory_method, "createPeer");
        assert_eq!(config.conventions.extractor_field, "__extractor");
        assert_eq!(config.conventions.back_reference, "__gwtPeer");
        assert_eq!(config.conventions.exported_function, "exportedFunction");
        assert_eq!(config.tags.exported, "gwt.exported");
        assert_eq!(config.max_depth, 32);
    }

    #[test]
    fn builder_overrides() {
        let config = GeneratorConfig::new()
            .with_indent_unit("\t")
            .with_max_depth(4);
        assert_eq!(config.indent_unit, "\t");
        assert_eq!(config.max_depth, 4);
    }
}
