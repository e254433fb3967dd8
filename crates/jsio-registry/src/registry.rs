//! TypeRegistry - in-memory store of host classes and interfaces.
//!
//! Entries are stored in registration order and indexed by [`TypeHash`]. The
//! registry is populated single-threaded before generation starts and is only
//! read afterwards.
//!
//! # Example
//!
//! ```
//! use jsio_core::{ClassEntry, TypeOracle};
//! use jsio_registry::TypeRegistry;
//!
//! let mut registry = TypeRegistry::with_runtime_types();
//! registry
//!     .register_class(
//!         ClassEntry::class("com.example.Node")
//!             .with_superclass("com.google.gwt.core.client.JavaScriptObject"),
//!     )
//!     .unwrap();
//!
//! assert!(registry.find_type("com.example.Node").is_some());
//! assert!(registry.validate_hierarchy().is_ok());
//! ```

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;
use tracing::{debug, error};

use jsio_core::{ClassEntry, RegistrationError, TypeHash, TypeOracle, well_known};

/// Registry of host classes and interfaces.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// Entries in registration order.
    classes: Vec<ClassEntry>,
    /// Index into `classes` by hash.
    by_hash: FxHashMap<TypeHash, usize>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the runtime types the generator relies on.
    ///
    /// Registers `java.lang.Object`, `java.lang.String`, `JavaScriptObject`, the
    /// `JSFunction` marker interface and the `Extractor` interface.
    pub fn with_runtime_types() -> Self {
        let mut registry = Self::new();
        let runtime = [
            ClassEntry::class(well_known::OBJECT),
            ClassEntry::class(well_known::STRING)
                .with_superclass(well_known::OBJECT)
                .as_final(),
            ClassEntry::class(well_known::JAVA_SCRIPT_OBJECT).with_superclass(well_known::OBJECT),
            ClassEntry::interface(well_known::JS_FUNCTION),
            ClassEntry::interface(well_known::EXTRACTOR),
        ];
        for entry in runtime {
            // Fresh registry, names are distinct.
            let hash = entry.type_hash;
            registry.by_hash.insert(hash, registry.classes.len());
            registry.classes.push(entry);
        }
        registry
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a class or interface.
    pub fn register_class(&mut self, entry: ClassEntry) -> Result<(), RegistrationError> {
        let hash = entry.type_hash;
        if self.by_hash.contains_key(&hash) {
            let name = entry.qualified_name();
            error!(type_name = %name, "duplicate type registration");
            return Err(RegistrationError::DuplicateType(name));
        }

        debug!(
            type_name = %entry.name,
            methods = entry.methods.len(),
            fields = entry.fields.len(),
            "registered type"
        );
        self.by_hash.insert(hash, self.classes.len());
        self.classes.push(entry);
        Ok(())
    }

    /// Register several entries, stopping at the first error.
    pub fn register_all(
        &mut self,
        entries: impl IntoIterator<Item = ClassEntry>,
    ) -> Result<(), RegistrationError> {
        entries
            .into_iter()
            .try_for_each(|entry| self.register_class(entry))
    }

    // ==========================================================================
    // Queries
    // ==========================================================================

    /// Check if a type is registered.
    pub fn contains(&self, hash: TypeHash) -> bool {
        self.by_hash.contains_key(&hash)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Registered entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.iter()
    }

    // ==========================================================================
    // Validation
    // ==========================================================================

    /// Check that every supertype reference resolves and that inheritance is
    /// acyclic.
    ///
    /// Unknown references are reported in registration order before cycles.
    pub fn validate_hierarchy(&self) -> Result<(), RegistrationError> {
        let mut graph: DiGraph<TypeHash, ()> = DiGraph::with_capacity(self.classes.len(), 0);
        let nodes: Vec<NodeIndex> = self
            .classes
            .iter()
            .map(|c| graph.add_node(c.type_hash))
            .collect();

        for (i, class) in self.classes.iter().enumerate() {
            for supertype in class.supertypes() {
                let Some(&target) = self.by_hash.get(&supertype.type_hash()) else {
                    let name = supertype.qualified_source_name();
                    error!(type_name = %class.name, supertype = %name, "unknown supertype");
                    return Err(RegistrationError::TypeNotFound {
                        name,
                        referenced_by: class.qualified_name(),
                    });
                };
                graph.add_edge(nodes[i], nodes[target], ());
            }
        }

        toposort(&graph, None).map(|_| ()).map_err(|cycle| {
            let name = self
                .get_class(graph[cycle.node_id()])
                .map(ClassEntry::qualified_name)
                .unwrap_or_default();
            error!(type_name = %name, "cyclic inheritance");
            RegistrationError::CyclicInheritance(name)
        })
    }
}

impl TypeOracle for TypeRegistry {
    fn get_class(&self, hash: TypeHash) -> Option<&ClassEntry> {
        self.by_hash.get(&hash).map(|&i| &self.classes[i])
    }

    fn classes(&self) -> Box<dyn Iterator<Item = &ClassEntry> + '_> {
        Box::new(self.classes.iter())
    }
}

#[cfg(test)]
mod tests {
    use jsio_core::{FieldEntry, MethodEntry, SuperclassChain, TypeRef};

    use super::*;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::with_runtime_types();
        registry
            .register_all([
                ClassEntry::class("com.example.Base").with_field(FieldEntry::new(
                    "jsoPeer",
                    TypeRef::class(well_known::JAVA_SCRIPT_OBJECT),
                )),
                ClassEntry::class("com.example.Node")
                    .with_superclass("com.example.Base")
                    .with_method(MethodEntry::new("createPeer").as_static()),
                ClassEntry::class("com.example.Leaf").with_superclass("com.example.Node"),
            ])
            .unwrap();
        registry
    }

    #[test]
    fn runtime_types_are_registered() {
        let registry = TypeRegistry::with_runtime_types();
        assert_eq!(registry.len(), 5);
        assert!(registry.find_type(well_known::JS_FUNCTION).unwrap().is_interface());
        assert!(registry.find_type(well_known::EXTRACTOR).is_some());
        assert!(registry.validate_hierarchy().is_ok());
    }

    #[test]
    fn register_duplicate_type_fails() {
        let mut registry = TypeRegistry::new();
        registry.register_class(ClassEntry::class("com.example.Node")).unwrap();
        let err = registry
            .register_class(ClassEntry::class("com.example.Node"))
            .unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateType("com.example.Node".into()));
    }

    #[test]
    fn iteration_keeps_registration_order() {
        let registry = registry();
        let names: Vec<String> = registry.iter().skip(5).map(|c| c.qualified_name()).collect();
        assert_eq!(names, ["com.example.Base", "com.example.Node", "com.example.Leaf"]);
    }

    #[test]
    fn superclass_chain_is_leaf_first() {
        let registry = registry();
        let leaf = registry.find_type("com.example.Leaf").unwrap();
        let names: Vec<String> = SuperclassChain::new(&registry, leaf)
            .map(|c| c.qualified_name())
            .collect();
        assert_eq!(names, ["com.example.Leaf", "com.example.Node", "com.example.Base"]);
    }

    #[test]
    fn superclass_chain_stops_on_cycle() {
        let mut registry = TypeRegistry::new();
        registry
            .register_all([
                ClassEntry::class("com.example.A").with_superclass("com.example.B"),
                ClassEntry::class("com.example.B").with_superclass("com.example.A"),
            ])
            .unwrap();
        let a = registry.find_type("com.example.A").unwrap();
        assert_eq!(SuperclassChain::new(&registry, a).count(), 2);
    }

    #[test]
    fn validate_reports_unknown_supertype() {
        let mut registry = TypeRegistry::new();
        registry
            .register_class(ClassEntry::class("com.example.Node").with_superclass("com.example.Missing"))
            .unwrap();
        let err = registry.validate_hierarchy().unwrap_err();
        assert_eq!(
            err,
            RegistrationError::TypeNotFound {
                name: "com.example.Missing".into(),
                referenced_by: "com.example.Node".into(),
            }
        );
    }

    #[test]
    fn validate_reports_cycle() {
        let mut registry = TypeRegistry::new();
        registry
            .register_all([
                ClassEntry::interface("com.example.A").with_interface("com.example.B"),
                ClassEntry::interface("com.example.B").with_interface("com.example.A"),
            ])
            .unwrap();
        let err = registry.validate_hierarchy().unwrap_err();
        assert!(matches!(err, RegistrationError::CyclicInheritance(_)));
    }

    #[test]
    fn oracle_assignability_uses_registry() {
        let registry = registry();
        assert!(registry.is_assignable(
            &TypeRef::class("com.example.Leaf"),
            &TypeRef::class("com.example.Base")
        ));
        assert!(!registry.is_assignable(
            &TypeRef::class("com.example.Base"),
            &TypeRef::class(well_known::JAVA_SCRIPT_OBJECT)
        ));
    }
}
