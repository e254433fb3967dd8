//! Per-class resolution of the peering convention members.

use rustc_hash::FxHashMap;
use tracing::trace;

use jsio_core::{ClassEntry, FieldEntry, QualifiedName, SuperclassChain, TypeHash, TypeOracle, TypeRef};

use crate::config::GeneratorConfig;

/// A convention member and the class declaring it.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRef {
    /// Declaring class.
    pub owner: QualifiedName,
    /// Member name.
    pub name: String,
}

impl MemberRef {
    /// `@owner::name`
    pub fn jsni_reference(&self) -> String {
        format!("@{}::{}", self.owner, self.name)
    }
}

/// A peer factory: `static Owner createPeer(JavaScriptObject)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryRef {
    pub member: MemberRef,
    /// Declared return type, always the declaring class.
    pub return_type: TypeRef,
    /// JNI parameter signature.
    pub signature: String,
}

/// The convention members found for one class, nearest declaration first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeeringMembers {
    pub factory: Option<FactoryRef>,
    pub peer_field: Option<MemberRef>,
    pub extractor: Option<MemberRef>,
}

impl PeeringMembers {
    /// Resolve the members of `class` by walking its superclass chain.
    ///
    /// Each member is looked up independently; a candidate failing its type
    /// requirement does not stop the walk.
    pub fn resolve(types: &dyn TypeOracle, config: &GeneratorConfig, class: &ClassEntry) -> Self {
        let names = &config.conventions;
        let jso = TypeRef::class(&config.types.java_script_object);
        let extractor = TypeRef::class(&config.types.extractor);

        let factory = SuperclassChain::new(types, class).find_map(|c| {
            let own_type = c.as_type_ref();
            c.methods_named(&names.factory_method)
                .find(|m| {
                    m.is_static()
                        && m.has_param_types(std::slice::from_ref(&jso))
                        && m.return_type == own_type
                })
                .map(|m| FactoryRef {
                    member: MemberRef {
                        owner: c.name.clone(),
                        name: m.name.clone(),
                    },
                    return_type: own_type.clone(),
                    signature: m.jni_param_signature(),
                })
        });

        Self {
            factory,
            peer_field: find_field(types, class, &names.peer_field, &jso),
            extractor: find_field(types, class, &names.extractor_field, &extractor),
        }
    }

    /// True when no convention member was found.
    pub fn is_empty(&self) -> bool {
        self.factory.is_none() && self.peer_field.is_none() && self.extractor.is_none()
    }
}

fn find_field(
    types: &dyn TypeOracle,
    class: &ClassEntry,
    name: &str,
    required: &TypeRef,
) -> Option<MemberRef> {
    SuperclassChain::new(types, class).find_map(|c| {
        c.find_field(name)
            .filter(|f: &&FieldEntry| types.is_assignable(&f.field_type, required))
            .map(|f| MemberRef {
                owner: c.name.clone(),
                name: f.name.clone(),
            })
    })
}

/// Peering members of every class that has any, keyed by class hash.
#[derive(Debug, Clone, Default)]
pub struct PeeringIndex {
    members: FxHashMap<TypeHash, PeeringMembers>,
}

impl PeeringIndex {
    /// Resolve every class known to `types`.
    ///
    /// Classes registered later are not indexed.
    pub fn build(types: &dyn TypeOracle, config: &GeneratorConfig) -> Self {
        let members = types
            .classes()
            .filter_map(|class| {
                let found = PeeringMembers::resolve(types, config, class);
                if found.is_empty() {
                    return None;
                }
                trace!(type_name = %class.name, ?found, "indexed peering members");
                Some((class.type_hash, found))
            })
            .collect();
        Self { members }
    }

    pub fn get(&self, hash: TypeHash) -> Option<&PeeringMembers> {
        self.members.get(&hash)
    }

    /// Number of peered classes.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
