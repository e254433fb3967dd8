//! Read-only access to the host type model.

use rustc_hash::FxHashSet;

use crate::{ClassEntry, TypeHash, TypeRef};

/// Supplies reflective type information to the generator.
///
/// Implementations are read-only during generation.
pub trait TypeOracle {
    /// Look up a class or interface by hash.
    fn get_class(&self, hash: TypeHash) -> Option<&ClassEntry>;

    /// Look up a class or interface by qualified source name.
    fn find_type(&self, qualified_name: &str) -> Option<&ClassEntry> {
        self.get_class(TypeHash::from_name(qualified_name))
    }

    /// Every registered class and interface.
    fn classes(&self) -> Box<dyn Iterator<Item = &ClassEntry> + '_>;

    /// Resolve a type reference to its class entry.
    fn resolve(&self, ty: &TypeRef) -> Option<&ClassEntry> {
        ty.as_class().and_then(|c| self.get_class(c.hash))
    }

    /// Get the direct superclass of a class, if registered.
    fn superclass(&self, class: &ClassEntry) -> Option<&ClassEntry> {
        class.superclass_hash().and_then(|h| self.get_class(h))
    }

    /// Check if a value of type `from` can be used where `to` is expected.
    ///
    /// Reflexive. Walks the superclass and every super-interface breadth
    /// first, so inheritance cycles terminate. Primitives and arrays are only
    /// assignable to themselves.
    fn is_assignable(&self, from: &TypeRef, to: &TypeRef) -> bool {
        if from == to {
            return true;
        }
        let (Some(from_class), Some(target)) = (from.as_class(), to.as_class()) else {
            return false;
        };

        let mut visited = FxHashSet::default();
        let mut queue = vec![from_class.hash];
        while let Some(hash) = queue.pop() {
            if hash == target.hash {
                return true;
            }
            if !visited.insert(hash) {
                continue;
            }
            if let Some(entry) = self.get_class(hash) {
                queue.extend(entry.supertypes().map(TypeRef::type_hash));
            }
        }
        false
    }
}

/// Iterator over a class and its superclasses, leaf first.
///
/// Stops at the root, at a superclass that is not registered, or when a class
/// repeats.
pub struct SuperclassChain<'a> {
    types: &'a dyn TypeOracle,
    next: Option<&'a ClassEntry>,
    visited: FxHashSet<TypeHash>,
}

impl<'a> SuperclassChain<'a> {
    pub fn new(types: &'a dyn TypeOracle, start: &'a ClassEntry) -> Self {
        Self {
            types,
            next: Some(start),
            visited: FxHashSet::default(),
        }
    }
}

impl<'a> Iterator for SuperclassChain<'a> {
    type Item = &'a ClassEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.visited.insert(current.type_hash) {
            return None;
        }
        self.next = self.types.superclass(current);
        Some(current)
    }
}
