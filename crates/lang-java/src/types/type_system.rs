//! Core trait definitions for the type system abstraction.
//!
//! These traits abstract away the data source, allowing the inspections
//! to work with a host-built universe, the bundled stdlib, or test mocks.

use super::model::{MemberInfo, TypeInfo};
use collscope_api::models::TypeRef;
use std::collections::{HashSet, VecDeque};

/// Provides type information by FQN.
pub trait TypeProvider: Send + Sync {
    /// Get type info for a fully qualified name.
    ///
    /// Returns `None` if the type is not found.
    fn get_type_info(&self, fqn: &str) -> Option<TypeInfo>;

    fn is_known_type(&self, fqn: &str) -> bool {
        self.get_type_info(fqn).is_some()
    }
}

/// Provides inheritance relationship information.
pub trait InheritanceProvider: Send + Sync {
    /// Get the direct superclass of a type.
    ///
    /// Returns `None` for `java.lang.Object` or interfaces.
    fn get_superclass(&self, fqn: &str) -> Option<String>;

    /// Get the interfaces directly implemented (or, for interfaces, extended) by a type.
    fn get_interfaces(&self, fqn: &str) -> Vec<String>;

    /// Walk all ancestor types (superclasses and interfaces).
    ///
    /// Yields types in BFS order, each at most once, never the type itself.
    fn walk_ancestors(&self, fqn: &str) -> Box<dyn Iterator<Item = String> + '_> {
        let mut visited: HashSet<String> = HashSet::from([fqn.to_string()]);
        let mut queue: VecDeque<String> = self.direct_supertypes(fqn).into();
        let mut out = Vec::new();

        while let Some(curr) = queue.pop_front() {
            if !visited.insert(curr.clone()) {
                continue;
            }
            queue.extend(self.direct_supertypes(&curr));
            out.push(curr);
        }

        Box::new(out.into_iter())
    }

    fn direct_supertypes(&self, fqn: &str) -> Vec<String> {
        self.get_superclass(fqn)
            .into_iter()
            .chain(self.get_interfaces(fqn))
            .collect()
    }
}

/// Provides member lookup.
///
/// This is used to find members within a single type (not walking inheritance).
pub trait MemberProvider: Send + Sync {
    /// Find all methods directly declared in the given type with the matching name.
    fn get_members(&self, type_fqn: &str, member_name: &str) -> Vec<MemberInfo>;

    /// Get all methods directly declared in the given type.
    fn get_all_members(&self, type_fqn: &str) -> Vec<MemberInfo>;
}

/// The combined type system interface.
///
/// Provides the resolver queries the inspections rely on, with default
/// implementations built on the three provider traits.
pub trait JavaTypeSystem: TypeProvider + InheritanceProvider + MemberProvider {
    /// Find a member in the type hierarchy.
    ///
    /// Searches the type itself first, then walks ancestors.
    fn find_member_in_hierarchy(&self, type_fqn: &str, member_name: &str) -> Vec<MemberInfo> {
        let members = self.get_members(type_fqn, member_name);
        if !members.is_empty() {
            return members;
        }

        for ancestor in self.walk_ancestors(type_fqn) {
            let members = self.get_members(&ancestor, member_name);
            if !members.is_empty() {
                return members;
            }
        }

        vec![]
    }

    /// Names of every method declared on the type or inherited by it.
    fn all_member_names(&self, type_fqn: &str) -> HashSet<String> {
        std::iter::once(type_fqn.to_string())
            .chain(self.walk_ancestors(type_fqn))
            .flat_map(|fqn| self.get_all_members(&fqn))
            .map(|member| member.name)
            .collect()
    }

    /// Check if a value of type `source` can be assigned to `target`.
    ///
    /// Delegates to `subtyping::is_assignable` logic.
    fn is_assignable(&self, source: &TypeRef, target: &TypeRef) -> bool {
        crate::types::subtyping::is_assignable(source, target, self)
    }

    /// True iff the type or any ancestor declares a method named `method`.
    ///
    /// A type the universe does not know answers `true`: with partial type
    /// information a missed finding is worse than a spurious one.
    fn has_capability(&self, type_fqn: &str, method: &str) -> bool {
        if !self.is_known_type(type_fqn) {
            return true;
        }
        !self.find_member_in_hierarchy(type_fqn, method).is_empty()
    }

    /// Like [`has_capability`](Self::has_capability) but only counts zero-argument overloads.
    fn has_nullary_capability(&self, type_fqn: &str, method: &str) -> bool {
        if !self.is_known_type(type_fqn) {
            return true;
        }
        std::iter::once(type_fqn.to_string())
            .chain(self.walk_ancestors(type_fqn))
            .flat_map(|fqn| self.get_members(&fqn, method))
            .any(|member| member.arity() == 0)
    }
}

// Blanket implementation: any type implementing all three traits gets JavaTypeSystem
impl<T: TypeProvider + InheritanceProvider + MemberProvider> JavaTypeSystem for T {}
