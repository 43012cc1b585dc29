use super::model::{MemberInfo, TypeInfo};
use super::type_system::{InheritanceProvider, MemberProvider, TypeProvider};

/// Stand-in for a host that cannot describe any types.
///
/// Capability queries fall back to their permissive answer and assignability
/// holds by identity only. The presence gate in [`analyze`](crate::analyze)
/// therefore turns every inspection off under this type system.
pub struct NoOpTypeSystem;

impl TypeProvider for NoOpTypeSystem {
    fn get_type_info(&self, _fqn: &str) -> Option<TypeInfo> {
        None
    }
}

impl InheritanceProvider for NoOpTypeSystem {
    fn get_superclass(&self, _fqn: &str) -> Option<String> {
        None
    }

    fn get_interfaces(&self, _fqn: &str) -> Vec<String> {
        vec![]
    }

    fn walk_ancestors(&self, _fqn: &str) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(std::iter::empty())
    }
}

impl MemberProvider for NoOpTypeSystem {
    fn get_members(&self, _type_fqn: &str, _member_name: &str) -> Vec<MemberInfo> {
        vec![]
    }

    fn get_all_members(&self, _type_fqn: &str) -> Vec<MemberInfo> {
        vec![]
    }
}
