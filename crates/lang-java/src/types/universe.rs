//! In-memory type universe.
//!
//! Hosts describe the types visible to one analysis unit as [`TypeDecl`]s;
//! the universe answers the provider queries from those declarations and is
//! never mutated while an analysis runs.

use super::model::{MemberInfo, ParameterInfo, TypeInfo, TypeKind};
use super::type_system::{InheritanceProvider, MemberProvider, TypeProvider};
use collscope_api::models::TypeRef;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A declared class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeDecl {
    pub fqn: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub superclass: Option<String>,
    /// Implemented interfaces, or extended interfaces for an interface.
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MethodDecl {
    pub name: String,
    pub returns: TypeRef,
    #[serde(default)]
    pub params: Vec<TypeRef>,
    #[serde(default)]
    pub varargs: bool,
}

impl TypeDecl {
    pub fn class(fqn: impl Into<String>) -> Self {
        Self::with_kind(fqn, TypeKind::Class)
    }

    pub fn interface(fqn: impl Into<String>) -> Self {
        Self::with_kind(fqn, TypeKind::Interface)
    }

    fn with_kind(fqn: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            fqn: fqn.into(),
            kind,
            type_parameters: vec![],
            superclass: None,
            interfaces: vec![],
            methods: vec![],
        }
    }

    pub fn params(mut self, names: &[&str]) -> Self {
        self.type_parameters = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Superclass for a class, super-interface for an interface.
    pub fn extends(mut self, fqn: impl Into<String>) -> Self {
        match self.kind {
            TypeKind::Interface => self.interfaces.push(fqn.into()),
            _ => self.superclass = Some(fqn.into()),
        }
        self
    }

    pub fn implements(mut self, fqn: impl Into<String>) -> Self {
        self.interfaces.push(fqn.into());
        self
    }

    pub fn method(mut self, name: impl Into<String>, returns: TypeRef, params: Vec<TypeRef>) -> Self {
        self.methods.push(MethodDecl {
            name: name.into(),
            returns,
            params,
            varargs: false,
        });
        self
    }

    fn member_info(&self, method: &MethodDecl) -> MemberInfo {
        let last = method.params.len().saturating_sub(1);
        MemberInfo {
            name: method.name.clone(),
            fqn: format!("{}#{}", self.fqn, method.name),
            declaring_type: self.fqn.clone(),
            return_type: method.returns.clone(),
            parameters: method
                .params
                .iter()
                .enumerate()
                .map(|(i, ty)| ParameterInfo {
                    type_ref: ty.clone(),
                    is_varargs: method.varargs && i == last,
                })
                .collect(),
        }
    }
}

/// The set of types visible to an analysis run.
#[derive(Debug, Clone, Default)]
pub struct TypeUniverse {
    types: IndexMap<String, TypeDecl>,
}

impl TypeUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// `java.lang`, `java.util` collections and the Eclipse Collections API.
    pub fn stdlib() -> Self {
        Self::from_decls(super::stdlib::STDLIB.iter().cloned())
    }

    pub fn from_decls(decls: impl IntoIterator<Item = TypeDecl>) -> Self {
        let mut universe = Self::new();
        universe.extend(decls);
        universe
    }

    /// Add a declaration. A later declaration of the same FQN replaces the earlier one.
    pub fn insert(&mut self, decl: TypeDecl) {
        self.types.insert(decl.fqn.clone(), decl);
    }

    pub fn extend(&mut self, decls: impl IntoIterator<Item = TypeDecl>) {
        for decl in decls {
            self.insert(decl);
        }
    }

    pub fn with(mut self, decl: TypeDecl) -> Self {
        self.insert(decl);
        self
    }

    pub fn get(&self, fqn: &str) -> Option<&TypeDecl> {
        self.types.get(fqn)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn decls(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }
}

impl TypeProvider for TypeUniverse {
    fn get_type_info(&self, fqn: &str) -> Option<TypeInfo> {
        self.types.get(fqn).map(|decl| TypeInfo {
            fqn: decl.fqn.clone(),
            kind: decl.kind,
            type_parameters: decl.type_parameters.clone(),
        })
    }
}

impl InheritanceProvider for TypeUniverse {
    fn get_superclass(&self, fqn: &str) -> Option<String> {
        self.types.get(fqn).and_then(|decl| decl.superclass.clone())
    }

    fn get_interfaces(&self, fqn: &str) -> Vec<String> {
        self.types
            .get(fqn)
            .map(|decl| decl.interfaces.clone())
            .unwrap_or_default()
    }
}

impl MemberProvider for TypeUniverse {
    fn get_members(&self, type_fqn: &str, member_name: &str) -> Vec<MemberInfo> {
        let Some(decl) = self.types.get(type_fqn) else {
            return vec![];
        };
        decl.methods
            .iter()
            .filter(|m| m.name == member_name)
            .map(|m| decl.member_info(m))
            .collect()
    }

    fn get_all_members(&self, type_fqn: &str) -> Vec<MemberInfo> {
        let Some(decl) = self.types.get(type_fqn) else {
            return vec![];
        };
        decl.methods.iter().map(|m| decl.member_info(m)).collect()
    }
}
