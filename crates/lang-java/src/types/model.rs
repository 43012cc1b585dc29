//! Answers handed out by the provider traits.
//!
//! Hosts never build these directly; a [`TypeUniverse`](super::TypeUniverse)
//! derives them from its declarations.

use collscope_api::models::TypeRef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A class or interface known to the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub fqn: String,
    pub kind: TypeKind,
    /// Declared type variables in order, e.g. `["K", "V"]` for `MapIterable`.
    pub type_parameters: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

/// One method as seen from the type it was looked up on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub name: String,
    /// `{declaring type}#{name}`
    pub fqn: String,
    /// Where the method is declared, possibly an ancestor of the lookup type.
    pub declaring_type: String,
    pub return_type: TypeRef,
    pub parameters: Vec<ParameterInfo>,
}

impl MemberInfo {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub type_ref: TypeRef,
    /// Only ever set on the last parameter.
    pub is_varargs: bool,
}
