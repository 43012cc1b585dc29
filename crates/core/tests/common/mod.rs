use collscope_api::models::TypeRef;
use collscope_core::AnalysisUnit;
use collscope_java::Expr;
use collscope_java::names::*;
use collscope_java::syntax::expr::{name, new_object, not};
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn list_of(element: &str) -> TypeRef {
    TypeRef::generic(EC_MUTABLE_LIST, vec![TypeRef::id(element)])
}

/// `coll.select(p).collect(f)` on a `MutableList<String>`.
#[allow(dead_code)]
pub fn eager_chain() -> Expr {
    name("coll")
        .typed(list_of(JAVA_LANG_STRING))
        .call("select", [name("p")])
        .typed(list_of(JAVA_LANG_STRING))
        .declared_in(EC_MUTABLE_LIST)
        .call("collect", [name("f")])
        .typed(list_of(JAVA_LANG_INTEGER))
        .declared_in(EC_MUTABLE_LIST)
}

#[allow(dead_code)]
pub fn negated_is_empty() -> Expr {
    not(name("list")
        .typed(list_of(JAVA_LANG_STRING))
        .call("isEmpty", [])
        .typed(TypeRef::raw("boolean"))
        .declared_in(EC_MUTABLE_LIST))
}

#[allow(dead_code)]
pub fn boxed_list() -> Expr {
    new_object(
        TypeRef::generic(JAVA_UTIL_ARRAY_LIST, vec![TypeRef::id(JAVA_LANG_INTEGER)]),
        [],
    )
}

#[allow(dead_code)]
pub fn unit(name: &str, statements: Vec<Expr>) -> AnalysisUnit {
    AnalysisUnit {
        name: name.to_string(),
        types: vec![],
        statements,
    }
}

#[allow(dead_code)]
pub fn write_unit(dir: &Path, file_name: &str, unit: &AnalysisUnit) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, serde_json::to_string_pretty(unit).unwrap()).unwrap();
    path
}
