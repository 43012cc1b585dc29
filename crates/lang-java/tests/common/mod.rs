use collscope_api::models::{Diagnostic, InspectionId, TypeRef};
use collscope_java::names::*;
use collscope_java::syntax::expr::name;
use collscope_java::{AnalysisOptions, Expr, JavaTypeSystem, NodeId, SyntaxTree, TypeUniverse, analyze};

#[allow(dead_code)]
pub fn stdlib() -> TypeUniverse {
    TypeUniverse::stdlib()
}

#[allow(dead_code)]
pub fn string() -> TypeRef {
    TypeRef::id(JAVA_LANG_STRING)
}

#[allow(dead_code)]
pub fn integer() -> TypeRef {
    TypeRef::id(JAVA_LANG_INTEGER)
}

#[allow(dead_code)]
pub fn mutable_list(element: TypeRef) -> TypeRef {
    TypeRef::generic(EC_MUTABLE_LIST, vec![element])
}

#[allow(dead_code)]
pub fn mutable_map(key: TypeRef, value: TypeRef) -> TypeRef {
    TypeRef::generic(EC_MUTABLE_MAP, vec![key, value])
}

#[allow(dead_code)]
pub fn lazy_of(element: TypeRef) -> TypeRef {
    TypeRef::generic(EC_LAZY_ITERABLE, vec![element])
}

/// `coll`, typed as a `MutableList<String>`.
#[allow(dead_code)]
pub fn strings(var: &str) -> Expr {
    name(var).typed(mutable_list(string()))
}

/// `receiver.method(args)` resolved against `MutableList` and returning `ty`.
#[allow(dead_code)]
pub fn eager(receiver: Expr, method: &str, args: impl IntoIterator<Item = Expr>, ty: TypeRef) -> Expr {
    receiver
        .call(method, args)
        .typed(ty)
        .declared_in(EC_MUTABLE_LIST)
}

/// `coll.select(p).collect(f).detect(q)` on a list of strings.
#[allow(dead_code)]
pub fn select_collect_detect() -> Expr {
    let selected = eager(strings("coll"), "select", [name("p")], mutable_list(string()));
    let collected = eager(selected, "collect", [name("f")], mutable_list(integer()));
    collected
        .call("detect", [name("q")])
        .typed(integer())
        .declared_in(EC_RICH_ITERABLE)
}

#[allow(dead_code)]
pub fn run(statements: &[Expr], ts: &dyn JavaTypeSystem, options: &AnalysisOptions) -> (SyntaxTree, Vec<Diagnostic>) {
    let tree = SyntaxTree::from_statements(statements);
    let diagnostics = analyze(&tree, ts, options);
    (tree, diagnostics)
}

/// Analyzes `statements` against the bundled stdlib with a single inspection enabled.
#[allow(dead_code)]
pub fn run_only(id: InspectionId, statements: &[Expr]) -> (SyntaxTree, Vec<Diagnostic>) {
    run(statements, &stdlib(), &AnalysisOptions::only([id]))
}

#[allow(dead_code)]
pub fn find_call(tree: &SyntaxTree, method: &str) -> NodeId {
    tree.post_order()
        .into_iter()
        .find(|&id| tree.method_name(id) == Some(method))
        .unwrap_or_else(|| panic!("no call to {}", method))
}

/// Source text a diagnostic covers.
#[allow(dead_code)]
pub fn covered<'t>(tree: &'t SyntaxTree, diagnostic: &Diagnostic) -> &'t str {
    diagnostic.range.slice(tree.source()).unwrap()
}

/// Source with the diagnostic's fix applied.
#[allow(dead_code)]
pub fn fixed(tree: &SyntaxTree, diagnostic: &Diagnostic) -> String {
    diagnostic
        .fix
        .as_ref()
        .expect("diagnostic has a fix")
        .apply(tree.source())
        .unwrap()
}
