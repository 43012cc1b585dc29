mod common;

use collscope_api::models::{FixKind, InspectionId, Severity, TypeRef};
use collscope_java::names::*;
use collscope_java::syntax::expr::{lambda, name};
use collscope_java::{AnalysisOptions, Expr, NoOpTypeSystem, TypeDecl, TypeUniverse};
use common::*;

const LAZY: InspectionId = InspectionId::NeedlessIntermediateCollections;

#[test]
fn test_whole_chain_reported_once() {
    let (tree, diagnostics) = run_only(LAZY, &[select_collect_detect()]);

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(covered(&tree, diagnostic), "coll.select(p).collect(f).detect(q)");
    assert_eq!(diagnostic.message, "Should use asLazy to avoid intermediate collections");
    assert_eq!(diagnostic.severity, Severity::Warning);

    let fix = diagnostic.fix.as_ref().unwrap();
    assert_eq!(fix.kind, FixKind::InsertText);
    assert_eq!(fix.family_name, "Use asLazy");
    assert_eq!(
        fixed(&tree, diagnostic),
        "coll.asLazy().select(p).collect(f).detect(q);\n"
    );
}

#[test]
fn test_inner_sub_chain_not_reported_again() {
    // every call here is a chain start on its own
    let mut expr = strings("coll");
    for method in ["select", "reject", "select", "collect"] {
        expr = eager(expr, method, [name("p")], mutable_list(string()));
    }
    let (tree, diagnostics) = run_only(LAZY, &[expr]);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        covered(&tree, &diagnostics[0]),
        "coll.select(p).reject(p).select(p).collect(p)"
    );
}

#[test]
fn test_single_call_is_not_a_chain() {
    let expr = eager(strings("coll"), "select", [name("p")], mutable_list(string()));
    let (_, diagnostics) = run_only(LAZY, &[expr]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_chain_ending_in_non_member_is_cut_short() {
    let selected = eager(strings("coll"), "select", [name("p")], mutable_list(string()));
    let expr = selected
        .call("sortThis", [])
        .typed(mutable_list(string()))
        .declared_in(EC_MUTABLE_LIST);
    let (_, diagnostics) = run_only(LAZY, &[expr]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_each_statement_stands_alone() {
    let (tree, diagnostics) = run_only(LAZY, &[select_collect_detect(), select_collect_detect()]);
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[0].range.end < diagnostics[1].range.start);
    assert!(diagnostics.iter().all(|d| covered(&tree, d) == "coll.select(p).collect(f).detect(q)"));
}

#[test]
fn test_chain_inside_lambda_argument() {
    let inner = eager(strings("xs"), "select", [name("p")], mutable_list(string()))
        .call("anySatisfy", [name("q")])
        .typed(TypeRef::raw("boolean"))
        .declared_in(EC_RICH_ITERABLE);
    let outer = eager(
        strings("coll"),
        "select",
        [lambda(["x"], inner)],
        mutable_list(string()),
    );
    let (tree, diagnostics) = run_only(LAZY, &[outer]);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(covered(&tree, &diagnostics[0]), "xs.select(p).anySatisfy(q)");
}

#[test]
fn test_unresolved_declaring_type_is_permissive() {
    let selected = strings("coll")
        .call("select", [name("p")])
        .typed(mutable_list(string()));
    let expr = selected.call("detect", [name("q")]).typed(string());
    let (_, diagnostics) = run_only(LAZY, &[expr]);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_declaring_type_without_as_lazy() {
    let ts = TypeUniverse::stdlib().with(
        TypeDecl::interface("test.EagerOnly")
            .extends(EC_RICH_ITERABLE)
            .method("select", mutable_list(string()), vec![]),
    );
    let selected = strings("coll")
        .call("select", [name("p")])
        .typed(mutable_list(string()))
        .declared_in("test.EagerOnly");
    let expr = selected.call("detect", [name("q")]).typed(string());
    let (_, diagnostics) = run(&[expr], &ts, &AnalysisOptions::only([LAZY]));

    // test.EagerOnly inherits asLazy from RichIterable
    assert_eq!(diagnostics.len(), 1);

    let ts = TypeUniverse::stdlib().with(TypeDecl::class("test.Plain"));
    let selected = strings("coll")
        .call("select", [name("p")])
        .typed(mutable_list(string()))
        .declared_in("test.Plain");
    let expr = selected.call("detect", [name("q")]).typed(string());
    let (_, diagnostics) = run(&[expr], &ts, &AnalysisOptions::only([LAZY]));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_already_lazy_chain_is_fine() {
    let selected = strings("coll")
        .call("asLazy", [])
        .typed(lazy_of(string()))
        .call("select", [name("p")])
        .typed(lazy_of(string()))
        .declared_in(EC_LAZY_ITERABLE);
    let expr = selected
        .call("collect", [name("f")])
        .typed(lazy_of(integer()))
        .declared_in(EC_LAZY_ITERABLE);
    let (_, diagnostics) = run_only(LAZY, &[expr]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_untyped_or_non_collection_result() {
    let untyped = strings("coll")
        .call("select", [name("p")])
        .call("collect", [name("f")]);
    let text = name("s")
        .call("select", [name("p")])
        .typed(string())
        .call("collect", [name("f")])
        .typed(string());
    let (_, diagnostics) = run_only(LAZY, &[untyped, text]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_receiverless_start_is_skipped() {
    let selected = Expr::bare_call("select", [name("p")])
        .typed(mutable_list(string()))
        .declared_in(EC_MUTABLE_LIST);
    let expr = selected.call("detect", [name("q")]).typed(string());
    let (_, diagnostics) = run_only(LAZY, &[expr]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_nameless_call_never_reported() {
    let nameless = Expr::Call {
        receiver: Some(Box::new(strings("coll"))),
        method: None,
        args: vec![],
        ty: Some(mutable_list(string())),
        declaring_type: None,
    };
    let expr = nameless.call("detect", [name("q")]).typed(string());
    let (_, diagnostics) = run_only(LAZY, &[expr]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_nothing_without_eclipse_collections() {
    let (_, diagnostics) = run(&[select_collect_detect()], &NoOpTypeSystem, &AnalysisOptions::default());
    assert!(diagnostics.is_empty());

    let (_, diagnostics) = run(&[select_collect_detect()], &TypeUniverse::new(), &AnalysisOptions::default());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_disabled_inspection_is_silent() {
    let options = AnalysisOptions::only([InspectionId::PreferNotEmpty]);
    let (_, diagnostics) = run(&[select_collect_detect()], &stdlib(), &options);
    assert!(diagnostics.is_empty());
}
