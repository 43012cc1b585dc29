//! Needless intermediate collections.
//!
//! Every eager transformation on a rich iterable (`select`, `collect`, ...)
//! materializes a new collection. When two or more run back to back, going
//! through the lazy view first (`coll.asLazy().select(p).collect(f)`) avoids
//! the throw-away intermediates. The detector reports the longest such chain
//! once and remembers its calls so inner sub-chains stay quiet.

use super::chain::{CallChain, extract_call_chain};
use super::{AnalysisOptions, SeenCalls};
use crate::syntax::{NodeId, SyntaxTree};
use crate::types::JavaTypeSystem;
use collscope_api::models::{Diagnostic, Fix, InspectionId, Severity, TypeRef};
use std::collections::HashSet;
use tracing::{debug, trace};

pub const MESSAGE: &str = "Should use asLazy to avoid intermediate collections";
pub const FIX_FAMILY: &str = "Use asLazy";

pub struct LazyTransformInspection<'a> {
    ts: &'a dyn JavaTypeSystem,
    options: &'a AnalysisOptions,
    rich_type: TypeRef,
    lazy_type: TypeRef,
    /// Lazy methods returning a lazy iterable; a chain may start with them.
    start_names: HashSet<String>,
    /// Every lazy method name, inherited and terminal ones included.
    member_names: HashSet<String>,
}

impl<'a> LazyTransformInspection<'a> {
    /// Returns `None` when the lazy interface is not part of the universe.
    pub fn new(ts: &'a dyn JavaTypeSystem, options: &'a AnalysisOptions) -> Option<Self> {
        let lazy_fqn = options.lazy_iterable.as_str();
        if !ts.is_known_type(lazy_fqn) {
            debug!(lazy = lazy_fqn, "Lazy iterable type not found, detector disabled");
            return None;
        }

        let lazy_type = TypeRef::id(lazy_fqn);
        let start_names: HashSet<String> = ts
            .get_all_members(lazy_fqn)
            .into_iter()
            .filter(|member| ts.is_assignable(&member.return_type.erasure(), &lazy_type))
            .map(|member| member.name)
            .collect();
        let member_names = ts.all_member_names(lazy_fqn);
        debug!(
            starts = start_names.len(),
            members = member_names.len(),
            "Lazy transform detector ready"
        );

        Some(Self {
            ts,
            options,
            rich_type: TypeRef::id(options.rich_iterable.as_str()),
            lazy_type,
            start_names,
            member_names,
        })
    }

    pub fn start_names(&self) -> &HashSet<String> {
        &self.start_names
    }

    pub fn member_names(&self) -> &HashSet<String> {
        &self.member_names
    }

    /// Whether `call` may start a lazy chain.
    pub fn is_candidate(&self, tree: &SyntaxTree, call: NodeId) -> bool {
        // A call without a name cannot be ruled out here; the chain check
        // rejects it later because it is not a member.
        if let Some(method) = tree.method_name(call) {
            if !self.start_names.contains(method) {
                return false;
            }
        }

        let Some(ty) = tree.type_of(call) else {
            return false;
        };
        if !self.ts.is_assignable(ty, &self.rich_type) || self.ts.is_assignable(ty, &self.lazy_type) {
            return false;
        }

        // Unresolved calls pass.
        match tree.declaring_type(call) {
            Some(owner) => self.ts.has_nullary_capability(owner, &self.options.as_lazy_method),
            None => true,
        }
    }

    fn is_reportable(&self, tree: &SyntaxTree, chain: &CallChain, seen: &SeenCalls) -> bool {
        chain.len() >= 2
            && chain.iter().all(|&id| {
                tree.method_name(id)
                    .is_some_and(|name| self.member_names.contains(name))
            })
            && !chain.iter().any(|&id| seen.contains(id))
    }

    /// Reports the chain starting at `call`, if any, and marks its calls as seen.
    pub fn check_call(
        &self,
        tree: &SyntaxTree,
        call: NodeId,
        seen: &mut SeenCalls,
    ) -> Option<Diagnostic> {
        if !self.is_candidate(tree, call) {
            return None;
        }

        let chain = extract_call_chain(tree, call, &self.member_names);
        if !self.is_reportable(tree, &chain, seen) {
            trace!(len = chain.len(), "Chain not reportable");
            return None;
        }

        let first = *chain.first()?;
        let last = *chain.last()?;
        let receiver = tree.receiver(first)?;

        seen.mark_all(&chain);
        let range = tree.range(first).cover(tree.range(last));
        debug!(%range, len = chain.len(), "Needless intermediate collections");

        let fix = Fix::insert(
            FIX_FAMILY,
            tree.range(receiver).end,
            format!(".{}()", self.options.as_lazy_method),
        );
        Some(
            Diagnostic::new(
                InspectionId::NeedlessIntermediateCollections,
                range,
                MESSAGE,
                Severity::Warning,
            )
            .with_fix(fix),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::*;
    use crate::syntax::expr::name;
    use crate::types::TypeUniverse;

    fn list_of_strings() -> TypeRef {
        TypeRef::generic(EC_MUTABLE_LIST, vec![TypeRef::id(JAVA_LANG_STRING)])
    }

    #[test]
    fn test_name_sets_from_lazy_interface() {
        let ts = TypeUniverse::stdlib();
        let options = AnalysisOptions::default();
        let detector = LazyTransformInspection::new(&ts, &options).unwrap();

        for start in ["select", "reject", "collect", "flatCollect", "take", "distinct"] {
            assert!(detector.start_names().contains(start), "{} should start a chain", start);
        }
        // terminal and non-lazy-returning members
        for other in ["detect", "getFirst", "toArray", "anySatisfy", "makeString"] {
            assert!(!detector.start_names().contains(other));
            assert!(detector.member_names().contains(other), "{} should be a member", other);
        }
        assert!(!detector.member_names().contains("sortThis"));
    }

    #[test]
    fn test_disabled_without_lazy_interface() {
        let ts = TypeUniverse::new();
        let options = AnalysisOptions::default();
        assert!(LazyTransformInspection::new(&ts, &options).is_none());
    }

    #[test]
    fn test_lazy_receiver_is_not_a_candidate() {
        let ts = TypeUniverse::stdlib();
        let options = AnalysisOptions::default();
        let detector = LazyTransformInspection::new(&ts, &options).unwrap();
        let lazy = TypeRef::generic(EC_LAZY_ITERABLE, vec![TypeRef::id(JAVA_LANG_STRING)]);

        let tree = SyntaxTree::from_expr(
            &name("coll")
                .call("select", [name("p")])
                .typed(lazy.clone())
                .call("collect", [name("f")])
                .typed(lazy),
        );
        let mut seen = SeenCalls::new();
        for id in tree.post_order() {
            assert!(!detector.is_candidate(&tree, id));
            assert!(detector.check_call(&tree, id, &mut seen).is_none());
        }
    }

    #[test]
    fn test_fix_inserts_after_receiver() {
        let ts = TypeUniverse::stdlib();
        let options = AnalysisOptions::default();
        let detector = LazyTransformInspection::new(&ts, &options).unwrap();

        let tree = SyntaxTree::from_expr(
            &name("coll")
                .call("select", [name("p")])
                .typed(list_of_strings())
                .declared_in(EC_MUTABLE_LIST)
                .call("collect", [name("f")])
                .typed(list_of_strings())
                .declared_in(EC_MUTABLE_LIST),
        );
        let select = tree
            .post_order()
            .into_iter()
            .find(|&id| tree.method_name(id) == Some("select"))
            .unwrap();

        let mut seen = SeenCalls::new();
        let diagnostic = detector.check_call(&tree, select, &mut seen).unwrap();
        let fix = diagnostic.fix.unwrap();
        assert_eq!(
            fix.apply(tree.source()).unwrap(),
            "coll.asLazy().select(p).collect(f);\n"
        );
        assert_eq!(seen.len(), 2);
    }
}
