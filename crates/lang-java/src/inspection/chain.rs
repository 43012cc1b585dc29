//! Fluent call-chain extraction.
//!
//! Uses an unfold over parent links to collect chains like
//! `coll.select(p).collect(f).detect(q)`, innermost call first.

use crate::syntax::{NodeId, SyntaxTree};
use std::collections::HashSet;

/// Call nodes ordered innermost to outermost; each call after the first has
/// the previous one as its receiver.
pub type CallChain = Vec<NodeId>;

/// Collects the chain that starts at `start` and continues through every
/// enclosing call whose method name is in `continuation`.
///
/// A call with no valid continuation yields a chain of length 1.
pub fn extract_call_chain(
    tree: &SyntaxTree,
    start: NodeId,
    continuation: &HashSet<String>,
) -> CallChain {
    std::iter::successors(Some(start), |&current| next_call(tree, current, continuation)).collect()
}

/// The call that uses `current` as its receiver, if it may extend the chain.
fn next_call(tree: &SyntaxTree, current: NodeId, continuation: &HashSet<String>) -> Option<NodeId> {
    let access = tree.parent(current)?;
    if tree.qualifier(access)? != current {
        return None;
    }

    let outer = tree.parent(access)?;
    if tree.callee(outer)? != access {
        return None;
    }

    let name = tree.method_name(outer)?;
    continuation.contains(name).then_some(outer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::expr::{Expr, name};

    fn names(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn first_call(tree: &SyntaxTree, method: &str) -> NodeId {
        tree.post_order()
            .into_iter()
            .find(|&id| tree.method_name(id) == Some(method))
            .unwrap()
    }

    fn chain_methods<'t>(tree: &'t SyntaxTree, chain: &CallChain) -> Vec<&'t str> {
        chain.iter().filter_map(|&id| tree.method_name(id)).collect()
    }

    #[test]
    fn test_walks_outward_through_members() {
        let tree = SyntaxTree::from_expr(
            &name("coll")
                .call("select", [name("p")])
                .call("collect", [name("f")])
                .call("detect", [name("q")]),
        );
        let chain = extract_call_chain(
            &tree,
            first_call(&tree, "select"),
            &names(&["select", "collect", "detect"]),
        );
        assert_eq!(chain_methods(&tree, &chain), vec!["select", "collect", "detect"]);
    }

    #[test]
    fn test_stops_at_non_member() {
        let tree = SyntaxTree::from_expr(
            &name("coll")
                .call("select", [name("p")])
                .call("toString", [])
                .call("collect", [name("f")]),
        );
        let chain = extract_call_chain(
            &tree,
            first_call(&tree, "select"),
            &names(&["select", "collect"]),
        );
        assert_eq!(chain_methods(&tree, &chain), vec!["select"]);
    }

    #[test]
    fn test_call_used_as_argument_is_not_a_receiver() {
        let tree = SyntaxTree::from_expr(
            &name("other").call("collect", [name("coll").call("select", [name("p")])]),
        );
        let chain = extract_call_chain(
            &tree,
            first_call(&tree, "select"),
            &names(&["select", "collect"]),
        );
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_nameless_outer_call_ends_chain() {
        let tree = SyntaxTree::from_expr(&Expr::Call {
            receiver: Some(Box::new(name("coll").call("select", [name("p")]))),
            method: None,
            args: vec![],
            ty: None,
            declaring_type: None,
        });
        let chain = extract_call_chain(&tree, first_call(&tree, "select"), &names(&["select"]));
        assert_eq!(chain.len(), 1);
    }
}
