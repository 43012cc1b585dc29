//! Negated `isEmpty()` calls that read better as `notEmpty()`.

use super::InspectionContext;
use crate::names::METHOD_IS_EMPTY;
use crate::syntax::{NodeId, NodeKind, PrefixOp};
use collscope_api::models::{Diagnostic, Fix, InspectionId, Severity};
use tracing::trace;

pub const FIX_FAMILY: &str = "Use notEmpty";

/// Checks `!recv.isEmpty()`, offering `recv.notEmpty()` instead.
///
/// Only a negation applied directly to the call fires; `!(recv.isEmpty())`
/// and other operators do not.
pub fn check_prefix(ctx: &InspectionContext<'_>, node: NodeId) -> Option<Diagnostic> {
    let tree = ctx.tree;
    if !matches!(tree.kind(node), NodeKind::Prefix(PrefixOp::Not)) {
        return None;
    }

    let call = *tree.children(node).first()?;
    if tree.method_name(call)? != METHOD_IS_EMPTY || !tree.arguments(call).is_empty() {
        return None;
    }
    let receiver = tree.receiver(call)?;

    let not_empty = ctx.options.not_empty_method.as_str();
    // Unresolved calls are assumed to support it.
    if let Some(owner) = tree.declaring_type(call) {
        if !ctx.ts.has_nullary_capability(owner, not_empty) {
            trace!(owner, "No notEmpty on declaring type");
            return None;
        }
    }

    let range = tree.range(node);
    let replacement = format!("{}.{}()", tree.text(receiver), not_empty);
    Some(
        Diagnostic::new(
            InspectionId::PreferNotEmpty,
            range,
            format!("Should use {}() instead of negated isEmpty()", not_empty),
            Severity::Warning,
        )
        .with_fix(Fix::replace(FIX_FAMILY, range, replacement)),
    )
}
