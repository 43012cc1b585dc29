//! Lookup calls whose argument can never be found in the receiver.
//!
//! `contains`, `indexOf` and the map lookups take `Object`, so the compiler
//! accepts `names.contains(42)` on a `MutableList<String>`. This check
//! compares the argument type with the receiver's element (or key) type.

use super::InspectionContext;
use crate::names::{EC_LIST_ITERABLE, EC_MAP_ITERABLE, EC_ORDERED_ITERABLE, EC_RICH_ITERABLE};
use crate::syntax::{NodeId, NodeKind};
use crate::types::{JavaTypeSystem, TypeKind, box_if_primitive};
use collscope_api::models::{Diagnostic, InspectionId, Severity, TypeRef, simple_name};
use tracing::trace;

/// Which type argument of the receiver the lookup argument is compared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// First type argument, e.g. `K` of `MapIterable<K, V>`.
    Key,
    /// Last type argument, e.g. `T` of `RichIterable<T>` or `V` of a map.
    Element,
}

struct Pattern {
    method: &'static str,
    owner: &'static str,
    slot: Slot,
}

const PATTERNS: [Pattern; 6] = [
    Pattern {
        method: "contains",
        owner: EC_RICH_ITERABLE,
        slot: Slot::Element,
    },
    Pattern {
        method: "indexOf",
        owner: EC_ORDERED_ITERABLE,
        slot: Slot::Element,
    },
    Pattern {
        method: "lastIndexOf",
        owner: EC_LIST_ITERABLE,
        slot: Slot::Element,
    },
    Pattern {
        method: "get",
        owner: EC_MAP_ITERABLE,
        slot: Slot::Key,
    },
    Pattern {
        method: "containsKey",
        owner: EC_MAP_ITERABLE,
        slot: Slot::Key,
    },
    Pattern {
        method: "containsValue",
        owner: EC_MAP_ITERABLE,
        slot: Slot::Element,
    },
];

fn expected_type(receiver: &TypeRef, slot: Slot) -> Option<TypeRef> {
    let args = receiver.type_args();
    let arg = match slot {
        Slot::Key => args.first(),
        Slot::Element => args.last(),
    }?;

    match arg {
        TypeRef::Wildcard {
            bound: Some(bound),
            is_upper_bound: true,
        } => Some((**bound).clone()),
        TypeRef::Wildcard { .. } | TypeRef::Unknown => None,
        // type variable
        TypeRef::Raw(_) if !arg.is_primitive() => None,
        other => Some(other.clone()),
    }
}

fn is_interface(ts: &dyn JavaTypeSystem, ty: &TypeRef) -> bool {
    ty.as_fqn()
        .and_then(|fqn| ts.get_type_info(fqn))
        .is_some_and(|info| info.kind == TypeKind::Interface)
}

/// Whether a cast from `arg` to `expected` could succeed.
///
/// Any class may have a subclass implementing any interface, so a class and
/// an interface are always castable to each other.
fn is_convertible(ts: &dyn JavaTypeSystem, expected: &TypeRef, arg: &TypeRef) -> bool {
    ts.is_assignable(expected, arg) || is_interface(ts, expected) || is_interface(ts, arg)
}

pub fn check_call(ctx: &InspectionContext<'_>, call: NodeId) -> Option<Diagnostic> {
    let tree = ctx.tree;
    let method = tree.method_name(call)?;
    let [arg] = tree.arguments(call) else {
        return None;
    };

    let receiver = tree.receiver(call)?;
    if matches!(tree.kind(receiver), NodeKind::This | NodeKind::Super) {
        return None;
    }

    let owner = tree.declaring_type(call)?;
    let owner_type = TypeRef::id(owner);
    let pattern = PATTERNS.iter().find(|pattern| {
        pattern.method == method && ctx.ts.is_assignable(&owner_type, &TypeRef::id(pattern.owner))
    })?;

    let receiver_type = tree.type_of(receiver)?;
    let expected = expected_type(receiver_type, pattern.slot)?;
    let arg_type = box_if_primitive(tree.type_of(*arg)?);
    if matches!(arg_type, TypeRef::Unknown | TypeRef::Wildcard { .. })
        || (matches!(arg_type, TypeRef::Raw(_)) && !arg_type.is_primitive())
    {
        return None;
    }

    if ctx.ts.is_assignable(&arg_type, &expected) {
        return None;
    }

    let message = if is_convertible(ctx.ts, &expected, &arg_type) {
        if !ctx.options.report_convertible_method_calls {
            return None;
        }
        format!("Suspicious call to '{}.{}'", simple_name(owner), method)
    } else {
        format!(
            "'{}' may not contain objects of type '{}'",
            receiver_type.presentable(),
            arg_type.presentable()
        )
    };
    trace!(method, %expected, %arg_type, "Suspicious lookup");

    Some(Diagnostic::new(
        InspectionId::SuspiciousMethodCalls,
        tree.range(*arg),
        message,
        Severity::Warning,
    ))
}
