//! JDK collection constructions with an Eclipse Collections counterpart.

use super::InspectionContext;
use crate::names::{JAVA_LANG_BOOLEAN, JAVA_UTIL_ARRAY_LIST, JAVA_UTIL_HASH_MAP, JAVA_UTIL_HASH_SET};
use crate::syntax::{NodeId, NodeKind};
use crate::types::primitive_box_prefix;
use collscope_api::models::{Diagnostic, InspectionId, Severity, TypeRef};
use tracing::trace;

/// Name of the replacement type for `container` instantiated with `args`.
///
/// Boxed primitive arguments map to the primitive specializations
/// (`IntArrayList`, `LongObjectHashMap`, ...), anything else to the generic
/// implementation. Returns `None` on an arity mismatch or when an argument
/// is not a class type.
pub fn suggest_alternative(container: &str, args: &[TypeRef]) -> Option<String> {
    match container {
        JAVA_UTIL_ARRAY_LIST => suggest_single(args, "ArrayList", "FastList"),
        JAVA_UTIL_HASH_SET => suggest_single(args, "HashSet", "UnifiedSet"),
        JAVA_UTIL_HASH_MAP => suggest_map(args),
        _ => None,
    }
}

fn suggest_single(args: &[TypeRef], primitive_suffix: &str, generic_impl: &str) -> Option<String> {
    let [element] = args else {
        return None;
    };
    if !element.is_class_type() {
        return None;
    }

    Some(match primitive_box_prefix(element) {
        Some(prefix) => format!("{}{}", prefix, primitive_suffix),
        None => format!("{}<{}>", generic_impl, element.presentable()),
    })
}

fn suggest_map(args: &[TypeRef]) -> Option<String> {
    let [key, value] = args else {
        return None;
    };
    if !key.is_class_type() || !value.is_class_type() {
        return None;
    }

    // There are no boolean-keyed primitive maps.
    let key_prefix = match key.as_fqn() {
        Some(JAVA_LANG_BOOLEAN) => None,
        _ => primitive_box_prefix(key),
    };
    Some(match (key_prefix, primitive_box_prefix(value)) {
        (None, None) => format!("UnifiedMap<{}, {}>", key.presentable(), value.presentable()),
        (key, value) => format!(
            "{}{}HashMap",
            key.unwrap_or("Object"),
            value.unwrap_or("Object")
        ),
    })
}

/// Checks a `new` expression.
pub fn check_new(ctx: &InspectionContext<'_>, node: NodeId) -> Option<Diagnostic> {
    let tree = ctx.tree;
    let NodeKind::New { class, diamond } = tree.kind(node) else {
        return None;
    };
    // `new ArrayList<>()` has nothing written to convert
    if *diamond || class.type_args().is_empty() {
        return None;
    }

    let container = tree.type_of(node)?.as_fqn()?;
    let suggestion = suggest_alternative(container, class.type_args())?;
    trace!(container, %suggestion, "Convertible construction");

    Some(Diagnostic::new(
        InspectionId::ConvertToEclipseCollection,
        tree.range(node),
        format!("Could use '{}' from Eclipse Collections", suggestion),
        Severity::WeakWarning,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::*;

    fn id(fqn: &str) -> TypeRef {
        TypeRef::id(fqn)
    }

    #[test]
    fn test_list_and_set_suggestions() {
        assert_eq!(
            suggest_alternative(JAVA_UTIL_ARRAY_LIST, &[id(JAVA_LANG_INTEGER)]).as_deref(),
            Some("IntArrayList")
        );
        assert_eq!(
            suggest_alternative(JAVA_UTIL_ARRAY_LIST, &[id(JAVA_LANG_STRING)]).as_deref(),
            Some("FastList<String>")
        );
        assert_eq!(
            suggest_alternative(JAVA_UTIL_HASH_SET, &[id(JAVA_LANG_CHARACTER)]).as_deref(),
            Some("CharHashSet")
        );
        assert_eq!(
            suggest_alternative(
                JAVA_UTIL_HASH_SET,
                &[TypeRef::generic(JAVA_UTIL_LIST, vec![id(JAVA_LANG_STRING)])]
            )
            .as_deref(),
            Some("UnifiedSet<List<String>>")
        );
    }

    #[test]
    fn test_map_naming_rules() {
        let cases = [
            (JAVA_LANG_INTEGER, JAVA_LANG_LONG, "IntLongHashMap"),
            (JAVA_LANG_INTEGER, JAVA_LANG_STRING, "IntObjectHashMap"),
            (JAVA_LANG_STRING, JAVA_LANG_DOUBLE, "ObjectDoubleHashMap"),
            (JAVA_LANG_STRING, JAVA_LANG_STRING, "UnifiedMap<String, String>"),
            (JAVA_LANG_STRING, JAVA_LANG_BOOLEAN, "ObjectBooleanHashMap"),
        ];
        for (key, value, expected) in cases {
            assert_eq!(
                suggest_alternative(JAVA_UTIL_HASH_MAP, &[id(key), id(value)]).as_deref(),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_boolean_keys_use_object_maps() {
        assert_eq!(
            suggest_alternative(JAVA_UTIL_HASH_MAP, &[id(JAVA_LANG_BOOLEAN), id(JAVA_LANG_STRING)])
                .as_deref(),
            Some("UnifiedMap<Boolean, String>")
        );
        assert_eq!(
            suggest_alternative(JAVA_UTIL_HASH_MAP, &[id(JAVA_LANG_BOOLEAN), id(JAVA_LANG_INTEGER)])
                .as_deref(),
            Some("ObjectIntHashMap")
        );
        assert_eq!(
            suggest_alternative(JAVA_UTIL_ARRAY_LIST, &[id(JAVA_LANG_BOOLEAN)]).as_deref(),
            Some("BooleanArrayList")
        );
    }

    #[test]
    fn test_shape_mismatches_yield_nothing() {
        assert_eq!(suggest_alternative(JAVA_UTIL_ARRAY_LIST, &[]), None);
        assert_eq!(
            suggest_alternative(JAVA_UTIL_HASH_MAP, &[id(JAVA_LANG_STRING)]),
            None
        );
        assert_eq!(
            suggest_alternative(JAVA_UTIL_ARRAY_LIST, &[TypeRef::raw("T")]),
            None
        );
        assert_eq!(
            suggest_alternative(
                JAVA_UTIL_ARRAY_LIST,
                &[TypeRef::array_of(TypeRef::raw("int"))]
            ),
            None
        );
        assert_eq!(
            suggest_alternative("java.util.LinkedList", &[id(JAVA_LANG_INTEGER)]),
            None
        );
    }
}
