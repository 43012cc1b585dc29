//! Assignability rules.
//!
//! Determines if a value of one type can be assigned to another.
//! Supports:
//! - Identity
//! - Primitives (widening)
//! - Classes (extends) and interfaces (implements)
//! - Raw and parameterized class types
//! - Arrays (covariant)

use crate::names::JAVA_LANG_OBJECT;
use crate::types::type_system::JavaTypeSystem;
use collscope_api::models::TypeRef;

/// Check if `source` is assignable to `target`.
///
/// Never fails: when no declared relation connects the two types the answer is `false`.
pub fn is_assignable<T: JavaTypeSystem + ?Sized>(source: &TypeRef, target: &TypeRef, ts: &T) -> bool {
    // 1. Reflexivity
    if source == target {
        return true;
    }

    // 2. java.lang.Object accepts every reference type
    if target.as_fqn() == Some(JAVA_LANG_OBJECT) && target.type_args().is_empty() {
        return !source.is_primitive() && !matches!(source, TypeRef::Unknown);
    }

    match (source, target) {
        (TypeRef::Raw(s), TypeRef::Raw(t)) => is_primitive_widening(s, t),

        // Raw target: any parameterization of a subtype fits
        (TypeRef::Id(_) | TypeRef::Generic { .. }, TypeRef::Id(target_fqn)) => source
            .as_fqn()
            .is_some_and(|source_fqn| is_class_subtype(source_fqn, target_fqn, ts)),

        // Raw source into a parameterized target (unchecked conversion)
        (TypeRef::Id(source_fqn), TypeRef::Generic { .. }) => target
            .as_fqn()
            .is_some_and(|target_fqn| is_class_subtype(source_fqn, target_fqn, ts)),

        (
            TypeRef::Generic {
                args: source_args, ..
            },
            TypeRef::Generic {
                args: target_args, ..
            },
        ) => {
            let (Some(source_fqn), Some(target_fqn)) = (source.as_fqn(), target.as_fqn()) else {
                return false;
            };
            if !is_class_subtype(source_fqn, target_fqn, ts) {
                return false;
            }
            // Supertype parameters are not mapped through the hierarchy; when the
            // arities differ the class relation alone decides.
            if source_args.len() != target_args.len() {
                return true;
            }
            source_args
                .iter()
                .zip(target_args)
                .all(|(s, t)| type_arg_contains(t, s, ts))
        }

        (
            TypeRef::Array {
                element: e1,
                dimensions: d1,
            },
            TypeRef::Array {
                element: e2,
                dimensions: d2,
            },
        ) => {
            if d1 == d2 {
                if e1.is_primitive() || e2.is_primitive() {
                    return e1 == e2;
                }
                return is_assignable(e1, e2, ts);
            }
            // String[][] is an Object[]
            d1 > d2 && e2.as_fqn() == Some(JAVA_LANG_OBJECT)
        }

        _ => false,
    }
}

/// Whether the type argument `target` admits `source` (wildcards honour their bound).
fn type_arg_contains<T: JavaTypeSystem + ?Sized>(target: &TypeRef, source: &TypeRef, ts: &T) -> bool {
    match target {
        TypeRef::Wildcard { bound: None, .. } => true,
        TypeRef::Wildcard {
            bound: Some(bound),
            is_upper_bound: true,
        } => match source {
            TypeRef::Wildcard {
                bound: Some(source_bound),
                is_upper_bound: true,
            } => is_assignable(source_bound, bound, ts),
            TypeRef::Wildcard { .. } => false,
            _ => is_assignable(source, bound, ts),
        },
        TypeRef::Wildcard {
            bound: Some(bound),
            is_upper_bound: false,
        } => match source {
            TypeRef::Wildcard {
                bound: Some(source_bound),
                is_upper_bound: false,
            } => is_assignable(bound, source_bound, ts),
            TypeRef::Wildcard { .. } => false,
            _ => is_assignable(bound, source, ts),
        },
        _ => source == target,
    }
}

fn is_primitive_widening(sub: &str, sup: &str) -> bool {
    match sub {
        "byte" => matches!(sup, "short" | "int" | "long" | "float" | "double"),
        "short" => matches!(sup, "int" | "long" | "float" | "double"),
        "char" => matches!(sup, "int" | "long" | "float" | "double"),
        "int" => matches!(sup, "long" | "float" | "double"),
        "long" => matches!(sup, "float" | "double"),
        "float" => matches!(sup, "double"),
        _ => false,
    }
}

fn is_class_subtype<T: JavaTypeSystem + ?Sized>(sub_fqn: &str, super_fqn: &str, ts: &T) -> bool {
    if sub_fqn == super_fqn {
        return true;
    }

    ts.walk_ancestors(sub_fqn).any(|ancestor| ancestor == super_fqn)
}
