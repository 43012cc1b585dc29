//! Boxed-primitive classification.

use crate::names::{
    JAVA_LANG_BOOLEAN, JAVA_LANG_BYTE, JAVA_LANG_CHARACTER, JAVA_LANG_DOUBLE, JAVA_LANG_FLOAT,
    JAVA_LANG_INTEGER, JAVA_LANG_LONG, JAVA_LANG_SHORT,
};
use collscope_api::models::TypeRef;

/// Boxed class, primitive keyword, Eclipse Collections primitive prefix.
const BOXES: [(&str, &str, &str); 8] = [
    (JAVA_LANG_FLOAT, "float", "Float"),
    (JAVA_LANG_DOUBLE, "double", "Double"),
    (JAVA_LANG_BYTE, "byte", "Byte"),
    (JAVA_LANG_CHARACTER, "char", "Char"),
    (JAVA_LANG_SHORT, "short", "Short"),
    (JAVA_LANG_INTEGER, "int", "Int"),
    (JAVA_LANG_LONG, "long", "Long"),
    (JAVA_LANG_BOOLEAN, "boolean", "Boolean"),
];

/// Prefix of the primitive specialization for a boxed primitive class, e.g.
/// `java.lang.Integer` → `Int`. Matches on the exact canonical name only.
pub fn primitive_box_prefix(ty: &TypeRef) -> Option<&'static str> {
    let fqn = ty.as_fqn()?;
    BOXES
        .iter()
        .find(|(boxed, _, _)| *boxed == fqn)
        .map(|(_, _, prefix)| *prefix)
}

/// Boxed class FQN for a primitive keyword, e.g. `int` → `java.lang.Integer`.
pub fn boxed_type(primitive: &str) -> Option<&'static str> {
    BOXES
        .iter()
        .find(|(_, keyword, _)| *keyword == primitive)
        .map(|(boxed, _, _)| *boxed)
}

/// `ty` with primitives replaced by their boxed class; other types unchanged.
pub fn box_if_primitive(ty: &TypeRef) -> TypeRef {
    match ty {
        TypeRef::Raw(name) => match boxed_type(name) {
            Some(boxed) => TypeRef::id(boxed),
            None => ty.clone(),
        },
        other => other.clone(),
    }
}
