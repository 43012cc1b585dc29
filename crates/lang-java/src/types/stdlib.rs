//! Bundled declarations for the JDK and Eclipse Collections types the
//! inspections refer to. Only signatures that matter for collection usage
//! are listed; type variables are written as `Raw` names.

use super::universe::TypeDecl;
use crate::names::*;
use collscope_api::models::TypeRef;
use once_cell::sync::Lazy;

pub(crate) static STDLIB: Lazy<Vec<TypeDecl>> = Lazy::new(|| {
    let mut decls = java_lang();
    decls.extend(java_util());
    decls.extend(eclipse_collections());
    decls
});

fn var(name: &str) -> TypeRef {
    TypeRef::raw(name)
}

fn of(base: &str, args: &[&str]) -> TypeRef {
    TypeRef::generic(base, args.iter().map(|a| var(a)).collect())
}

fn boolean() -> TypeRef {
    TypeRef::raw("boolean")
}

fn int() -> TypeRef {
    TypeRef::raw("int")
}

fn object() -> TypeRef {
    TypeRef::id(JAVA_LANG_OBJECT)
}

fn fn_arg() -> Vec<TypeRef> {
    vec![TypeRef::id(JAVA_LANG_OBJECT)]
}

fn java_lang() -> Vec<TypeDecl> {
    let mut decls = vec![
        TypeDecl::class(JAVA_LANG_OBJECT)
            .method("equals", boolean(), vec![object()])
            .method("hashCode", int(), vec![])
            .method("toString", TypeRef::id(JAVA_LANG_STRING), vec![]),
        TypeDecl::class(JAVA_LANG_STRING)
            .implements("java.lang.CharSequence")
            .method("isEmpty", boolean(), vec![])
            .method("length", int(), vec![]),
        TypeDecl::interface("java.lang.CharSequence").method("length", int(), vec![]),
        TypeDecl::class(JAVA_LANG_NUMBER)
            .method("intValue", int(), vec![])
            .method("longValue", TypeRef::raw("long"), vec![]),
        TypeDecl::class(JAVA_LANG_BOOLEAN),
        TypeDecl::class(JAVA_LANG_CHARACTER),
        TypeDecl::interface(JAVA_LANG_ITERABLE)
            .params(&["T"])
            .method("iterator", of("java.util.Iterator", &["T"]), vec![])
            .method("forEach", TypeRef::raw("void"), fn_arg()),
    ];
    for numeric in [
        JAVA_LANG_BYTE,
        JAVA_LANG_SHORT,
        JAVA_LANG_INTEGER,
        JAVA_LANG_LONG,
        JAVA_LANG_FLOAT,
        JAVA_LANG_DOUBLE,
    ] {
        decls.push(TypeDecl::class(numeric).extends(JAVA_LANG_NUMBER));
    }
    decls
}

fn java_util() -> Vec<TypeDecl> {
    vec![
        TypeDecl::interface(JAVA_UTIL_COLLECTION)
            .params(&["E"])
            .extends(JAVA_LANG_ITERABLE)
            .method("size", int(), vec![])
            .method("isEmpty", boolean(), vec![])
            .method("contains", boolean(), vec![object()])
            .method("add", boolean(), vec![var("E")])
            .method("remove", boolean(), vec![object()])
            .method("stream", of("java.util.stream.Stream", &["E"]), vec![]),
        TypeDecl::interface(JAVA_UTIL_LIST)
            .params(&["E"])
            .extends(JAVA_UTIL_COLLECTION)
            .method("get", var("E"), vec![int()])
            .method("indexOf", int(), vec![object()])
            .method("lastIndexOf", int(), vec![object()]),
        TypeDecl::interface(JAVA_UTIL_SET)
            .params(&["E"])
            .extends(JAVA_UTIL_COLLECTION),
        TypeDecl::interface(JAVA_UTIL_MAP)
            .params(&["K", "V"])
            .method("get", var("V"), vec![object()])
            .method("put", var("V"), vec![var("K"), var("V")])
            .method("containsKey", boolean(), vec![object()])
            .method("containsValue", boolean(), vec![object()])
            .method("isEmpty", boolean(), vec![])
            .method("size", int(), vec![]),
        TypeDecl::class(JAVA_UTIL_ARRAY_LIST)
            .params(&["E"])
            .implements(JAVA_UTIL_LIST),
        TypeDecl::class(JAVA_UTIL_HASH_SET)
            .params(&["E"])
            .implements(JAVA_UTIL_SET),
        TypeDecl::class(JAVA_UTIL_HASH_MAP)
            .params(&["K", "V"])
            .implements(JAVA_UTIL_MAP),
    ]
}

/// Adds the fluent transformations every Eclipse Collections container
/// re-declares with a covariant return type.
fn transformations(decl: TypeDecl, same: TypeRef, mapped: TypeRef) -> TypeDecl {
    decl.method("select", same.clone(), fn_arg())
        .method("reject", same.clone(), fn_arg())
        .method("selectInstancesOf", mapped.clone(), vec![TypeRef::id("java.lang.Class")])
        .method("collect", mapped.clone(), fn_arg())
        .method("collectIf", mapped.clone(), vec![object(), object()])
        .method("flatCollect", mapped, fn_arg())
        .method("tap", same, fn_arg())
}

fn eclipse_collections() -> Vec<TypeDecl> {
    let rich = transformations(
        TypeDecl::interface(EC_RICH_ITERABLE)
            .params(&["T"])
            .extends(EC_INTERNAL_ITERABLE),
        of(EC_RICH_ITERABLE, &["T"]),
        of(EC_RICH_ITERABLE, &["V"]),
    )
    .method("detect", var("T"), fn_arg())
    .method("detectOptional", of("java.util.Optional", &["T"]), fn_arg())
    .method("anySatisfy", boolean(), fn_arg())
    .method("allSatisfy", boolean(), fn_arg())
    .method("noneSatisfy", boolean(), fn_arg())
    .method("count", int(), fn_arg())
    .method("injectInto", var("IV"), vec![var("IV"), object()])
    .method("sumOfInt", TypeRef::raw("long"), fn_arg())
    .method("min", var("T"), vec![])
    .method("max", var("T"), vec![])
    .method("getFirst", var("T"), vec![])
    .method("getAny", var("T"), vec![])
    .method("size", int(), vec![])
    .method("isEmpty", boolean(), vec![])
    .method("notEmpty", boolean(), vec![])
    .method("contains", boolean(), vec![object()])
    .method("makeString", TypeRef::id(JAVA_LANG_STRING), vec![])
    .method("groupBy", of("org.eclipse.collections.api.multimap.Multimap", &["V", "T"]), fn_arg())
    .method("toList", of(EC_MUTABLE_LIST, &["T"]), vec![])
    .method("toSet", of(EC_MUTABLE_SET, &["T"]), vec![])
    .method("toSortedList", of(EC_MUTABLE_LIST, &["T"]), vec![])
    .method("asLazy", of(EC_LAZY_ITERABLE, &["T"]), vec![]);

    let lazy_same = of(EC_LAZY_ITERABLE, &["T"]);
    let lazy = transformations(
        TypeDecl::interface(EC_LAZY_ITERABLE)
            .params(&["T"])
            .extends(EC_RICH_ITERABLE),
        lazy_same.clone(),
        of(EC_LAZY_ITERABLE, &["V"]),
    )
    .method("take", lazy_same.clone(), vec![int()])
    .method("drop", lazy_same.clone(), vec![int()])
    .method("takeWhile", lazy_same.clone(), fn_arg())
    .method("dropWhile", lazy_same.clone(), fn_arg())
    .method("distinct", lazy_same.clone(), vec![])
    .method("concatenate", lazy_same.clone(), vec![of(JAVA_LANG_ITERABLE, &["T"])])
    .method("zip", of(EC_LAZY_ITERABLE, &["Pair"]), vec![object()])
    .method("zipWithIndex", of(EC_LAZY_ITERABLE, &["Pair"]), vec![])
    .method("chunk", of(EC_LAZY_ITERABLE, &["RichIterable"]), vec![int()])
    .method("asLazy", lazy_same, vec![])
    .method("getFirst", var("T"), vec![])
    .method("toArray", TypeRef::array_of(object()), vec![]);

    let ordered = transformations(
        TypeDecl::interface(EC_ORDERED_ITERABLE)
            .params(&["T"])
            .extends(EC_RICH_ITERABLE),
        of(EC_ORDERED_ITERABLE, &["T"]),
        of(EC_ORDERED_ITERABLE, &["V"]),
    )
    .method("getLast", var("T"), vec![])
    .method("indexOf", int(), vec![object()]);

    let list_iterable = transformations(
        TypeDecl::interface(EC_LIST_ITERABLE)
            .params(&["T"])
            .extends(EC_ORDERED_ITERABLE),
        of(EC_LIST_ITERABLE, &["T"]),
        of(EC_LIST_ITERABLE, &["V"]),
    )
    .method("get", var("T"), vec![int()])
    .method("lastIndexOf", int(), vec![object()]);

    let mutable_collection = transformations(
        TypeDecl::interface(EC_MUTABLE_COLLECTION)
            .params(&["T"])
            .extends(EC_RICH_ITERABLE)
            .extends(JAVA_UTIL_COLLECTION),
        of(EC_MUTABLE_COLLECTION, &["T"]),
        of(EC_MUTABLE_COLLECTION, &["V"]),
    )
    .method("with", of(EC_MUTABLE_COLLECTION, &["T"]), vec![var("T")]);

    let mutable_list = transformations(
        TypeDecl::interface(EC_MUTABLE_LIST)
            .params(&["T"])
            .extends(EC_MUTABLE_COLLECTION)
            .extends(EC_LIST_ITERABLE)
            .extends(JAVA_UTIL_LIST),
        of(EC_MUTABLE_LIST, &["T"]),
        of(EC_MUTABLE_LIST, &["V"]),
    )
    .method("distinct", of(EC_MUTABLE_LIST, &["T"]), vec![])
    .method("sortThis", of(EC_MUTABLE_LIST, &["T"]), vec![])
    .method("take", of(EC_MUTABLE_LIST, &["T"]), vec![int()])
    .method("with", of(EC_MUTABLE_LIST, &["T"]), vec![var("T")]);

    let mutable_set = transformations(
        TypeDecl::interface(EC_MUTABLE_SET)
            .params(&["T"])
            .extends(EC_MUTABLE_COLLECTION)
            .extends(JAVA_UTIL_SET),
        of(EC_MUTABLE_SET, &["T"]),
        of(EC_MUTABLE_SET, &["V"]),
    );

    let map_iterable = TypeDecl::interface(EC_MAP_ITERABLE)
        .params(&["K", "V"])
        .extends(EC_RICH_ITERABLE)
        .method("get", var("V"), vec![object()])
        .method("containsKey", boolean(), vec![object()])
        .method("containsValue", boolean(), vec![object()])
        .method("keysView", of(EC_LAZY_ITERABLE, &["K"]), vec![])
        .method("valuesView", of(EC_RICH_ITERABLE, &["V"]), vec![]);

    let mutable_map = TypeDecl::interface(EC_MUTABLE_MAP)
        .params(&["K", "V"])
        .extends(EC_MAP_ITERABLE)
        .extends(JAVA_UTIL_MAP)
        .method("collectValues", of(EC_MUTABLE_MAP, &["K", "VV"]), fn_arg())
        .method("getIfAbsentPut", var("V"), vec![var("K"), object()]);

    vec![
        TypeDecl::interface(EC_INTERNAL_ITERABLE)
            .params(&["T"])
            .extends(JAVA_LANG_ITERABLE)
            .method("forEach", TypeRef::raw("void"), fn_arg())
            .method("forEachWith", TypeRef::raw("void"), vec![object(), object()]),
        rich,
        lazy,
        ordered,
        list_iterable,
        mutable_collection,
        mutable_list,
        mutable_set,
        map_iterable,
        mutable_map,
        TypeDecl::class(EC_FAST_LIST)
            .params(&["T"])
            .implements(EC_MUTABLE_LIST),
        TypeDecl::class(EC_UNIFIED_SET)
            .params(&["T"])
            .implements(EC_MUTABLE_SET),
        TypeDecl::class(EC_UNIFIED_MAP)
            .params(&["K", "V"])
            .implements(EC_MUTABLE_MAP),
    ]
}

#[cfg(test)]
mod tests {
    use crate::names::*;
    use crate::types::{JavaTypeSystem, TypeUniverse};
    use collscope_api::models::TypeRef;

    #[test]
    fn test_fast_list_is_rich_but_not_lazy() {
        let ts = TypeUniverse::stdlib();
        let fast_list = TypeRef::generic(EC_FAST_LIST, vec![TypeRef::id(JAVA_LANG_STRING)]);
        assert!(ts.is_assignable(&fast_list, &TypeRef::id(EC_RICH_ITERABLE)));
        assert!(ts.is_assignable(&fast_list, &TypeRef::id(JAVA_UTIL_LIST)));
        assert!(!ts.is_assignable(&fast_list, &TypeRef::id(EC_LAZY_ITERABLE)));
    }

    #[test]
    fn test_mutable_list_supports_as_lazy() {
        let ts = TypeUniverse::stdlib();
        assert!(ts.has_nullary_capability(EC_MUTABLE_LIST, METHOD_AS_LAZY));
        assert!(ts.has_nullary_capability(EC_MUTABLE_MAP, METHOD_NOT_EMPTY));
        assert!(!ts.has_capability(JAVA_UTIL_ARRAY_LIST, METHOD_NOT_EMPTY));
    }

    #[test]
    fn test_boxes_are_numbers() {
        let ts = TypeUniverse::stdlib();
        assert!(ts.is_assignable(
            &TypeRef::id(JAVA_LANG_INTEGER),
            &TypeRef::id(JAVA_LANG_NUMBER)
        ));
    }
}
