//! Well-known class and method names the inspections key on.

// --- Eclipse Collections API ---
pub const EC_RICH_ITERABLE: &str = "org.eclipse.collections.api.RichIterable";
pub const EC_LAZY_ITERABLE: &str = "org.eclipse.collections.api.LazyIterable";
pub const EC_INTERNAL_ITERABLE: &str = "org.eclipse.collections.api.InternalIterable";
pub const EC_ORDERED_ITERABLE: &str = "org.eclipse.collections.api.ordered.OrderedIterable";
pub const EC_LIST_ITERABLE: &str = "org.eclipse.collections.api.list.ListIterable";
pub const EC_MAP_ITERABLE: &str = "org.eclipse.collections.api.map.MapIterable";
pub const EC_MUTABLE_COLLECTION: &str = "org.eclipse.collections.api.collection.MutableCollection";
pub const EC_MUTABLE_LIST: &str = "org.eclipse.collections.api.list.MutableList";
pub const EC_MUTABLE_SET: &str = "org.eclipse.collections.api.set.MutableSet";
pub const EC_MUTABLE_MAP: &str = "org.eclipse.collections.api.map.MutableMap";
pub const EC_FAST_LIST: &str = "org.eclipse.collections.impl.list.mutable.FastList";
pub const EC_UNIFIED_SET: &str = "org.eclipse.collections.impl.set.mutable.UnifiedSet";
pub const EC_UNIFIED_MAP: &str = "org.eclipse.collections.impl.map.mutable.UnifiedMap";

// --- JDK ---
pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";
pub const JAVA_LANG_STRING: &str = "java.lang.String";
pub const JAVA_LANG_NUMBER: &str = "java.lang.Number";
pub const JAVA_LANG_ITERABLE: &str = "java.lang.Iterable";
pub const JAVA_LANG_BOOLEAN: &str = "java.lang.Boolean";
pub const JAVA_LANG_BYTE: &str = "java.lang.Byte";
pub const JAVA_LANG_CHARACTER: &str = "java.lang.Character";
pub const JAVA_LANG_SHORT: &str = "java.lang.Short";
pub const JAVA_LANG_INTEGER: &str = "java.lang.Integer";
pub const JAVA_LANG_LONG: &str = "java.lang.Long";
pub const JAVA_LANG_FLOAT: &str = "java.lang.Float";
pub const JAVA_LANG_DOUBLE: &str = "java.lang.Double";
pub const JAVA_UTIL_COLLECTION: &str = "java.util.Collection";
pub const JAVA_UTIL_LIST: &str = "java.util.List";
pub const JAVA_UTIL_SET: &str = "java.util.Set";
pub const JAVA_UTIL_MAP: &str = "java.util.Map";
pub const JAVA_UTIL_ARRAY_LIST: &str = "java.util.ArrayList";
pub const JAVA_UTIL_HASH_SET: &str = "java.util.HashSet";
pub const JAVA_UTIL_HASH_MAP: &str = "java.util.HashMap";

// --- Method names ---
pub const METHOD_AS_LAZY: &str = "asLazy";
pub const METHOD_IS_EMPTY: &str = "isEmpty";
pub const METHOD_NOT_EMPTY: &str = "notEmpty";
