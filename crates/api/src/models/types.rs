use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "kind", content = "data")]
pub enum TypeRef {
    /// Primitive or unresolved type name (e.g., "int", "void", "T")
    Raw(String),

    /// Resolved reference to a declared type (FQN)
    Id(String),

    /// Generic instantiation (e.g., List<String>)
    Generic {
        base: Box<TypeRef>,
        args: Vec<TypeRef>,
    },

    /// Array type (e.g., String[])
    Array {
        element: Box<TypeRef>,
        dimensions: usize,
    },

    /// Wildcard type (e.g., ? extends Number)
    Wildcard {
        bound: Option<Box<TypeRef>>,
        is_upper_bound: bool, // true: extends, false: super
    },

    Unknown,
}

impl TypeRef {
    /// Helper to create a Raw type
    pub fn raw(s: impl Into<String>) -> Self {
        TypeRef::Raw(s.into())
    }

    /// Helper to create an Id type
    pub fn id(s: impl Into<String>) -> Self {
        TypeRef::Id(s.into())
    }

    /// Helper to create a parameterized class type
    pub fn generic(base: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Generic {
            base: Box::new(TypeRef::Id(base.into())),
            args,
        }
    }

    pub fn array_of(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
            dimensions: 1,
        }
    }

    /// FQN of the class this type refers to, ignoring type arguments.
    pub fn as_fqn(&self) -> Option<&str> {
        match self {
            TypeRef::Id(fqn) => Some(fqn),
            TypeRef::Generic { base, .. } => base.as_fqn(),
            _ => None,
        }
    }

    /// The type with its type arguments stripped.
    pub fn erasure(&self) -> TypeRef {
        match self {
            TypeRef::Generic { base, .. } => base.erasure(),
            other => other.clone(),
        }
    }

    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Generic { args, .. } => args,
            _ => &[],
        }
    }

    /// Class or interface type, possibly parameterized.
    pub fn is_class_type(&self) -> bool {
        matches!(self, TypeRef::Id(_) | TypeRef::Generic { .. })
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Raw(name) if PRIMITIVES.contains(&name.as_str()))
    }

    /// Short rendering used in messages and generated code, e.g. `List<String>`.
    pub fn presentable(&self) -> String {
        match self {
            TypeRef::Raw(name) => name.clone(),
            TypeRef::Id(fqn) => simple_name(fqn).to_string(),
            TypeRef::Generic { base, args } => {
                let args: Vec<String> = args.iter().map(TypeRef::presentable).collect();
                format!("{}<{}>", base.presentable(), args.join(", "))
            }
            TypeRef::Array {
                element,
                dimensions,
            } => format!("{}{}", element.presentable(), "[]".repeat(*dimensions)),
            TypeRef::Wildcard { bound: None, .. } => "?".to_string(),
            TypeRef::Wildcard {
                bound: Some(bound),
                is_upper_bound,
            } => {
                let keyword = if *is_upper_bound { "extends" } else { "super" };
                format!("? {} {}", keyword, bound.presentable())
            }
            TypeRef::Unknown => "?".to_string(),
        }
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::Unknown
    }
}

/// Canonical text, e.g. `java.util.List<java.lang.String>`.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Raw(name) => f.write_str(name),
            TypeRef::Id(fqn) => f.write_str(fqn),
            TypeRef::Generic { base, args } => {
                write!(f, "{}<", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeRef::Array {
                element,
                dimensions,
            } => write!(f, "{}{}", element, "[]".repeat(*dimensions)),
            TypeRef::Wildcard { bound: None, .. } => f.write_str("?"),
            TypeRef::Wildcard {
                bound: Some(bound),
                is_upper_bound,
            } => {
                let keyword = if *is_upper_bound { "extends" } else { "super" };
                write!(f, "? {} {}", keyword, bound)
            }
            TypeRef::Unknown => f.write_str("<unknown>"),
        }
    }
}

pub fn simple_name(fqn: &str) -> &str {
    fqn.rsplit('.').next().unwrap_or(fqn)
}
