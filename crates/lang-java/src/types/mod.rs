//! Type compatibility resolver.
//!
//! ```text
//! TypeProvider + InheritanceProvider + MemberProvider
//!       │  (blanket impl)
//!       ▼
//! JavaTypeSystem  →  is_assignable / has_capability / all_member_names
//! ```
//!
//! Inspections only ever see `&dyn JavaTypeSystem`; [`TypeUniverse`] is the
//! in-memory implementation hosts build per analysis run.

pub mod model;
pub mod noop;
pub mod primitives;
mod stdlib;
pub mod subtyping;
pub mod type_system;
pub mod universe;

pub use model::{MemberInfo, ParameterInfo, TypeInfo, TypeKind};
pub use noop::NoOpTypeSystem;
pub use primitives::{box_if_primitive, boxed_type, primitive_box_prefix};
pub use subtyping::is_assignable;
pub use type_system::{InheritanceProvider, JavaTypeSystem, MemberProvider, TypeProvider};
pub use universe::{MethodDecl, TypeDecl, TypeUniverse};
