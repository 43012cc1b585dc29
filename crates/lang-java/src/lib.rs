//! Collection-usage analysis for typed Java expression trees.
//!
//! The host hands over an already typed [`SyntaxTree`] and a type universe;
//! [`analyze`] returns the diagnostics of every enabled inspection.

pub mod analysis;
pub mod inspection;
pub mod names;
pub mod syntax;
pub mod types;

pub use analysis::analyze;
pub use inspection::{AnalysisOptions, SeenCalls};
pub use syntax::{Expr, NodeId, NodeKind, SyntaxTree};
pub use types::{JavaTypeSystem, NoOpTypeSystem, TypeDecl, TypeUniverse};
