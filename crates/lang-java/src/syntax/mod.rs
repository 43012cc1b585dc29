pub mod expr;
pub mod tree;

pub use expr::Expr;
pub use tree::{NodeId, NodeKind, PrefixOp, SourceNode, SyntaxTree};
