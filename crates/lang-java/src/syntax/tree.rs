//! Read-only arena tree of typed expressions.
//!
//! Nodes are stored in a flat vector and refer to each other by [`NodeId`];
//! parent links are plain ids, so the tree has no ownership cycles.

use collscope_api::models::{TextRange, TypeRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PrefixOp {
    Not,
    Minus,
    Plus,
    BitNot,
    Increment,
    Decrement,
}

impl PrefixOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOp::Not => "!",
            PrefixOp::Minus => "-",
            PrefixOp::Plus => "+",
            PrefixOp::BitNot => "~",
            PrefixOp::Increment => "++",
            PrefixOp::Decrement => "--",
        }
    }
}

/// Closed set of node kinds the inspections understand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Unit,
    Statement,
    Name(String),
    This,
    Super,
    Literal(String),
    /// Children: the callee [`NodeKind::MemberAccess`], then the arguments.
    MethodCall { method: Option<String> },
    /// Children: the qualifier, if any.
    MemberAccess { name: Option<String> },
    /// Children: the constructor arguments.
    New { class: TypeRef, diamond: bool },
    /// Children: the operand.
    Prefix(PrefixOp),
    Paren,
    /// Children: the body.
    Lambda { params: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct SourceNode {
    pub kind: NodeKind,
    pub range: TextRange,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Static type, when the host resolved one.
    pub ty: Option<TypeRef>,
    /// FQN of the type declaring the invoked method (calls only).
    pub declaring_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub(crate) source: String,
    pub(crate) nodes: Vec<SourceNode>,
    pub(crate) root: NodeId,
}

impl SyntaxTree {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &SourceNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn range(&self, id: NodeId) -> TextRange {
        self.node(id).range
    }

    pub fn text(&self, id: NodeId) -> &str {
        self.range(id).slice(&self.source).unwrap_or_default()
    }

    pub fn type_of(&self, id: NodeId) -> Option<&TypeRef> {
        self.node(id).ty.as_ref()
    }

    pub fn declaring_type(&self, id: NodeId) -> Option<&str> {
        self.node(id).declaring_type.as_deref()
    }

    pub fn is_call(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::MethodCall { .. })
    }

    /// Method name of a call node; `None` for other kinds or a nameless call.
    pub fn method_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::MethodCall { method } => method.as_deref(),
            _ => None,
        }
    }

    /// The member-access child of a call node.
    pub fn callee(&self, call: NodeId) -> Option<NodeId> {
        if !self.is_call(call) {
            return None;
        }
        let first = *self.children(call).first()?;
        matches!(self.kind(first), NodeKind::MemberAccess { .. }).then_some(first)
    }

    /// Qualifier of a member access.
    pub fn qualifier(&self, access: NodeId) -> Option<NodeId> {
        match self.kind(access) {
            NodeKind::MemberAccess { .. } => self.children(access).first().copied(),
            _ => None,
        }
    }

    /// Receiver expression of a call, e.g. `coll` in `coll.select(p)`.
    pub fn receiver(&self, call: NodeId) -> Option<NodeId> {
        self.qualifier(self.callee(call)?)
    }

    pub fn arguments(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            NodeKind::MethodCall { .. } if self.callee(id).is_some() => &self.children(id)[1..],
            NodeKind::MethodCall { .. } | NodeKind::New { .. } => self.children(id),
            _ => &[],
        }
    }

    /// All node ids, children before their parent, siblings left to right.
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                out.push(id);
                continue;
            }
            stack.push((id, true));
            for &child in self.children(id).iter().rev() {
                stack.push((child, false));
            }
        }

        out
    }
}
