//! Host-facing expression description and its lowering into a [`SyntaxTree`].
//!
//! Hosts that already parsed and typed their sources describe each statement
//! as a nested [`Expr`]. Lowering renders Java source text for the statements
//! and records the byte range of every node, so diagnostics and fixes point at
//! real text.

use super::tree::{NodeId, NodeKind, PrefixOp, SourceNode, SyntaxTree};
use collscope_api::models::{TextRange, TypeRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Name {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<TypeRef>,
    },
    This {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<TypeRef>,
    },
    Super {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<TypeRef>,
    },
    Literal {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<TypeRef>,
    },
    Call {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        receiver: Option<Box<Expr>>,
        /// Missing in malformed input.
        #[serde(default)]
        method: Option<String>,
        #[serde(default)]
        args: Vec<Expr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<TypeRef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        declaring_type: Option<String>,
    },
    New {
        /// The class reference as written; without type arguments for a diamond.
        class: TypeRef,
        #[serde(default)]
        diamond: bool,
        #[serde(default)]
        args: Vec<Expr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<TypeRef>,
    },
    Prefix {
        op: PrefixOp,
        operand: Box<Expr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<TypeRef>,
    },
    Paren {
        inner: Box<Expr>,
    },
    Lambda {
        #[serde(default)]
        params: Vec<String>,
        body: Box<Expr>,
    },
}

pub fn name(name: impl Into<String>) -> Expr {
    Expr::Name {
        name: name.into(),
        ty: None,
    }
}

pub fn literal(text: impl Into<String>) -> Expr {
    Expr::Literal {
        text: text.into(),
        ty: None,
    }
}

pub fn not(operand: Expr) -> Expr {
    Expr::Prefix {
        op: PrefixOp::Not,
        operand: Box::new(operand),
        ty: Some(TypeRef::raw("boolean")),
    }
}

pub fn paren(inner: Expr) -> Expr {
    Expr::Paren {
        inner: Box::new(inner),
    }
}

pub fn lambda<S: Into<String>>(params: impl IntoIterator<Item = S>, body: Expr) -> Expr {
    Expr::Lambda {
        params: params.into_iter().map(Into::into).collect(),
        body: Box::new(body),
    }
}

/// `new C<A, B>(args)`; the expression is typed as the written class.
pub fn new_object(class: TypeRef, args: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::New {
        ty: Some(class.clone()),
        class,
        diamond: false,
        args: args.into_iter().collect(),
    }
}

/// `new C<>()` whose inferred type is `ty`.
pub fn diamond(class_fqn: impl Into<String>, ty: TypeRef) -> Expr {
    Expr::New {
        class: TypeRef::id(class_fqn),
        diamond: true,
        args: vec![],
        ty: Some(ty),
    }
}

impl Expr {
    pub fn this() -> Expr {
        Expr::This { ty: None }
    }

    pub fn super_() -> Expr {
        Expr::Super { ty: None }
    }

    /// Unqualified call, e.g. `compute(x)`.
    pub fn bare_call(method: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Call {
            receiver: None,
            method: Some(method.into()),
            args: args.into_iter().collect(),
            ty: None,
            declaring_type: None,
        }
    }

    /// `self.method(args)`.
    pub fn call(self, method: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Call {
            receiver: Some(Box::new(self)),
            method: Some(method.into()),
            args: args.into_iter().collect(),
            ty: None,
            declaring_type: None,
        }
    }

    /// Sets the static type. No effect on parentheses and lambdas.
    pub fn typed(mut self, new_ty: TypeRef) -> Expr {
        match &mut self {
            Expr::Name { ty, .. }
            | Expr::This { ty }
            | Expr::Super { ty }
            | Expr::Literal { ty, .. }
            | Expr::Call { ty, .. }
            | Expr::New { ty, .. }
            | Expr::Prefix { ty, .. } => *ty = Some(new_ty),
            Expr::Paren { .. } | Expr::Lambda { .. } => {}
        }
        self
    }

    /// Sets the resolved declaring type of a call.
    pub fn declared_in(mut self, fqn: impl Into<String>) -> Expr {
        if let Expr::Call { declaring_type, .. } = &mut self {
            *declaring_type = Some(fqn.into());
        }
        self
    }
}

impl SyntaxTree {
    /// Lowers a list of expression statements into one tree rooted at a `Unit` node.
    pub fn from_statements(statements: &[Expr]) -> SyntaxTree {
        let mut lowering = Lowering::default();
        let root = lowering.alloc(NodeKind::Unit, None, None, None);
        for statement in statements {
            let start = lowering.source.len();
            let id = lowering.alloc(NodeKind::Statement, Some(root), None, None);
            lowering.lower(statement, id);
            lowering.push(";");
            lowering.finish(id, start);
            lowering.push("\n");
        }
        lowering.finish(root, 0);

        SyntaxTree {
            source: lowering.source,
            nodes: lowering.nodes,
            root,
        }
    }

    pub fn from_expr(expr: &Expr) -> SyntaxTree {
        Self::from_statements(std::slice::from_ref(expr))
    }
}

#[derive(Default)]
struct Lowering {
    source: String,
    nodes: Vec<SourceNode>,
}

impl Lowering {
    fn alloc(
        &mut self,
        kind: NodeKind,
        parent: Option<NodeId>,
        ty: Option<TypeRef>,
        declaring_type: Option<String>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SourceNode {
            kind,
            range: TextRange::empty_at(self.source.len()),
            parent,
            children: vec![],
            ty,
            declaring_type,
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    fn push(&mut self, text: &str) {
        self.source.push_str(text);
    }

    fn finish(&mut self, id: NodeId, start: usize) {
        self.nodes[id.index()].range = TextRange::new(start, self.source.len());
    }

    fn lower_args(&mut self, args: &[Expr], parent: NodeId) {
        self.push("(");
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.lower(arg, parent);
        }
        self.push(")");
    }

    fn lower(&mut self, expr: &Expr, parent: NodeId) -> NodeId {
        let start = self.source.len();
        let parent = Some(parent);
        let id = match expr {
            Expr::Name { name, ty } => {
                let id = self.alloc(NodeKind::Name(name.clone()), parent, ty.clone(), None);
                self.push(name);
                id
            }
            Expr::This { ty } => {
                let id = self.alloc(NodeKind::This, parent, ty.clone(), None);
                self.push("this");
                id
            }
            Expr::Super { ty } => {
                let id = self.alloc(NodeKind::Super, parent, ty.clone(), None);
                self.push("super");
                id
            }
            Expr::Literal { text, ty } => {
                let id = self.alloc(NodeKind::Literal(text.clone()), parent, ty.clone(), None);
                self.push(text);
                id
            }
            Expr::Call {
                receiver,
                method,
                args,
                ty,
                declaring_type,
            } => {
                let kind = NodeKind::MethodCall {
                    method: method.clone(),
                };
                let id = self.alloc(kind, parent, ty.clone(), declaring_type.clone());
                let access_kind = NodeKind::MemberAccess {
                    name: method.clone(),
                };
                let access = self.alloc(access_kind, Some(id), None, None);
                if let Some(receiver) = receiver {
                    self.lower(receiver, access);
                    self.push(".");
                }
                self.push(method.as_deref().unwrap_or_default());
                self.finish(access, start);
                self.lower_args(args, id);
                id
            }
            Expr::New {
                class,
                diamond,
                args,
                ty,
            } => {
                let kind = NodeKind::New {
                    class: class.clone(),
                    diamond: *diamond,
                };
                let id = self.alloc(kind, parent, ty.clone(), None);
                self.push("new ");
                if *diamond {
                    self.push(&class.erasure().presentable());
                    self.push("<>");
                } else {
                    self.push(&class.presentable());
                }
                self.lower_args(args, id);
                id
            }
            Expr::Prefix { op, operand, ty } => {
                let id = self.alloc(NodeKind::Prefix(*op), parent, ty.clone(), None);
                self.push(op.as_str());
                self.lower(operand, id);
                id
            }
            Expr::Paren { inner } => {
                let id = self.alloc(NodeKind::Paren, parent, None, None);
                self.push("(");
                let inner = self.lower(inner, id);
                self.push(")");
                self.nodes[id.index()].ty = self.nodes[inner.index()].ty.clone();
                id
            }
            Expr::Lambda { params, body } => {
                let kind = NodeKind::Lambda {
                    params: params.clone(),
                };
                let id = self.alloc(kind, parent, None, None);
                match params.as_slice() {
                    [single] => self.push(single),
                    _ => {
                        self.push("(");
                        self.push(&params.join(", "));
                        self.push(")");
                    }
                }
                self.push(" -> ");
                self.lower(body, id);
                id
            }
        };
        self.finish(id, start);
        id
    }
}
