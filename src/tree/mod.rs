//! Arena-backed syntax tree model.
//!
//! This module provides:
//! - The `SyntaxNode` variant type over all node kinds the engine understands
//! - The `SyntaxTree` arena that owns nodes and hands out stable `NodeId`s
//! - The `ParentIndex` derived parent relation (see `parent`)
//!
//! Nodes live in a `la_arena::Arena`, so node identity is the arena index:
//! two literals with the same value at different positions are distinct
//! entities. Nodes are immutable once allocated. A mutation never edits a
//! node in place; it produces a detached replacement node whose children may
//! reference existing arena nodes, so the original tree and a mutant share
//! every subtree except the replaced one.

pub mod parent;

pub use parent::ParentIndex;

use la_arena::{Arena, Idx};
use serde::Serialize;

/// Stable identity of a node within its owning [`SyntaxTree`].
pub type NodeId = Idx<SyntaxNode>;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinaryOp {
    /// True for relational and equality operators.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge
        )
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{}", symbol)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Neg,
    Not,
}

/// The closed set of node kinds, with kind-specific payloads.
///
/// Children are stored on the node itself ([`SyntaxNode::children`]), in a
/// fixed per-kind order:
/// - `Binary`: `[lhs, rhs]`
/// - `Unary`: `[operand]`
/// - `Call`: `[callee, arg...]`
/// - `Index`: `[base, index]`
/// - `Return`: `[value]` or empty
/// - `Block`: statements in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    IntLiteral(i64),
    BoolLiteral(bool),
    StringLiteral(String),
    Name(String),
    Binary(BinaryOp),
    Unary(UnaryOp),
    Call,
    Index,
    Return,
    Block,
}

impl NodeKind {
    /// The syntactic category this kind occupies in the grammar.
    pub fn category(&self) -> SyntacticCategory {
        match self {
            Self::Return | Self::Block => SyntacticCategory::Statement,
            _ => SyntacticCategory::Expression,
        }
    }
}

/// Grammar position classes. A replacement node must occupy the same
/// category as the node it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntacticCategory {
    Expression,
    Statement,
}

impl std::fmt::Display for SyntacticCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression => write!(f, "expression"),
            Self::Statement => write!(f, "statement"),
        }
    }
}

/// A single node: a kind tag plus ordered child references.
///
/// A `SyntaxNode` value detached from any arena is also how rules express
/// replacements; its `children` may point into the tree the original node
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
}

impl SyntaxNode {
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn category(&self) -> SyntacticCategory {
        self.kind.category()
    }
}

/// The arena owning all nodes of one tree.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    arena: Arena<SyntaxNode>,
    root: Option<NodeId>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached node value into this tree.
    pub fn alloc(&mut self, node: SyntaxNode) -> NodeId {
        self.arena.alloc(node)
    }

    pub fn int(&mut self, value: i64) -> NodeId {
        self.alloc(SyntaxNode::leaf(NodeKind::IntLiteral(value)))
    }

    pub fn boolean(&mut self, value: bool) -> NodeId {
        self.alloc(SyntaxNode::leaf(NodeKind::BoolLiteral(value)))
    }

    pub fn string(&mut self, value: impl Into<String>) -> NodeId {
        self.alloc(SyntaxNode::leaf(NodeKind::StringLiteral(value.into())))
    }

    pub fn name(&mut self, name: impl Into<String>) -> NodeId {
        self.alloc(SyntaxNode::leaf(NodeKind::Name(name.into())))
    }

    pub fn binary(&mut self, op: BinaryOp, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.alloc(SyntaxNode {
            kind: NodeKind::Binary(op),
            children: vec![lhs, rhs],
        })
    }

    pub fn unary(&mut self, op: UnaryOp, operand: NodeId) -> NodeId {
        self.alloc(SyntaxNode {
            kind: NodeKind::Unary(op),
            children: vec![operand],
        })
    }

    pub fn call(&mut self, callee: NodeId, args: Vec<NodeId>) -> NodeId {
        let mut children = Vec::with_capacity(args.len() + 1);
        children.push(callee);
        children.extend(args);
        self.alloc(SyntaxNode {
            kind: NodeKind::Call,
            children,
        })
    }

    pub fn index(&mut self, base: NodeId, index: NodeId) -> NodeId {
        self.alloc(SyntaxNode {
            kind: NodeKind::Index,
            children: vec![base, index],
        })
    }

    pub fn ret(&mut self, value: Option<NodeId>) -> NodeId {
        self.alloc(SyntaxNode {
            kind: NodeKind::Return,
            children: value.into_iter().collect(),
        })
    }

    pub fn block(&mut self, statements: Vec<NodeId>) -> NodeId {
        self.alloc(SyntaxNode {
            kind: NodeKind::Block,
            children: statements,
        })
    }

    /// Mark a node as the root of this tree.
    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a node. Panics if `id` comes from a different tree with a
    /// larger arena; prefer [`SyntaxTree::contains`] when unsure.
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.arena[id]
    }

    /// Whether `id` refers to a node allocated in this tree's arena.
    pub fn contains(&self, id: NodeId) -> bool {
        (u32::from(id.into_raw()) as usize) < self.arena.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.arena.iter()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
