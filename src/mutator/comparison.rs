//! Comparison operator rules.

use crate::mutator::{Mutator, MutatorCategory, MutatorDescriptor};
use crate::tree::{BinaryOp, NodeId, NodeKind, ParentIndex, SyntaxNode, SyntaxTree};

/// Swaps a relational operator with its boundary-inclusive counterpart:
/// `<` with `<=` and `>` with `>=`.
///
/// This is the classic off-by-one probe: a surviving mutant means no test
/// exercises the boundary value itself.
pub struct ComparisonBoundary;

fn boundary_counterpart(op: BinaryOp) -> Option<BinaryOp> {
    match op {
        BinaryOp::Lt => Some(BinaryOp::Le),
        BinaryOp::Le => Some(BinaryOp::Lt),
        BinaryOp::Gt => Some(BinaryOp::Ge),
        BinaryOp::Ge => Some(BinaryOp::Gt),
        _ => None,
    }
}

impl Mutator for ComparisonBoundary {
    fn describe(&self) -> MutatorDescriptor {
        MutatorDescriptor {
            name: "comparison-boundary",
            description: "Swaps < with <= and > with >=",
            category: MutatorCategory::BoundaryCondition,
            config_schema: None,
        }
    }

    fn can_mutate(&self, tree: &SyntaxTree, node: NodeId, _parents: &ParentIndex) -> bool {
        match tree.node(node).kind {
            NodeKind::Binary(op) => boundary_counterpart(op).is_some(),
            _ => false,
        }
    }

    fn mutate(&self, tree: &SyntaxTree, node: NodeId) -> Vec<SyntaxNode> {
        let original = tree.node(node);
        let swapped = match original.kind {
            NodeKind::Binary(op) => boundary_counterpart(op),
            _ => None,
        };
        match swapped {
            Some(op) => vec![SyntaxNode {
                kind: NodeKind::Binary(op),
                children: original.children.clone(),
            }],
            None => panic!(
                "comparison-boundary asked to mutate a {:?} node",
                original.kind
            ),
        }
    }
}

/// Swaps `==` with `!=`.
pub struct NegateEquality;

fn negated_equality(op: BinaryOp) -> Option<BinaryOp> {
    match op {
        BinaryOp::Eq => Some(BinaryOp::Ne),
        BinaryOp::Ne => Some(BinaryOp::Eq),
        _ => None,
    }
}

impl Mutator for NegateEquality {
    fn describe(&self) -> MutatorDescriptor {
        MutatorDescriptor {
            name: "negate-equality",
            description: "Swaps == with !=",
            category: MutatorCategory::OrthogonalReplacement,
            config_schema: None,
        }
    }

    fn can_mutate(&self, tree: &SyntaxTree, node: NodeId, _parents: &ParentIndex) -> bool {
        match tree.node(node).kind {
            NodeKind::Binary(op) => negated_equality(op).is_some(),
            _ => false,
        }
    }

    fn mutate(&self, tree: &SyntaxTree, node: NodeId) -> Vec<SyntaxNode> {
        let original = tree.node(node);
        let swapped = match original.kind {
            NodeKind::Binary(op) => negated_equality(op),
            _ => None,
        };
        match swapped {
            Some(op) => vec![SyntaxNode {
                kind: NodeKind::Binary(op),
                children: original.children.clone(),
            }],
            None => panic!("negate-equality asked to mutate a {:?} node", original.kind),
        }
    }
}
