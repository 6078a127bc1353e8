//! Arithmetic operator rules.

use crate::mutator::{Mutator, MutatorCategory, MutatorDescriptor};
use crate::tree::{BinaryOp, NodeId, NodeKind, ParentIndex, SyntaxNode, SyntaxTree};

/// Swaps `+` with `-` and `*` with `/`.
///
/// Eligibility suppresses the identity-operand cases where the swap cannot
/// change the computed value: `x + 0` and `x - 0` agree, as do `x * 1` and
/// `x / 1`, so those positions would only ever produce equivalent mutants.
pub struct ArithmeticOperator;

fn swapped_operator(op: BinaryOp) -> Option<BinaryOp> {
    match op {
        BinaryOp::Add => Some(BinaryOp::Sub),
        BinaryOp::Sub => Some(BinaryOp::Add),
        BinaryOp::Mul => Some(BinaryOp::Div),
        BinaryOp::Div => Some(BinaryOp::Mul),
        _ => None,
    }
}

fn is_int_literal(tree: &SyntaxTree, node: NodeId, value: i64) -> bool {
    tree.node(node).kind == NodeKind::IntLiteral(value)
}

impl Mutator for ArithmeticOperator {
    fn describe(&self) -> MutatorDescriptor {
        MutatorDescriptor {
            name: "arithmetic-operator",
            description: "Swaps + with - and * with /",
            category: MutatorCategory::OrthogonalReplacement,
            config_schema: None,
        }
    }

    fn can_mutate(&self, tree: &SyntaxTree, node: NodeId, _parents: &ParentIndex) -> bool {
        let original = tree.node(node);
        let op = match original.kind {
            NodeKind::Binary(op) => op,
            _ => return false,
        };
        if swapped_operator(op).is_none() {
            return false;
        }

        let lhs = original.children[0];
        let rhs = original.children[1];
        match op {
            // x + 0, 0 + x, x - 0: swapping the operator leaves the value
            // unchanged. (0 - x is not excluded; negation is observable.)
            BinaryOp::Add => {
                !is_int_literal(tree, lhs, 0) && !is_int_literal(tree, rhs, 0)
            }
            BinaryOp::Sub => !is_int_literal(tree, rhs, 0),
            // x * 1 and x / 1 agree; 1 * x and 1 / x do not.
            BinaryOp::Mul | BinaryOp::Div => !is_int_literal(tree, rhs, 1),
            _ => true,
        }
    }

    fn mutate(&self, tree: &SyntaxTree, node: NodeId) -> Vec<SyntaxNode> {
        let original = tree.node(node);
        let swapped = match original.kind {
            NodeKind::Binary(op) => swapped_operator(op),
            _ => None,
        };
        match swapped {
            Some(op) => vec![SyntaxNode {
                kind: NodeKind::Binary(op),
                children: original.children.clone(),
            }],
            None => panic!(
                "arithmetic-operator asked to mutate a {:?} node",
                original.kind
            ),
        }
    }
}
