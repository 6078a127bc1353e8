//! Boolean and logical rules.

use crate::mutator::{Mutator, MutatorCategory, MutatorDescriptor};
use crate::tree::{BinaryOp, NodeId, NodeKind, ParentIndex, SyntaxNode, SyntaxTree, UnaryOp};

/// Flips a boolean literal.
pub struct BooleanLiteral;

impl Mutator for BooleanLiteral {
    fn describe(&self) -> MutatorDescriptor {
        MutatorDescriptor {
            name: "boolean-literal",
            description: "Flips true to false and false to true",
            category: MutatorCategory::OrthogonalReplacement,
            config_schema: None,
        }
    }

    fn can_mutate(&self, tree: &SyntaxTree, node: NodeId, _parents: &ParentIndex) -> bool {
        matches!(tree.node(node).kind, NodeKind::BoolLiteral(_))
    }

    fn mutate(&self, tree: &SyntaxTree, node: NodeId) -> Vec<SyntaxNode> {
        match tree.node(node).kind {
            NodeKind::BoolLiteral(value) => {
                vec![SyntaxNode::leaf(NodeKind::BoolLiteral(!value))]
            }
            ref other => panic!("boolean-literal asked to mutate a {:?} node", other),
        }
    }
}

/// Swaps `&&` with `||`.
pub struct LogicalOperator;

impl Mutator for LogicalOperator {
    fn describe(&self) -> MutatorDescriptor {
        MutatorDescriptor {
            name: "logical-operator",
            description: "Swaps && with ||",
            category: MutatorCategory::OrthogonalReplacement,
            config_schema: None,
        }
    }

    fn can_mutate(&self, tree: &SyntaxTree, node: NodeId, _parents: &ParentIndex) -> bool {
        match tree.node(node).kind {
            NodeKind::Binary(op) => op.is_logical(),
            _ => false,
        }
    }

    fn mutate(&self, tree: &SyntaxTree, node: NodeId) -> Vec<SyntaxNode> {
        let original = tree.node(node);
        let swapped = match original.kind {
            NodeKind::Binary(BinaryOp::And) => Some(BinaryOp::Or),
            NodeKind::Binary(BinaryOp::Or) => Some(BinaryOp::And),
            _ => None,
        };
        match swapped {
            Some(op) => vec![SyntaxNode {
                kind: NodeKind::Binary(op),
                children: original.children.clone(),
            }],
            None => panic!(
                "logical-operator asked to mutate a {:?} node",
                original.kind
            ),
        }
    }
}

/// Replaces `!e` with `e`.
///
/// The replacement clones the operand's node so the mutant remains a
/// detached value; the operand's own subtree stays shared with the original.
pub struct RemoveNegation;

impl Mutator for RemoveNegation {
    fn describe(&self) -> MutatorDescriptor {
        MutatorDescriptor {
            name: "remove-negation",
            description: "Removes a logical negation",
            category: MutatorCategory::StatementRemoval,
            config_schema: None,
        }
    }

    fn can_mutate(&self, tree: &SyntaxTree, node: NodeId, _parents: &ParentIndex) -> bool {
        tree.node(node).kind == NodeKind::Unary(UnaryOp::Not)
    }

    fn mutate(&self, tree: &SyntaxTree, node: NodeId) -> Vec<SyntaxNode> {
        let original = tree.node(node);
        if original.kind != NodeKind::Unary(UnaryOp::Not) {
            panic!("remove-negation asked to mutate a {:?} node", original.kind);
        }
        vec![tree.node(original.children[0]).clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_flip() {
        let mut tree = SyntaxTree::new();
        let truth = tree.boolean(true);
        let falsity = tree.boolean(false);
        let root = tree.binary(BinaryOp::And, truth, falsity);
        tree.set_root(root);
        let parents = ParentIndex::build(&tree, root);

        let rule = BooleanLiteral;
        assert!(rule.can_mutate(&tree, truth, &parents));
        assert!(rule.can_mutate(&tree, falsity, &parents));

        assert_eq!(
            rule.mutate(&tree, truth)[0].kind,
            NodeKind::BoolLiteral(false)
        );
        assert_eq!(
            rule.mutate(&tree, falsity)[0].kind,
            NodeKind::BoolLiteral(true)
        );
    }

    #[test]
    fn test_boolean_ignores_int_literal() {
        let mut tree = SyntaxTree::new();
        let one = tree.int(1);
        tree.set_root(one);
        let parents = ParentIndex::build(&tree, one);

        assert!(!BooleanLiteral.can_mutate(&tree, one, &parents));
    }

    #[test]
    fn test_logical_swap() {
        for (original, expected) in [(BinaryOp::And, BinaryOp::Or), (BinaryOp::Or, BinaryOp::And)] {
            let mut tree = SyntaxTree::new();
            let a = tree.name("a");
            let b = tree.name("b");
            let node = tree.binary(original, a, b);
            tree.set_root(node);
            let parents = ParentIndex::build(&tree, node);

            let rule = LogicalOperator;
            assert!(rule.can_mutate(&tree, node, &parents));

            let replacements = rule.mutate(&tree, node);
            assert_eq!(replacements.len(), 1);
            assert_eq!(replacements[0].kind, NodeKind::Binary(expected));
            assert_eq!(replacements[0].children, vec![a, b]);
        }
    }

    #[test]
    fn test_logical_ignores_comparisons() {
        let mut tree = SyntaxTree::new();
        let a = tree.name("a");
        let b = tree.name("b");
        let cmp = tree.binary(BinaryOp::Eq, a, b);
        tree.set_root(cmp);
        let parents = ParentIndex::build(&tree, cmp);

        assert!(!LogicalOperator.can_mutate(&tree, cmp, &parents));
    }

    #[test]
    fn test_remove_negation_yields_operand() {
        let mut tree = SyntaxTree::new();
        let a = tree.name("a");
        let b = tree.name("b");
        let cmp = tree.binary(BinaryOp::Lt, a, b);
        let not = tree.unary(UnaryOp::Not, cmp);
        tree.set_root(not);
        let parents = ParentIndex::build(&tree, not);

        let rule = RemoveNegation;
        assert!(rule.can_mutate(&tree, not, &parents));

        let replacements = rule.mutate(&tree, not);
        assert_eq!(replacements.len(), 1);
        // The replacement is the operand's node; its children still point
        // into the original tree.
        assert_eq!(replacements[0], *tree.node(cmp));
        assert_eq!(replacements[0].children, vec![a, b]);
    }

    #[test]
    fn test_remove_negation_handles_double_negation() {
        let mut tree = SyntaxTree::new();
        let a = tree.name("a");
        let inner = tree.unary(UnaryOp::Not, a);
        let outer = tree.unary(UnaryOp::Not, inner);
        tree.set_root(outer);
        let parents = ParentIndex::build(&tree, outer);

        let rule = RemoveNegation;
        assert!(rule.can_mutate(&tree, outer, &parents));
        assert!(rule.can_mutate(&tree, inner, &parents));

        // Removing the outer negation leaves the inner one in place
        let replacements = rule.mutate(&tree, outer);
        assert_eq!(replacements[0].kind, NodeKind::Unary(UnaryOp::Not));
        assert_eq!(replacements[0].children, vec![a]);
    }

    #[test]
    fn test_remove_negation_ignores_arithmetic_negation() {
        let mut tree = SyntaxTree::new();
        let a = tree.name("a");
        let neg = tree.unary(UnaryOp::Neg, a);
        tree.set_root(neg);
        let parents = ParentIndex::build(&tree, neg);

        assert!(!RemoveNegation.can_mutate(&tree, neg, &parents));
    }
}
