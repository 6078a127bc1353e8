//! Integer literal rules: decrement and increment.
//!
//! These are the rules where eligibility does the heavy lifting. A naive
//! "decrement every integer" rule floods the pipeline with mutants that are
//! invalid (negative array indices) or equivalent (comparisons of a count
//! against a negative number), so `can_mutate` combines a kind filter,
//! boundary-value exclusions, and ancestor-context lookups through the
//! parent index.

use serde_json::json;

use crate::config::MutationPolicy;
use crate::mutator::{Mutator, MutatorCategory, MutatorDescriptor};
use crate::tree::{NodeId, NodeKind, ParentIndex, SyntaxNode, SyntaxTree};

/// Decrements an integer literal by 1.
pub struct DecrementInteger {
    skip_values: Vec<i64>,
    cardinality_functions: Vec<String>,
}

impl DecrementInteger {
    pub fn new(skip_values: Vec<i64>, cardinality_functions: Vec<String>) -> Self {
        Self {
            skip_values,
            cardinality_functions,
        }
    }

    pub fn from_policy(policy: &MutationPolicy) -> Self {
        Self::new(
            policy.skip_decrement_values.clone(),
            policy.cardinality_functions.clone(),
        )
    }
}

impl Default for DecrementInteger {
    fn default() -> Self {
        Self::from_policy(&MutationPolicy::default())
    }
}

impl Mutator for DecrementInteger {
    fn describe(&self) -> MutatorDescriptor {
        MutatorDescriptor {
            name: "decrement-integer",
            description: "Decrements an integer literal by 1",
            category: MutatorCategory::OrthogonalReplacement,
            config_schema: Some(json!({
                "type": "object",
                "properties": {
                    "skip_decrement_values": {
                        "type": "array",
                        "items": { "type": "integer" },
                        "description": "Literal values the rule never decrements"
                    },
                    "cardinality_functions": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Function names treated as non-negative count producers"
                    }
                }
            })),
        }
    }

    fn can_mutate(&self, tree: &SyntaxTree, node: NodeId, parents: &ParentIndex) -> bool {
        let value = match tree.node(node).kind {
            NodeKind::IntLiteral(value) => value,
            _ => return false,
        };

        if self.skip_values.contains(&value) || value == i64::MIN {
            return false;
        }

        if value == 0 {
            // 0 as an index: the mutant accesses index -1, an invalid-access
            // defect rather than an off-by-one.
            if is_index_operand(tree, node, parents) {
                return false;
            }
            // 0 compared against a count: the mutated comparison pits a
            // non-negative quantity against -1 and never changes truth value.
            if is_cardinality_comparison(tree, node, parents, &self.cardinality_functions) {
                return false;
            }
        }

        true
    }

    fn mutate(&self, tree: &SyntaxTree, node: NodeId) -> Vec<SyntaxNode> {
        match tree.node(node).kind {
            NodeKind::IntLiteral(value) => {
                vec![SyntaxNode::leaf(NodeKind::IntLiteral(value - 1))]
            }
            ref other => panic!("decrement-integer asked to mutate a {:?} node", other),
        }
    }
}

/// Increments an integer literal by 1.
pub struct IncrementInteger {
    skip_values: Vec<i64>,
}

impl IncrementInteger {
    pub fn new(skip_values: Vec<i64>) -> Self {
        Self { skip_values }
    }

    pub fn from_policy(policy: &MutationPolicy) -> Self {
        Self::new(policy.skip_increment_values.clone())
    }
}

impl Default for IncrementInteger {
    fn default() -> Self {
        Self::from_policy(&MutationPolicy::default())
    }
}

impl Mutator for IncrementInteger {
    fn describe(&self) -> MutatorDescriptor {
        MutatorDescriptor {
            name: "increment-integer",
            description: "Increments an integer literal by 1",
            category: MutatorCategory::OrthogonalReplacement,
            config_schema: Some(json!({
                "type": "object",
                "properties": {
                    "skip_increment_values": {
                        "type": "array",
                        "items": { "type": "integer" },
                        "description": "Literal values the rule never increments"
                    }
                }
            })),
        }
    }

    fn can_mutate(&self, tree: &SyntaxTree, node: NodeId, _parents: &ParentIndex) -> bool {
        match tree.node(node).kind {
            NodeKind::IntLiteral(value) => {
                !self.skip_values.contains(&value) && value != i64::MAX
            }
            _ => false,
        }
    }

    fn mutate(&self, tree: &SyntaxTree, node: NodeId) -> Vec<SyntaxNode> {
        match tree.node(node).kind {
            NodeKind::IntLiteral(value) => {
                vec![SyntaxNode::leaf(NodeKind::IntLiteral(value + 1))]
            }
            ref other => panic!("increment-integer asked to mutate a {:?} node", other),
        }
    }
}

/// Whether `node` sits in the index position of an element access.
fn is_index_operand(tree: &SyntaxTree, node: NodeId, parents: &ParentIndex) -> bool {
    match parents.parent_of(node) {
        Some(parent) => {
            let parent_node = tree.node(parent);
            parent_node.kind == NodeKind::Index && parent_node.children.get(1) == Some(&node)
        }
        None => false,
    }
}

/// Whether `node` is one operand of a comparison whose other operand is a
/// call to a recognized cardinality function.
fn is_cardinality_comparison(
    tree: &SyntaxTree,
    node: NodeId,
    parents: &ParentIndex,
    cardinality_functions: &[String],
) -> bool {
    let parent = match parents.parent_of(node) {
        Some(parent) => parent,
        None => return false,
    };
    let parent_node = tree.node(parent);
    let op = match parent_node.kind {
        NodeKind::Binary(op) => op,
        _ => return false,
    };
    if !op.is_comparison() {
        return false;
    }

    let other = if parent_node.children[0] == node {
        parent_node.children[1]
    } else {
        parent_node.children[0]
    };

    is_cardinality_call(tree, other, cardinality_functions)
}

/// Whether `node` is a call whose callee name is in the cardinality list.
fn is_cardinality_call(tree: &SyntaxTree, node: NodeId, cardinality_functions: &[String]) -> bool {
    let call = tree.node(node);
    if call.kind != NodeKind::Call {
        return false;
    }
    let callee = match call.children.first() {
        Some(&callee) => callee,
        None => return false,
    };
    match &tree.node(callee).kind {
        NodeKind::Name(name) => cardinality_functions
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(name)),
        _ => false,
    }
}
