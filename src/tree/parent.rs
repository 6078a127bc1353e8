//! Derived parent relation over a syntax tree.
//!
//! Parent pointers are deliberately not stored on nodes: that would create a
//! cyclic ownership graph and prevent a mutant from sharing subtrees with
//! the original tree. Instead the relation is computed once per traversal
//! pass and queried through this index.

use std::collections::{HashMap, HashSet};

use crate::tree::{NodeId, SyntaxTree};

/// Maps each node reachable from the root to its immediate parent.
///
/// Built by a single depth-first pass; read-only afterwards, so a shared
/// reference can be used from many threads at once.
#[derive(Debug)]
pub struct ParentIndex {
    parents: HashMap<NodeId, NodeId>,
    members: HashSet<NodeId>,
}

impl ParentIndex {
    /// Build the index for the subtree rooted at `root`.
    ///
    /// Cost is linear in the number of reachable nodes.
    pub fn build(tree: &SyntaxTree, root: NodeId) -> Self {
        let mut parents = HashMap::new();
        let mut members = HashSet::new();
        members.insert(root);

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            for &child in &tree.node(id).children {
                parents.insert(child, id);
                members.insert(child);
                stack.push(child);
            }
        }

        Self { parents, members }
    }

    /// The immediate parent of `node`, or `None` for the root.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of the indexed tree. Asking about a
    /// foreign node is a caller bug and must not be mistaken for "node is
    /// the root", so it is never answered with a silent `None`.
    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        assert!(
            self.members.contains(&node),
            "node {:?} is not part of the indexed tree",
            node
        );
        self.parents.get(&node).copied()
    }

    /// Whether `node` was reachable from the root this index was built for.
    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    /// Walk upward from `node` (exclusive) to the root.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent_of(node), move |&n| self.parent_of(n))
    }

    /// Number of indexed nodes, root included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::BinaryOp;

    /// `(a + b) < len(xs)` with the comparison as root.
    fn sample_tree() -> (SyntaxTree, NodeId, [NodeId; 6]) {
        let mut tree = SyntaxTree::new();
        let a = tree.name("a");
        let b = tree.name("b");
        let sum = tree.binary(BinaryOp::Add, a, b);
        let len = tree.name("len");
        let xs = tree.name("xs");
        let call = tree.call(len, vec![xs]);
        let cmp = tree.binary(BinaryOp::Lt, sum, call);
        tree.set_root(cmp);
        (tree, cmp, [a, b, sum, len, xs, call])
    }

    #[test]
    fn test_root_has_no_parent() {
        let (tree, root, _) = sample_tree();
        let index = ParentIndex::build(&tree, root);
        assert_eq!(index.parent_of(root), None);
    }

    #[test]
    fn test_parents_follow_structure() {
        let (tree, root, [a, b, sum, len, xs, call]) = sample_tree();
        let index = ParentIndex::build(&tree, root);

        assert_eq!(index.parent_of(a), Some(sum));
        assert_eq!(index.parent_of(b), Some(sum));
        assert_eq!(index.parent_of(sum), Some(root));
        assert_eq!(index.parent_of(len), Some(call));
        assert_eq!(index.parent_of(xs), Some(call));
        assert_eq!(index.parent_of(call), Some(root));
    }

    #[test]
    fn test_ancestors_walks_to_root() {
        let (tree, root, [a, _, sum, ..]) = sample_tree();
        let index = ParentIndex::build(&tree, root);

        let chain: Vec<_> = index.ancestors(a).collect();
        assert_eq!(chain, vec![sum, root]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let (tree, root, nodes) = sample_tree();
        let first = ParentIndex::build(&tree, root);
        let second = ParentIndex::build(&tree, root);

        assert_eq!(first.len(), second.len());
        for id in nodes {
            assert_eq!(first.parent_of(id), second.parent_of(id));
        }
    }

    #[test]
    #[should_panic(expected = "not part of the indexed tree")]
    fn test_foreign_node_panics() {
        let (tree, root, _) = sample_tree();
        let index = ParentIndex::build(&tree, root);

        let mut other = SyntaxTree::new();
        for _ in 0..16 {
            other.int(0);
        }
        let foreign = other.int(42);
        let _ = index.parent_of(foreign);
    }

    #[test]
    fn test_unreachable_node_is_not_indexed() {
        let mut tree = SyntaxTree::new();
        let detached = tree.int(9);
        let root = tree.int(1);
        tree.set_root(root);

        let index = ParentIndex::build(&tree, root);
        assert!(index.contains(root));
        assert!(!index.contains(detached));
        assert_eq!(index.len(), 1);
    }
}
