//! Traversal driver.
//!
//! Walks a tree in deterministic pre-order, offers every node to every
//! registered rule, enforces the rule contract on whatever gets generated,
//! and collects the resulting mutants for the external
//! materialization/execution pipeline.

use crate::error::EngineError;
use crate::mutator::{Mutant, MutatorCatalog};
use crate::tree::{NodeId, ParentIndex, SyntaxNode, SyntaxTree};

/// Run the catalog over the whole tree.
///
/// Builds the parent index once, then visits nodes in pre-order. For a
/// fixed tree and catalog the returned mutants are byte-identical across
/// runs (rules are required to be deterministic), which is what makes
/// caching and reproducible test runs possible downstream.
///
/// Returns an error naming the offending rule if any rule violates its
/// contract: empty generation after a positive eligibility test, a
/// replacement in the wrong syntactic category, or a replacement identical
/// to the original node.
pub fn run(tree: &SyntaxTree, catalog: &MutatorCatalog) -> Result<Vec<Mutant>, EngineError> {
    let root = match tree.root() {
        Some(root) => root,
        None => {
            tracing::debug!("tree has no root, nothing to mutate");
            return Ok(Vec::new());
        }
    };

    let parents = ParentIndex::build(tree, root);
    let mut mutants = Vec::new();

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        collect_for_node(tree, node, &parents, catalog, &mut mutants)?;
        // Reversed push so children are visited left to right
        for &child in tree.node(node).children.iter().rev() {
            stack.push(child);
        }
    }

    tracing::debug!(
        nodes = parents.len(),
        mutants = mutants.len(),
        "mutation pass complete"
    );

    Ok(mutants)
}

/// Offer a single node to every rule, enforcing post-conditions on
/// everything the catalog yields.
fn collect_for_node(
    tree: &SyntaxTree,
    node: NodeId,
    parents: &ParentIndex,
    catalog: &MutatorCatalog,
    mutants: &mut Vec<Mutant>,
) -> Result<(), EngineError> {
    let original = tree.node(node);
    let mut violation = None;

    catalog.for_each_applicable(tree, node, parents, |rule, replacements| {
        if violation.is_some() {
            return;
        }

        let descriptor = rule.describe();
        if replacements.is_empty() {
            violation = Some(EngineError::EmptyGeneration {
                mutator: descriptor.name,
            });
            return;
        }

        for replacement in replacements {
            if let Err(err) = check_replacement(original, &replacement, descriptor.name) {
                violation = Some(err);
                return;
            }
            mutants.push(Mutant {
                original: node,
                replacement,
                mutator: descriptor.clone(),
            });
        }
    });

    match violation {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn check_replacement(
    original: &SyntaxNode,
    replacement: &SyntaxNode,
    mutator: &'static str,
) -> Result<(), EngineError> {
    if replacement.category() != original.category() {
        return Err(EngineError::CategoryMismatch {
            mutator,
            expected: original.category(),
            got: replacement.category(),
        });
    }
    if replacement == original {
        return Err(EngineError::IdentityReplacement { mutator });
    }
    Ok(())
}
