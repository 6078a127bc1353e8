//! Chimera: a semantic-precision mutation engine for syntax trees.
//!
//! This crate is the decision-and-generation core of a mutation-testing
//! tool. Given a parsed syntax tree it decides, node by node, whether a
//! small deliberate semantic alteration can be produced there, and if so
//! synthesizes the replacement subtrees. It provides:
//! - An arena-backed immutable tree model with stable node identity
//! - A derived parent index for upward-context lookups
//! - The `Mutator` rule abstraction and a catalog of built-in rules
//! - Eligibility heuristics that suppress invalid, duplicate, and
//!   equivalent mutants before they reach the test-execution pipeline
//!
//! Parsing source text, printing mutant trees, running test suites, and
//! scoring results are all external collaborators; this crate only hands
//! out `(original node, replacement, rule)` triples.
//!
//! ```
//! use chimera::config::MutationPolicy;
//! use chimera::mutator::MutatorCatalog;
//! use chimera::tree::{BinaryOp, SyntaxTree};
//!
//! // total + 5
//! let mut tree = SyntaxTree::new();
//! let total = tree.name("total");
//! let five = tree.int(5);
//! let sum = tree.binary(BinaryOp::Add, total, five);
//! tree.set_root(sum);
//!
//! let catalog = MutatorCatalog::with_defaults(&MutationPolicy::default());
//! let mutants = chimera::engine::run(&tree, &catalog).unwrap();
//! assert!(!mutants.is_empty());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod mutator;
pub mod tree;

// Re-export the types most embedders need
pub use config::MutationPolicy;
pub use error::EngineError;
pub use mutator::{Mutant, Mutator, MutatorCatalog, MutatorCategory, MutatorDescriptor};
pub use tree::{BinaryOp, NodeId, NodeKind, ParentIndex, SyntaxNode, SyntaxTree, UnaryOp};
