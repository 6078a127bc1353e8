//! The mutator abstraction and rule catalog.
//!
//! This module provides:
//! - The `Mutator` trait every mutation rule implements
//! - `MutatorDescriptor` / `MutatorCategory` for catalog listing and filtering
//! - `Mutant`, the (original node, replacement, rule) triple handed downstream
//! - The rule implementations, grouped by the node kinds they target
//!
//! A rule is three operations: a static descriptor, a pure eligibility
//! predicate, and generation of replacement nodes. Rules are stateless after
//! construction and deterministic, so a catalog can be shared across
//! concurrent traversals of independent trees.

pub mod arithmetic;
pub mod boolean;
pub mod catalog;
pub mod comparison;
pub mod number;

pub use arithmetic::ArithmeticOperator;
pub use boolean::{BooleanLiteral, LogicalOperator, RemoveNegation};
pub use catalog::MutatorCatalog;
pub use comparison::{ComparisonBoundary, NegateEquality};
pub use number::{DecrementInteger, IncrementInteger};

use serde::Serialize;

use crate::tree::{NodeId, ParentIndex, SyntaxNode, SyntaxTree};

/// Taxonomy of mutation rules, used for reporting and filtering only; it has
/// no effect on eligibility or generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutatorCategory {
    /// Replaces a construct with a semantically orthogonal one.
    OrthogonalReplacement,
    /// Nudges a boundary condition (e.g. `<` to `<=`).
    BoundaryCondition,
    /// Removes a construct outright.
    StatementRemoval,
}

impl std::fmt::Display for MutatorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrthogonalReplacement => write!(f, "orthogonal_replacement"),
            Self::BoundaryCondition => write!(f, "boundary_condition"),
            Self::StatementRemoval => write!(f, "statement_removal"),
        }
    }
}

/// Static description of a rule, independent of any node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutatorDescriptor {
    /// Stable identifier, also used to disable the rule via policy.
    pub name: &'static str,
    /// Human-readable description of what the rule changes.
    pub description: &'static str,
    pub category: MutatorCategory,
    /// JSON schema of the rule's policy knobs; `None` for parameterless rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_schema: Option<serde_json::Value>,
}

/// One produced mutant: which node is replaced, by what, and by which rule.
///
/// The replacement is a detached node whose children may reference nodes of
/// the original tree; materializing a full mutant tree (and printing it) is
/// the job of the external pipeline, not this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutant {
    pub original: NodeId,
    pub replacement: SyntaxNode,
    pub mutator: MutatorDescriptor,
}

/// A mutation rule.
///
/// Contract:
/// - `can_mutate` is a pure function of the node, its ancestors (through the
///   parent index) and the rule's static configuration. It must return
///   `false` for every node kind the rule does not target.
/// - `mutate` is called only for nodes `can_mutate` accepted. It must return
///   at least one replacement, every replacement must occupy the same
///   syntactic category as the original, and none may be structurally equal
///   to the original. The driver enforces all three (see `engine`).
/// - Both operations are deterministic: no randomness, time, or counters.
pub trait Mutator: Send + Sync {
    fn describe(&self) -> MutatorDescriptor;

    fn can_mutate(&self, tree: &SyntaxTree, node: NodeId, parents: &ParentIndex) -> bool;

    fn mutate(&self, tree: &SyntaxTree, node: NodeId) -> Vec<SyntaxNode>;
}
