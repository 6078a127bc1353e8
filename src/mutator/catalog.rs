//! The mutator catalog: the composition root the traversal driver consults.

use crate::config::MutationPolicy;
use crate::mutator::{
    ArithmeticOperator, BooleanLiteral, ComparisonBoundary, DecrementInteger, IncrementInteger,
    LogicalOperator, Mutator, MutatorDescriptor, NegateEquality, RemoveNegation,
};
use crate::tree::{NodeId, ParentIndex, SyntaxNode, SyntaxTree};

/// An ordered collection of registered rules.
///
/// Rules are independent: the registration order only affects enumeration
/// order, never eligibility or generated content. The catalog holds no
/// per-traversal state, so one catalog can serve many trees, including from
/// multiple threads, once registration is complete.
#[derive(Default)]
pub struct MutatorCatalog {
    rules: Vec<Box<dyn Mutator>>,
}

impl MutatorCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full rule set, minus the mutators the policy disables, with
    /// policy-configured boundary sets applied.
    pub fn with_defaults(policy: &MutationPolicy) -> Self {
        let mut catalog = Self::new();
        let full: Vec<Box<dyn Mutator>> = vec![
            Box::new(DecrementInteger::from_policy(policy)),
            Box::new(IncrementInteger::from_policy(policy)),
            Box::new(ComparisonBoundary),
            Box::new(NegateEquality),
            Box::new(ArithmeticOperator),
            Box::new(LogicalOperator),
            Box::new(BooleanLiteral),
            Box::new(RemoveNegation),
        ];
        for rule in full {
            if !policy.is_disabled(rule.describe().name) {
                catalog.register(rule);
            }
        }
        catalog
    }

    /// Append a rule. Must not be called once concurrent evaluation begins.
    pub fn register(&mut self, rule: Box<dyn Mutator>) {
        self.rules.push(rule);
    }

    pub fn all(&self) -> &[Box<dyn Mutator>] {
        &self.rules
    }

    /// Descriptors of every registered rule, in registration order, for the
    /// external listing/filtering interface.
    pub fn descriptors(&self) -> Vec<MutatorDescriptor> {
        self.rules.iter().map(|rule| rule.describe()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Offer `node` to every registered rule; for each rule whose
    /// eligibility test passes, yield the rule and its generated
    /// replacements to `visit`.
    pub fn for_each_applicable<F>(
        &self,
        tree: &SyntaxTree,
        node: NodeId,
        parents: &ParentIndex,
        mut visit: F,
    ) where
        F: FnMut(&dyn Mutator, Vec<SyntaxNode>),
    {
        for rule in &self.rules {
            if rule.can_mutate(tree, node, parents) {
                visit(rule.as_ref(), rule.mutate(tree, node));
            }
        }
    }
}
