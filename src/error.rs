//! Error taxonomy of the engine.
//!
//! Only rule-contract violations surface as values: they name a buggy rule
//! and an embedding product wants to report that, not crash on it.
//! Invalid-argument conditions (parent lookups for foreign nodes, `mutate`
//! on an ineligible node) are caller bugs and fail fast as documented
//! panics instead. Unrecognized node kinds are not errors at all; rules
//! simply decline them.

use thiserror::Error;

use crate::tree::SyntacticCategory;

/// A rule broke the mutator contract; detected by the driver's
/// post-condition check (see `engine::run`).
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// `mutate` produced nothing for a node `can_mutate` accepted.
    #[error("mutator '{mutator}' produced no replacements for a node it accepted")]
    EmptyGeneration { mutator: &'static str },

    /// A replacement does not fit the grammar position of the original.
    #[error("mutator '{mutator}' produced a replacement of category {got} for a node of category {expected}")]
    CategoryMismatch {
        mutator: &'static str,
        expected: SyntacticCategory,
        got: SyntacticCategory,
    },

    /// A replacement is structurally identical to the original node.
    #[error("mutator '{mutator}' produced a replacement identical to the original node")]
    IdentityReplacement { mutator: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_rule() {
        let err = EngineError::EmptyGeneration {
            mutator: "decrement-integer",
        };
        assert!(err.to_string().contains("decrement-integer"));

        let err = EngineError::CategoryMismatch {
            mutator: "remove-negation",
            expected: SyntacticCategory::Expression,
            got: SyntacticCategory::Statement,
        };
        let message = err.to_string();
        assert!(message.contains("remove-negation"));
        assert!(message.contains("category statement"));
        assert!(message.contains("category expression"));
    }
}
