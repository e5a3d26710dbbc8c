//! Test utilities for optimal-learner
//!
//! Provides common test fixtures used across the crate's test modules.
//! Re-exports grammars from optimal-test and adds learner-specific helpers.

use optimal_core::{Algorithm, Grammar, PartialOrder};

use crate::scope::LearningScope;

pub use optimal_test::{
    contradictory_grammar, onset_grammar, pat_grammar, tied_grammar, two_constraint_grammar,
};

/// Creates a scope over an empty grammar.
pub fn create_test_scope() -> LearningScope {
    LearningScope::start(Algorithm::ConstraintDemotion, &Grammar::default())
}

/// Names of each stratum, highest first.
pub fn strata_names(order: &PartialOrder) -> Vec<Vec<String>> {
    order
        .strata()
        .into_iter()
        .map(|stratum| stratum.into_iter().map(|c| c.name().to_string()).collect())
        .collect()
}

/// Asserts that every direct edge of `expected` holds in `actual`.
pub fn assert_extends(actual: &PartialOrder, expected: &PartialOrder) {
    for (higher, lower) in expected.direct_dominance_pairs() {
        assert!(
            actual.dominates(higher.name(), lower.name()),
            "expected {} >> {} in {}",
            higher.name(),
            lower.name(),
            actual
        );
    }
}
