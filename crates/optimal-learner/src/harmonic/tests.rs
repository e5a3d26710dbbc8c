//! Tests for Harmonic Grammar learning.

use optimal_core::Constraint;

use super::*;
use crate::test_utils::{onset_grammar, pat_grammar, strata_names, tied_grammar};

#[test]
fn test_defaults() {
    let learner = HarmonicGrammarLearner::new();
    assert_eq!(learner.learning_rate(), 0.1);
    assert_eq!(learner.epsilon(), 0.01);
    assert_eq!(learner.iteration_limit(), 1000);
}

#[test]
fn test_pat_grammar() {
    let mut learner = HarmonicGrammarLearner::new();
    let order = learner.learn(&pat_grammar()).unwrap();
    let weights = learner.weights();

    // Only the first pair errs: after it, the pa candidate already loses.
    assert!((weights["NOCODA"] - 0.1).abs() < 1e-12);
    assert_eq!(weights["MAX"], 0.0);
    assert!((weights["DEP"] + 0.1).abs() < 1e-12);
    assert_eq!(
        strata_names(&order),
        vec![vec!["NOCODA"], vec!["MAX"], vec!["DEP"]]
    );
    assert!(learner.stats().converged);
    assert_eq!(learner.stats().iterations, 2);
}

#[test]
fn test_learned_weights_separate_every_pair() {
    let grammar = onset_grammar();
    let mut learner = HarmonicGrammarLearner::new();
    learner.learn(&grammar).unwrap();

    let weights = learner.values();
    for pair in grammar.winner_loser_pairs() {
        assert!(pair.winner.harmony(&weights) > pair.loser.harmony(&weights));
    }
}

#[test]
fn test_near_equal_weights_share_a_stratum() {
    let weights: WeightTable = [("A", 0.504), ("B", 0.5), ("C", -0.2)]
        .into_iter()
        .map(|(n, w)| (n.to_string(), w))
        .collect();
    let order = PartialOrder::from_values(
        ["A", "B", "C"].map(Constraint::new),
        &weights,
        DEFAULT_EPSILON,
    );

    assert_eq!(strata_names(&order), vec![vec!["A", "B"], vec!["C"]]);
}

#[test]
fn test_tie_runs_to_iteration_limit() {
    let mut learner = HarmonicGrammarLearner::new().with_iteration_limit(25);
    let order = learner.learn(&tied_grammar()).unwrap();

    assert!(!learner.stats().converged);
    assert_eq!(learner.stats().iterations, 25);
    assert_eq!(learner.stats().corrections, 25);
    assert_eq!(order.edge_count(), 0);
}
