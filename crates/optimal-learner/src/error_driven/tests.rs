//! Tests for error-driven constraint demotion.

use super::*;
use crate::evaluation::predict_ot;
use crate::test_utils::{
    contradictory_grammar, onset_grammar, pat_grammar, strata_names, tied_grammar,
};

#[test]
fn test_pat_grammar_converges() {
    let mut learner = ErrorDrivenLearner::new();
    let order = learner.learn(&pat_grammar()).unwrap();

    assert_eq!(strata_names(&order), vec![vec!["MAX", "NOCODA"], vec!["DEP"]]);
    assert!(learner.stats().converged);
    assert_eq!(learner.stats().iterations, 2);
    assert_eq!(learner.stats().corrections, 1);
}

#[test]
fn test_learned_order_predicts_every_winner() {
    let grammar = onset_grammar();
    let order = ErrorDrivenLearner::new().learn(&grammar).unwrap();

    for set in grammar.competition_sets() {
        assert_eq!(
            predict_ot(&set, &order).map(|e| e.output_form()),
            set.winner().map(|e| e.output_form())
        );
    }
    assert!(order.dominates("DEP", "ONSET"));
}

#[test]
fn test_iteration_limit() {
    let mut learner = ErrorDrivenLearner::new().with_iteration_limit(1);
    learner.learn(&onset_grammar()).unwrap();

    assert_eq!(learner.stats().iterations, 1);
    assert!(!learner.stats().converged);
}

#[test]
fn test_contradiction_stalls_without_cycles() {
    let mut learner = ErrorDrivenLearner::new();
    let order = learner.learn(&contradictory_grammar()).unwrap();

    assert!(order.is_acyclic());
    assert!(!learner.stats().converged);
    assert!(learner.stats().iterations < learner.iteration_limit());
}

#[test]
fn test_tie_is_never_resolved() {
    let mut learner = ErrorDrivenLearner::new();
    let order = learner.learn(&tied_grammar()).unwrap();

    assert_eq!(order.edge_count(), 0);
    assert!(!learner.stats().converged);
    assert_eq!(learner.stats().iterations, 1);
}
