//! Tests for basic constraint demotion.

use super::*;
use crate::test_utils::{contradictory_grammar, onset_grammar, pat_grammar, strata_names};

#[test]
fn test_pat_grammar() {
    let mut learner = ConstraintDemotionLearner::new();
    let order = learner.learn(&pat_grammar()).unwrap();

    assert!(order.dominates("NOCODA", "DEP"));
    assert!(order.dominates("MAX", "DEP"));
    assert!(!order.dominates("MAX", "NOCODA"));
    assert_eq!(order.to_string(), "{MAX, NOCODA} >> DEP");
    assert_eq!(learner.stats().iterations, 1);
    assert_eq!(learner.stats().corrections, 2);
}

#[test]
fn test_onset_grammar_direct_edges() {
    let order = ConstraintDemotionLearner::new()
        .learn(&onset_grammar())
        .unwrap();

    assert!(order.directly_dominates("DEP", "ONSET"));
    assert!(order.directly_dominates("MAX", "ONSET"));
    assert!(order.dominates("NOCODA", "ONSET"));
    assert_eq!(
        strata_names(&order),
        vec![vec!["MAX", "NOCODA"], vec!["DEP"], vec!["ONSET"]]
    );
}

#[test]
fn test_contradiction_keeps_first_edge() {
    let order = ConstraintDemotionLearner::new()
        .learn(&contradictory_grammar())
        .unwrap();

    assert!(order.dominates("B", "A"));
    assert!(!order.dominates("A", "B"));
    assert!(order.is_acyclic());
}

#[test]
fn test_demote_pair_skips_reverse_edges() {
    let grammar = pat_grammar();
    let mut order = PartialOrder::new(grammar.constraints().iter().cloned());
    order.add_dominance("DEP", "NOCODA").unwrap();

    let pairs = grammar.winner_loser_pairs();
    assert_eq!(demote_pair(&mut order, grammar.constraints(), &pairs[0]).unwrap(), 0);
    assert_eq!(demote_pair(&mut order, grammar.constraints(), &pairs[1]).unwrap(), 1);
    assert!(order.dominates("MAX", "DEP"));
}

#[test]
fn test_relearning_starts_fresh() {
    let mut learner = ConstraintDemotionLearner::new();
    learner.learn(&contradictory_grammar()).unwrap();
    let order = learner.learn(&pat_grammar()).unwrap();
    assert_eq!(order.len(), 3);
    assert!(!order.contains("A"));
}
