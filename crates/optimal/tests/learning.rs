//! End-to-end runs of every learner through the public API.

use std::io::Write;

use optimal::prelude::*;
use optimal::{run_learner_from_file, OptimalError};
use optimal_test::{contradictory_grammar, onset_grammar, pat_grammar, two_constraint_grammar};

fn strata(order: &PartialOrder) -> Vec<Vec<String>> {
    order
        .strata()
        .into_iter()
        .map(|s| s.into_iter().map(|c| c.name().to_string()).collect())
        .collect()
}

#[test]
fn every_algorithm_explains_the_two_constraint_grammar() {
    let grammar = two_constraint_grammar();
    for algorithm in Algorithm::ALL {
        let config = LearnerConfig::new()
            .with_algorithm(algorithm)
            .with_random_seed(5);
        let outcome = run_learner(&grammar, &config).unwrap();

        assert!(
            outcome.order.dominates("A", "B"),
            "{algorithm}: {}",
            outcome.order
        );
        assert!(outcome.order.is_acyclic());
        assert_eq!(outcome.values.is_some(), algorithm.is_weighted());
    }
}

#[test]
fn strict_learners_agree_on_the_onset_grammar() {
    let grammar = onset_grammar();
    let expected = vec![vec!["MAX", "NOCODA"], vec!["DEP"], vec!["ONSET"]];

    for name in ["cd", "rcd"] {
        assert_eq!(strata(&train(&grammar, name).unwrap()), expected, "{name}");
    }

    let edcd = train(&grammar, "edcd").unwrap();
    for set in grammar.competition_sets() {
        let predicted = optimal::predict_ot(&set, &edcd).unwrap();
        assert!(predicted.is_optimal(), "{}", set.input());
    }
}

#[test]
fn contradictory_data_never_cycles() {
    let grammar = contradictory_grammar();
    for algorithm in Algorithm::ALL {
        let config = LearnerConfig::new()
            .with_algorithm(algorithm)
            .with_random_seed(9)
            .with_iteration_limit(100);
        let outcome = run_learner(&grammar, &config).unwrap();

        assert!(outcome.order.is_acyclic(), "{algorithm}");
        assert!(
            !(outcome.order.dominates("A", "B") && outcome.order.dominates("B", "A")),
            "{algorithm}"
        );
    }
}

#[test]
fn seeded_gla_runs_are_identical() {
    let grammar = pat_grammar();
    let config = LearnerConfig::new()
        .with_algorithm(Algorithm::GradualLearning)
        .with_random_seed(2024)
        .with_iteration_limit(300);

    let first = run_learner(&grammar, &config).unwrap();
    let second = run_learner(&grammar, &config).unwrap();

    assert_eq!(first.values, second.values);
    assert_eq!(first.order.to_string(), second.order.to_string());
}

#[test]
fn learner_runs_from_a_config_file() {
    let path = std::env::temp_dir().join(format!("optimal-learner-{}.yaml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "algorithm: harmonic_grammar\nhg:\n  epsilon: 0.05").unwrap();
    drop(file);

    let outcome = run_learner_from_file(&pat_grammar(), &path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(outcome.stats.converged);
    assert!(outcome.order.dominates("NOCODA", "DEP"));
    assert!(outcome.order.dominates("MAX", "DEP"));
}

#[test]
fn out_of_range_config_is_rejected_before_learning() {
    let mut config = LearnerConfig::new().with_algorithm(Algorithm::GradualLearning);
    config.gla.plasticity = -1.0;
    let err = run_learner(&pat_grammar(), &config).unwrap_err();
    assert!(matches!(err, OptimalError::Config(_)));

    let mut config = LearnerConfig::new().with_algorithm(Algorithm::MaxEnt);
    config.maxent.learning_rate = 0.0;
    let err = run_learner(&pat_grammar(), &config).unwrap_err();
    assert!(matches!(err, OptimalError::Config(_)));
}

#[test]
fn missing_config_file_is_a_config_error() {
    let err = run_learner_from_file(&pat_grammar(), "/nonexistent/learner.toml").unwrap_err();
    assert!(matches!(err, OptimalError::Config(_)));
}
