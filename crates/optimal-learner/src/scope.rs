//! Run-level scope shared by every learner.

use std::time::Instant;

use optimal_core::{Algorithm, Grammar, PartialOrder};
use tracing::{debug, info, warn};

use crate::stats::LearningStats;

/// Tracks the progress of a single learning run.
///
/// Created at the start of `learn`, updated once per pass, and consumed by
/// [`LearningScope::finish`] which logs the outcome and yields the statistics.
#[derive(Debug)]
pub struct LearningScope {
    algorithm: Algorithm,
    start_time: Instant,
    stats: LearningStats,
    last_corrections: Option<u64>,
    last_weight_change: Option<f64>,
}

impl LearningScope {
    /// Opens a scope and logs the start of the run.
    pub fn start(algorithm: Algorithm, grammar: &Grammar) -> Self {
        let undeclared = grammar.undeclared_constraint_names();
        if !undeclared.is_empty() {
            warn!(
                event = "undeclared_constraints",
                algorithm = %algorithm,
                names = ?undeclared,
            );
        }

        info!(
            event = "learn_start",
            algorithm = %algorithm,
            constraints = grammar.constraints().len() as u64,
            examples = grammar.examples().len() as u64,
        );

        Self {
            algorithm,
            start_time: Instant::now(),
            stats: LearningStats::default(),
            last_corrections: None,
            last_weight_change: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Records a completed pass.
    pub fn complete_iteration(&mut self, corrections: u64, weight_change: f64) {
        self.stats.record_iteration(corrections);
        self.last_corrections = Some(corrections);
        self.last_weight_change = Some(weight_change);

        debug!(
            event = "iteration",
            algorithm = %self.algorithm,
            iteration = self.stats.iterations,
            corrections = corrections,
            weight_change = weight_change,
        );
    }

    pub fn iteration_count(&self) -> u64 {
        self.stats.iterations
    }

    /// Corrections made in the latest pass, if any pass completed.
    pub fn last_corrections(&self) -> Option<u64> {
        self.last_corrections
    }

    /// Summed absolute weight change of the latest pass.
    pub fn last_weight_change(&self) -> Option<f64> {
        self.last_weight_change
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Closes the scope, logging the learned ranking.
    pub fn finish(mut self, order: &PartialOrder, converged: bool) -> LearningStats {
        self.stats.converged = converged;
        self.stats.elapsed = self.elapsed();

        info!(
            event = "learn_end",
            algorithm = %self.algorithm,
            iterations = self.stats.iterations,
            corrections = self.stats.corrections,
            converged = converged,
            duration_ms = self.stats.elapsed.as_millis() as u64,
            ranking = %order,
        );
        self.stats
    }
}
