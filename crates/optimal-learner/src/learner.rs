//! Learner traits.

use std::fmt::Debug;

use optimal_core::{Algorithm, Grammar, PartialOrder, Result, WeightTable};

use crate::stats::LearningStats;

/// A procedure that learns a constraint ranking from labeled examples.
///
/// Each call to [`Learner::learn`] starts from scratch and replaces any
/// state left by a previous call.
pub trait Learner: Debug {
    /// The algorithm this learner implements.
    fn algorithm(&self) -> Algorithm;

    /// Learns a partial order over the grammar's declared constraints.
    fn learn(&mut self, grammar: &Grammar) -> Result<PartialOrder>;

    /// Statistics of the most recent run.
    fn stats(&self) -> &LearningStats;
}

/// A learner that also produces a numeric value per constraint.
pub trait WeightedLearner: Learner {
    /// Snapshot of the learned table keyed by constraint name.
    fn values(&self) -> WeightTable;
}
