//! Harmonic Grammar weight learning.
//!
//! A perceptron over winner/loser pairs: whenever a loser is at least as
//! harmonic as its winner, every weight moves by the learning rate times the
//! violation difference.

use optimal_config::DEFAULT_ITERATION_LIMIT;
use optimal_core::{Algorithm, Grammar, PartialOrder, Result, WeightTable};
use tracing::trace;

use crate::learner::{Learner, WeightedLearner};
use crate::scope::LearningScope;
use crate::stats::LearningStats;
use crate::termination::{ErrorFreeTermination, IterationLimitTermination, Termination};

/// Weights closer than this are reported in the same stratum.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Perceptron-style Harmonic Grammar learner.
///
/// # Example
///
/// ```
/// use optimal_core::{Constraint, Example, Grammar};
/// use optimal_learner::{HarmonicGrammarLearner, Learner, WeightedLearner};
///
/// let grammar = Grammar::with_examples(
///     vec![Constraint::new("A"), Constraint::new("B")],
///     vec![
///         Example::new("/x/", "x1", true).with_violation("B", 1),
///         Example::new("/x/", "x2", false).with_violation("A", 1),
///     ],
/// );
///
/// let mut learner = HarmonicGrammarLearner::new();
/// let order = learner.learn(&grammar).unwrap();
/// assert_eq!(order.to_string(), "A >> B");
/// assert_eq!(learner.stats().iterations, 2);
/// ```
#[derive(Debug, Clone)]
pub struct HarmonicGrammarLearner {
    learning_rate: f64,
    epsilon: f64,
    iteration_limit: u64,
    weights: WeightTable,
    stats: LearningStats,
}

impl Default for HarmonicGrammarLearner {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epsilon: DEFAULT_EPSILON,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            weights: WeightTable::new(),
            stats: LearningStats::default(),
        }
    }
}

impl HarmonicGrammarLearner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = limit;
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn iteration_limit(&self) -> u64 {
        self.iteration_limit
    }

    /// Weights learned by the last run.
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }
}

impl Learner for HarmonicGrammarLearner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HarmonicGrammar
    }

    fn learn(&mut self, grammar: &Grammar) -> Result<PartialOrder> {
        let mut scope = LearningScope::start(self.algorithm(), grammar);
        let limit = IterationLimitTermination::new(self.iteration_limit);
        let error_free = ErrorFreeTermination;

        let constraints = grammar.constraints();
        let pairs = grammar.winner_loser_pairs();
        let mut weights: WeightTable = constraints
            .iter()
            .map(|c| (c.name().to_string(), 0.0))
            .collect();
        let mut converged = false;

        while !limit.is_terminated(&scope) {
            let mut updates = 0;
            let mut change = 0.0;

            for pair in &pairs {
                let winner_harmony = pair.winner.harmony(&weights);
                let loser_harmony = pair.loser.harmony(&weights);
                if loser_harmony < winner_harmony {
                    continue;
                }

                updates += 1;
                trace!(
                    event = "harmony_error",
                    input = pair.winner.input_form(),
                    winner = pair.winner.output_form(),
                    loser = pair.loser.output_form(),
                );
                for (name, weight) in weights.iter_mut() {
                    let difference =
                        f64::from(pair.loser.violation(name)) - f64::from(pair.winner.violation(name));
                    let delta = self.learning_rate * difference;
                    *weight += delta;
                    change += delta.abs();
                }
            }

            scope.complete_iteration(updates, change);
            if error_free.is_terminated(&scope) {
                converged = true;
                break;
            }
        }

        self.weights = weights;
        let order =
            PartialOrder::from_values(constraints.iter().cloned(), &self.weights, self.epsilon);
        self.stats = scope.finish(&order, converged);
        Ok(order)
    }

    fn stats(&self) -> &LearningStats {
        &self.stats
    }
}

impl WeightedLearner for HarmonicGrammarLearner {
    fn values(&self) -> WeightTable {
        self.weights.clone()
    }
}

#[cfg(test)]
mod tests;
