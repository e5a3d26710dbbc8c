//! Maximum-entropy weight learning.
//!
//! Batch gradient ascent on the log-likelihood of the labeled winners under
//! a log-linear distribution over each competition set.

use optimal_config::DEFAULT_ITERATION_LIMIT;
use optimal_core::{
    Algorithm, CompetitionSet, Constraint, Example, Grammar, PartialOrder, Result, WeightTable,
};

use crate::learner::{Learner, WeightedLearner};
use crate::scope::LearningScope;
use crate::stats::LearningStats;
use crate::termination::{IterationLimitTermination, Termination, WeightChangeTermination};

/// Maximum-entropy learner.
///
/// # Example
///
/// ```
/// use optimal_core::{Constraint, Example, Grammar};
/// use optimal_learner::{Learner, MaxEntLearner, WeightedLearner};
///
/// let grammar = Grammar::with_examples(
///     vec![Constraint::new("A"), Constraint::new("B")],
///     vec![
///         Example::new("/x/", "x1", true).with_violation("B", 1),
///         Example::new("/x/", "x2", false).with_violation("A", 1),
///     ],
/// );
///
/// let mut learner = MaxEntLearner::new();
/// let order = learner.learn(&grammar).unwrap();
/// assert!(order.dominates("A", "B"));
/// assert!(learner.values()["A"] > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct MaxEntLearner {
    learning_rate: f64,
    tolerance: f64,
    iteration_limit: u64,
    weights: WeightTable,
    history: Vec<f64>,
    stats: LearningStats,
}

impl Default for MaxEntLearner {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            tolerance: 0.001,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            weights: WeightTable::new(),
            history: Vec::new(),
            stats: LearningStats::default(),
        }
    }
}

impl MaxEntLearner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = limit;
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn iteration_limit(&self) -> u64 {
        self.iteration_limit
    }

    /// Weights learned by the last run.
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Negative log-likelihood before training and after every pass.
    pub fn objective_history(&self) -> &[f64] {
        &self.history
    }

    /// Negative log-likelihood of the labeled winners under the learned weights.
    pub fn negative_log_likelihood(&self, grammar: &Grammar) -> f64 {
        negative_log_likelihood(&grammar.competition_sets(), &self.weights)
    }
}

/// Probability of each candidate: softmax of harmony.
///
/// Falls back to a uniform distribution when the normalizer degenerates.
pub fn candidate_probabilities(candidates: &[&Example], weights: &WeightTable) -> Vec<f64> {
    let harmonies: Vec<f64> = candidates.iter().map(|c| c.harmony(weights)).collect();
    let shift = harmonies.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scores: Vec<f64> = harmonies.iter().map(|h| (h - shift).exp()).collect();
    let total: f64 = scores.iter().sum();

    if total.is_finite() && total > 0.0 {
        scores.into_iter().map(|s| s / total).collect()
    } else {
        let uniform = 1.0 / candidates.len().max(1) as f64;
        vec![uniform; candidates.len()]
    }
}

/// Summed negative log-probability of every labeled-optimal candidate.
pub fn negative_log_likelihood(sets: &[CompetitionSet<'_>], weights: &WeightTable) -> f64 {
    sets.iter()
        .map(|set| {
            let probabilities = candidate_probabilities(set.candidates(), weights);
            set.candidates()
                .iter()
                .zip(probabilities)
                .filter(|(candidate, _)| candidate.is_optimal())
                .map(|(_, p)| -p.ln())
                .sum::<f64>()
        })
        .sum()
}

/// Observed minus expected violations, summed over all competition sets.
fn log_likelihood_gradient(
    sets: &[CompetitionSet<'_>],
    constraints: &[Constraint],
    weights: &WeightTable,
) -> WeightTable {
    let mut gradient: WeightTable = constraints
        .iter()
        .map(|c| (c.name().to_string(), 0.0))
        .collect();

    for set in sets {
        let probabilities = candidate_probabilities(set.candidates(), weights);
        for (candidate, p) in set.candidates().iter().zip(probabilities) {
            let observed = if candidate.is_optimal() { 1.0 } else { 0.0 };
            for (name, g) in gradient.iter_mut() {
                *g += (observed - p) * f64::from(candidate.violation(name));
            }
        }
    }
    gradient
}

impl Learner for MaxEntLearner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MaxEnt
    }

    fn learn(&mut self, grammar: &Grammar) -> Result<PartialOrder> {
        let mut scope = LearningScope::start(self.algorithm(), grammar);
        let limit = IterationLimitTermination::new(self.iteration_limit);
        let settled = WeightChangeTermination::new(self.tolerance);

        let constraints = grammar.constraints();
        let sets = grammar.competition_sets();
        let mut weights: WeightTable = constraints
            .iter()
            .map(|c| (c.name().to_string(), 0.0))
            .collect();
        self.history = vec![negative_log_likelihood(&sets, &weights)];
        let mut converged = false;

        while !limit.is_terminated(&scope) {
            let gradient = log_likelihood_gradient(&sets, constraints, &weights);
            let mut change = 0.0;
            for (name, g) in &gradient {
                if let Some(weight) = weights.get_mut(name) {
                    let delta = self.learning_rate * g;
                    *weight -= delta;
                    change += delta.abs();
                }
            }

            self.history.push(negative_log_likelihood(&sets, &weights));
            scope.complete_iteration(0, change);
            if settled.is_terminated(&scope) {
                converged = true;
                break;
            }
        }

        self.weights = weights;
        let order = PartialOrder::from_values(constraints.iter().cloned(), &self.weights, 0.0);
        self.stats = scope.finish(&order, converged);
        Ok(order)
    }

    fn stats(&self) -> &LearningStats {
        &self.stats
    }
}

impl WeightedLearner for MaxEntLearner {
    fn values(&self) -> WeightTable {
        self.weights.clone()
    }
}
