//! Gradual Learning Algorithm.
//!
//! Keeps a continuous ranking value per constraint. Each winner is evaluated
//! under noisy values; on an error the constraints preferring the winner are
//! promoted and those preferring the wrong candidate are demoted by the
//! plasticity.

use std::cmp::Ordering;
use std::fmt::Debug;

use optimal_config::DEFAULT_ITERATION_LIMIT;
use optimal_core::{Algorithm, Example, Grammar, PartialOrder, Result, WeightTable};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::evaluation::best_by_harmony;
use crate::learner::{Learner, WeightedLearner};
use crate::noise::GaussianNoise;
use crate::scope::LearningScope;
use crate::stats::LearningStats;
use crate::termination::{ErrorFreeTermination, IterationLimitTermination, Termination};

/// Stochastic ranking-value learner.
///
/// The random source is owned by the learner and injected at construction,
/// so a fixed seed reproduces a run exactly.
///
/// # Example
///
/// ```
/// use optimal_core::{Constraint, Example, Grammar};
/// use optimal_learner::{GradualLearner, Learner, WeightedLearner};
///
/// let grammar = Grammar::with_examples(
///     vec![Constraint::new("A"), Constraint::new("B")],
///     vec![
///         Example::new("/x/", "x1", true).with_violation("B", 1),
///         Example::new("/x/", "x2", false).with_violation("A", 1),
///     ],
/// );
///
/// let mut learner = GradualLearner::with_seed(42).with_iteration_limit(200);
/// let order = learner.learn(&grammar).unwrap();
/// assert!(order.dominates("A", "B"));
/// assert!(learner.values()["A"] > learner.values()["B"]);
/// ```
#[derive(Debug, Clone)]
pub struct GradualLearner<R = ChaCha8Rng> {
    plasticity: f64,
    noise: GaussianNoise,
    initial_value: f64,
    iteration_limit: u64,
    rng: R,
    values: WeightTable,
    stats: LearningStats,
}

impl GradualLearner<ChaCha8Rng> {
    /// Creates a learner seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates a reproducible learner.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for GradualLearner<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GradualLearner<R> {
    /// Creates a learner drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            plasticity: 2.0,
            noise: GaussianNoise::new(2.0),
            initial_value: 100.0,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            rng,
            values: WeightTable::new(),
            stats: LearningStats::default(),
        }
    }

    pub fn with_plasticity(mut self, plasticity: f64) -> Self {
        self.plasticity = plasticity;
        self
    }

    /// Sets the standard deviation of the evaluation noise.
    pub fn with_noise(mut self, std_dev: f64) -> Self {
        self.noise = GaussianNoise::new(std_dev);
        self
    }

    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = value;
        self
    }

    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = limit;
        self
    }

    pub fn plasticity(&self) -> f64 {
        self.plasticity
    }

    pub fn noise(&self) -> GaussianNoise {
        self.noise
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    pub fn iteration_limit(&self) -> u64 {
        self.iteration_limit
    }

    /// Ranking values learned by the last run.
    pub fn ranking_values(&self) -> &WeightTable {
        &self.values
    }

    /// Adds fresh noise to every ranking value.
    fn perturb(&mut self, values: &WeightTable) -> WeightTable {
        values
            .iter()
            .map(|(name, &value)| (name.clone(), value + self.noise.sample(&mut self.rng)))
            .collect()
    }
}

impl<R: Rng + Debug> Learner for GradualLearner<R> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::GradualLearning
    }

    fn learn(&mut self, grammar: &Grammar) -> Result<PartialOrder> {
        let mut scope = LearningScope::start(self.algorithm(), grammar);
        let limit = IterationLimitTermination::new(self.iteration_limit);
        let error_free = ErrorFreeTermination;

        let constraints = grammar.constraints();
        let mut values: WeightTable = constraints
            .iter()
            .map(|c| (c.name().to_string(), self.initial_value))
            .collect();
        let mut winners: Vec<&Example> = grammar.winners().collect();
        let mut converged = false;

        while !limit.is_terminated(&scope) {
            winners.shuffle(&mut self.rng);
            let mut errors = 0;
            let mut change = 0.0;

            for &winner in &winners {
                let set = grammar.competition_set(winner.input_form());
                let Some(winner_index) = set
                    .candidates()
                    .iter()
                    .position(|c| std::ptr::eq(*c, winner))
                else {
                    continue;
                };

                let noisy = self.perturb(&values);
                let predicted = best_by_harmony(set.candidates(), &noisy, winner_index);
                if predicted == winner_index {
                    continue;
                }

                errors += 1;
                let loser = set.candidates()[predicted];
                trace!(
                    event = "prediction_error",
                    input = winner.input_form(),
                    expected = winner.output_form(),
                    predicted = loser.output_form(),
                );

                for constraint in constraints {
                    let name = constraint.name();
                    let step = match loser.violation(name).cmp(&winner.violation(name)) {
                        Ordering::Greater => self.plasticity,
                        Ordering::Less => -self.plasticity,
                        Ordering::Equal => continue,
                    };
                    if let Some(value) = values.get_mut(name) {
                        *value += step;
                        change += step.abs();
                    }
                }
            }

            scope.complete_iteration(errors, change);
            if self.noise.is_silent() && error_free.is_terminated(&scope) {
                converged = true;
                break;
            }
        }

        self.values = values;
        let order = PartialOrder::from_values(constraints.iter().cloned(), &self.values, 0.0);
        self.stats = scope.finish(&order, converged);
        Ok(order)
    }

    fn stats(&self) -> &LearningStats {
        &self.stats
    }
}

impl<R: Rng + Debug> WeightedLearner for GradualLearner<R> {
    fn values(&self) -> WeightTable {
        self.values.clone()
    }
}
