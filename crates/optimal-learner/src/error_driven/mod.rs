//! Error-Driven Constraint Demotion.
//!
//! Repeatedly evaluates each winner's competition set under the current
//! order and demotes loser-preferring constraints whenever the winner is not
//! the unique optimum.

use optimal_config::DEFAULT_ITERATION_LIMIT;
use optimal_core::{Algorithm, Grammar, PartialOrder, Result, WinnerLoserPair};
use tracing::{debug, warn};

use crate::demotion::demote_pair;
use crate::evaluation::evaluate_ot;
use crate::learner::Learner;
use crate::scope::LearningScope;
use crate::stats::LearningStats;
use crate::termination::{ErrorFreeTermination, IterationLimitTermination, Termination};

/// Error-driven constraint demotion learner.
///
/// # Example
///
/// ```
/// use optimal_core::{Constraint, Example, Grammar};
/// use optimal_learner::{ErrorDrivenLearner, Learner};
///
/// let grammar = Grammar::with_examples(
///     vec![Constraint::new("A"), Constraint::new("B")],
///     vec![
///         Example::new("/x/", "x1", true).with_violation("B", 1),
///         Example::new("/x/", "x2", false).with_violation("A", 1),
///     ],
/// );
///
/// let mut learner = ErrorDrivenLearner::new().with_iteration_limit(10);
/// let order = learner.learn(&grammar).unwrap();
/// assert!(order.dominates("A", "B"));
/// assert!(learner.stats().converged);
/// ```
#[derive(Debug, Clone)]
pub struct ErrorDrivenLearner {
    iteration_limit: u64,
    stats: LearningStats,
}

impl Default for ErrorDrivenLearner {
    fn default() -> Self {
        Self {
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            stats: LearningStats::default(),
        }
    }
}

impl ErrorDrivenLearner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = limit;
        self
    }

    pub fn iteration_limit(&self) -> u64 {
        self.iteration_limit
    }
}

impl Learner for ErrorDrivenLearner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ErrorDrivenConstraintDemotion
    }

    fn learn(&mut self, grammar: &Grammar) -> Result<PartialOrder> {
        let mut scope = LearningScope::start(self.algorithm(), grammar);
        let limit = IterationLimitTermination::new(self.iteration_limit);
        let error_free = ErrorFreeTermination;

        let constraints = grammar.constraints();
        let mut order = PartialOrder::new(constraints.iter().cloned());
        let mut converged = false;

        while !limit.is_terminated(&scope) {
            let mut errors = 0;
            let mut added = 0;

            for winner in grammar.winners() {
                let set = grammar.competition_set(winner.input_form());
                let Some(winner_index) = set
                    .candidates()
                    .iter()
                    .position(|c| std::ptr::eq(*c, winner))
                else {
                    continue;
                };

                let evaluation = evaluate_ot(set.candidates(), &order);
                if evaluation.is_decisive_for(winner_index) {
                    continue;
                }

                errors += 1;
                debug!(
                    event = "prediction_error",
                    input = winner.input_form(),
                    expected = winner.output_form(),
                    predicted = set.candidates()[evaluation.predicted()].output_form(),
                );
                for loser in set.losers() {
                    let pair = WinnerLoserPair::new(winner, loser);
                    added += demote_pair(&mut order, constraints, &pair)?;
                }
            }

            scope.complete_iteration(errors, added as f64);
            if error_free.is_terminated(&scope) {
                converged = true;
                break;
            }
            if added == 0 {
                warn!(
                    event = "learning_stalled",
                    algorithm = %self.algorithm(),
                    iteration = scope.iteration_count(),
                    errors = errors,
                );
                break;
            }
        }

        self.stats = scope.finish(&order, converged);
        Ok(order)
    }

    fn stats(&self) -> &LearningStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests;
