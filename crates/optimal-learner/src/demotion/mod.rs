//! Basic Constraint Demotion.
//!
//! One pass over every winner/loser pair: each constraint preferring the
//! winner is placed above each constraint preferring the loser.

use optimal_core::{Algorithm, Constraint, Grammar, PartialOrder, Result, WinnerLoserPair};
use tracing::trace;

use crate::learner::Learner;
use crate::scope::LearningScope;
use crate::stats::LearningStats;

/// Single-pass pairwise constraint demotion.
///
/// # Example
///
/// ```
/// use optimal_core::{Constraint, Example, Grammar};
/// use optimal_learner::{ConstraintDemotionLearner, Learner};
///
/// let grammar = Grammar::with_examples(
///     vec![Constraint::new("NOCODA"), Constraint::new("DEP")],
///     vec![
///         Example::new("/pat/", "pa.ta", true).with_violation("DEP", 1),
///         Example::new("/pat/", "pat", false).with_violation("NOCODA", 1),
///     ],
/// );
///
/// let order = ConstraintDemotionLearner::new().learn(&grammar).unwrap();
/// assert_eq!(order.to_string(), "NOCODA >> DEP");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstraintDemotionLearner {
    stats: LearningStats,
}

impl ConstraintDemotionLearner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Learner for ConstraintDemotionLearner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ConstraintDemotion
    }

    fn learn(&mut self, grammar: &Grammar) -> Result<PartialOrder> {
        let mut scope = LearningScope::start(self.algorithm(), grammar);
        let mut order = PartialOrder::new(grammar.constraints().iter().cloned());

        let mut corrections = 0;
        for pair in grammar.winner_loser_pairs() {
            if demote_pair(&mut order, grammar.constraints(), &pair)? > 0 {
                corrections += 1;
            }
        }
        scope.complete_iteration(corrections, 0.0);

        self.stats = scope.finish(&order, true);
        Ok(order)
    }

    fn stats(&self) -> &LearningStats {
        &self.stats
    }
}

/// Places every winner-preferring constraint above every loser-preferring
/// one, skipping edges whose reverse already holds.
///
/// Returns the number of edges added.
pub(crate) fn demote_pair(
    order: &mut PartialOrder,
    constraints: &[Constraint],
    pair: &WinnerLoserPair<'_>,
) -> Result<usize> {
    let favoring_loser = pair.loser_preferring(constraints);
    if favoring_loser.is_empty() {
        return Ok(0);
    }

    let mut added = 0;
    for higher in pair.winner_preferring(constraints) {
        for lower in &favoring_loser {
            if order.dominates(lower.name(), higher.name()) {
                trace!(
                    event = "edge_skipped",
                    higher = higher.name(),
                    lower = lower.name(),
                );
                continue;
            }
            if order.add_dominance(higher.name(), lower.name())? {
                added += 1;
            }
        }
    }
    Ok(added)
}

#[cfg(test)]
mod tests;
