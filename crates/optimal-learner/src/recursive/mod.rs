//! Recursive Constraint Demotion.
//!
//! Builds a total stratification top-down: each round places every
//! remaining constraint that never prefers a loser in any unexplained
//! winner/loser pair, then discards the pairs that round explains.

use optimal_core::{Algorithm, Constraint, Grammar, PartialOrder, Result};
use tracing::{debug, warn};

use crate::learner::Learner;
use crate::scope::LearningScope;
use crate::stats::LearningStats;

/// Recursive constraint demotion learner.
///
/// When the evidence admits no ranking, the constraints that could not be
/// placed are gathered into a final catch-all stratum and
/// [`is_consistent`](Self::is_consistent) reports `false`.
#[derive(Debug, Clone)]
pub struct RecursiveConstraintDemotionLearner {
    stats: LearningStats,
    consistent: bool,
}

impl Default for RecursiveConstraintDemotionLearner {
    fn default() -> Self {
        Self {
            stats: LearningStats::default(),
            consistent: true,
        }
    }
}

impl RecursiveConstraintDemotionLearner {
    pub fn new() -> Self {
        Self::default()
    }

    /// False if the last run had to fall back to a catch-all stratum.
    pub fn is_consistent(&self) -> bool {
        self.consistent
    }

    /// Computes the strata, highest first, without materializing an order.
    pub fn stratify<'g>(&mut self, grammar: &'g Grammar) -> Vec<Vec<&'g Constraint>> {
        let mut pairs = grammar.winner_loser_pairs();
        let mut remaining: Vec<&Constraint> = grammar.constraints().iter().collect();
        let mut strata = Vec::new();
        self.consistent = true;

        while !remaining.is_empty() {
            let (placed, rest): (Vec<&Constraint>, Vec<&Constraint>) = remaining
                .into_iter()
                .partition(|c| pairs.iter().all(|pair| !pair.prefers_loser(c.name())));

            if placed.is_empty() {
                warn!(
                    event = "inconsistent_evidence",
                    unexplained_pairs = pairs.len() as u64,
                    unranked = rest.len() as u64,
                );
                self.consistent = false;
                strata.push(rest);
                break;
            }

            pairs.retain(|pair| !placed.iter().any(|c| pair.prefers_winner(c.name())));
            debug!(
                event = "stratum_placed",
                stratum = strata.len() as u64,
                size = placed.len() as u64,
                unexplained_pairs = pairs.len() as u64,
            );

            strata.push(placed);
            remaining = rest;
        }
        strata
    }
}

impl Learner for RecursiveConstraintDemotionLearner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RecursiveConstraintDemotion
    }

    fn learn(&mut self, grammar: &Grammar) -> Result<PartialOrder> {
        let mut scope = LearningScope::start(self.algorithm(), grammar);
        let strata = self.stratify(grammar);
        scope.complete_iteration(0, 0.0);

        let mut order = PartialOrder::new(grammar.constraints().iter().cloned());
        for (i, upper) in strata.iter().enumerate() {
            for lower in strata.iter().skip(i + 1) {
                for higher in upper {
                    for dominated in lower {
                        order.add_dominance(higher.name(), dominated.name())?;
                    }
                }
            }
        }

        self.stats = scope.finish(&order, self.consistent);
        Ok(order)
    }

    fn stats(&self) -> &LearningStats {
        &self.stats
    }
}
