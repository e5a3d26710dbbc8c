//! Learning statistics.

use std::time::Duration;

/// Summary of one learning run.
///
/// # Example
///
/// ```
/// use optimal_learner::stats::LearningStats;
///
/// let mut stats = LearningStats::default();
/// stats.record_iteration(3);
/// stats.record_iteration(0);
///
/// assert_eq!(stats.iterations, 2);
/// assert_eq!(stats.corrections, 3);
/// assert_eq!(stats.corrections_per_iteration(), 1.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearningStats {
    /// Passes over the data.
    pub iterations: u64,
    /// Total error-triggered updates across all passes.
    pub corrections: u64,
    /// Whether the learner stopped on its own criterion before the cap.
    pub converged: bool,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl LearningStats {
    /// Records a completed pass with the given number of corrections.
    pub fn record_iteration(&mut self, corrections: u64) {
        self.iterations += 1;
        self.corrections += corrections;
    }

    /// Average corrections per pass.
    pub fn corrections_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.corrections as f64 / self.iterations as f64
        }
    }
}
