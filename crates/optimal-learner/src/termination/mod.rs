//! Termination conditions for learning loops.

use std::fmt::Debug;

use crate::scope::LearningScope;

/// Trait for determining when to stop learning.
pub trait Termination: Send + Debug {
    /// Returns true if learning should stop.
    fn is_terminated(&self, scope: &LearningScope) -> bool;
}

/// Terminates after a number of passes.
///
/// # Example
///
/// ```
/// use optimal_learner::termination::IterationLimitTermination;
///
/// // Stop after 1000 passes
/// let term = IterationLimitTermination::new(1000);
/// assert_eq!(term.limit(), 1000);
/// ```
#[derive(Debug, Clone)]
pub struct IterationLimitTermination {
    limit: u64,
}

impl IterationLimitTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for IterationLimitTermination {
    fn is_terminated(&self, scope: &LearningScope) -> bool {
        scope.iteration_count() >= self.limit
    }
}

/// Terminates once a complete pass makes no correction.
#[derive(Debug, Clone, Default)]
pub struct ErrorFreeTermination;

impl Termination for ErrorFreeTermination {
    fn is_terminated(&self, scope: &LearningScope) -> bool {
        scope.last_corrections() == Some(0)
    }
}

/// Terminates once the summed absolute weight change of a pass drops below
/// the tolerance.
#[derive(Debug, Clone)]
pub struct WeightChangeTermination {
    tolerance: f64,
}

impl WeightChangeTermination {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Termination for WeightChangeTermination {
    fn is_terminated(&self, scope: &LearningScope) -> bool {
        scope
            .last_weight_change()
            .is_some_and(|change| change < self.tolerance)
    }
}
