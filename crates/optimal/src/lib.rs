//! Optimal - Constraint-ranking learners for Optimality Theory in Rust
//!
//! Build a [`Grammar`] of constraints and labeled candidates, then learn a
//! ranking with any of the six learners.
//!
//! # Example
//!
//! ```rust
//! use optimal::prelude::*;
//!
//! let grammar = Grammar::with_examples(
//!     vec![Constraint::new("NOCODA"), Constraint::new("DEP")],
//!     vec![
//!         Example::new("/pat/", "pa.ta", true).with_violation("DEP", 1),
//!         Example::new("/pat/", "pat", false).with_violation("NOCODA", 1),
//!     ],
//! );
//!
//! let order = train(&grammar, "edcd").unwrap();
//! assert_eq!(order.to_string(), "NOCODA >> DEP");
//! ```

// Data model
pub use optimal_core::{
    Algorithm, CompetitionSet, Constraint, Example, Grammar, OptimalError, PartialOrder, Result,
    Violations, WeightTable, WinnerLoserPair,
};

// Configuration
pub use optimal_config::{ConfigError, LearnerConfig};

// Learners
pub use optimal_learner::{
    train, ConstraintDemotionLearner, ErrorDrivenLearner, GradualLearner,
    HarmonicGrammarLearner, Learner, LearnerBuilder, LearnerKind, LearningStats, MaxEntLearner,
    RecursiveConstraintDemotionLearner, WeightedLearner,
};

// OT evaluation helpers
pub use optimal_learner::{evaluate_ot, predict_ot, OtEvaluation};

mod runner;
pub use runner::{run_learner, run_learner_from_file, LearningOutcome};

#[cfg(feature = "console")]
pub use optimal_console as console;

pub mod prelude {
    pub use super::{Algorithm, Constraint, Example, Grammar, PartialOrder, WeightTable};
    pub use super::{Learner, LearnerConfig, LearnerKind, WeightedLearner};
    pub use super::{run_learner, train};
}
