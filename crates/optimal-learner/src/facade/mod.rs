//! Algorithm selection.
//!
//! [`LearnerKind`] wraps one learner per [`Algorithm`] so callers can pick a
//! learner at runtime, and [`train`] is the one-call entry point that takes
//! the selector as text.

use optimal_core::{Algorithm, Grammar, PartialOrder, Result, WeightTable};

use crate::demotion::ConstraintDemotionLearner;
use crate::error_driven::ErrorDrivenLearner;
use crate::gradual::GradualLearner;
use crate::harmonic::HarmonicGrammarLearner;
use crate::learner::{Learner, WeightedLearner};
use crate::maxent::MaxEntLearner;
use crate::recursive::RecursiveConstraintDemotionLearner;
use crate::stats::LearningStats;

/// A learner chosen at runtime.
#[derive(Debug)]
pub enum LearnerKind {
    ConstraintDemotion(ConstraintDemotionLearner),
    RecursiveConstraintDemotion(RecursiveConstraintDemotionLearner),
    ErrorDriven(ErrorDrivenLearner),
    Gradual(GradualLearner),
    MaxEnt(MaxEntLearner),
    HarmonicGrammar(HarmonicGrammarLearner),
}

impl LearnerKind {
    /// Creates the learner for `algorithm` with default parameters.
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::ConstraintDemotion => {
                Self::ConstraintDemotion(ConstraintDemotionLearner::new())
            }
            Algorithm::RecursiveConstraintDemotion => {
                Self::RecursiveConstraintDemotion(RecursiveConstraintDemotionLearner::new())
            }
            Algorithm::ErrorDrivenConstraintDemotion => {
                Self::ErrorDriven(ErrorDrivenLearner::new())
            }
            Algorithm::GradualLearning => Self::Gradual(GradualLearner::new()),
            Algorithm::MaxEnt => Self::MaxEnt(MaxEntLearner::new()),
            Algorithm::HarmonicGrammar => Self::HarmonicGrammar(HarmonicGrammarLearner::new()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.as_learner().algorithm()
    }

    pub fn learn(&mut self, grammar: &Grammar) -> Result<PartialOrder> {
        self.as_learner_mut().learn(grammar)
    }

    pub fn stats(&self) -> &LearningStats {
        self.as_learner().stats()
    }

    /// Numeric values of the last run; `None` for the strictly ranked learners.
    pub fn values(&self) -> Option<WeightTable> {
        match self {
            Self::Gradual(learner) => Some(learner.values()),
            Self::MaxEnt(learner) => Some(learner.values()),
            Self::HarmonicGrammar(learner) => Some(learner.values()),
            Self::ConstraintDemotion(_)
            | Self::RecursiveConstraintDemotion(_)
            | Self::ErrorDriven(_) => None,
        }
    }

    pub fn as_learner(&self) -> &dyn Learner {
        match self {
            Self::ConstraintDemotion(learner) => learner,
            Self::RecursiveConstraintDemotion(learner) => learner,
            Self::ErrorDriven(learner) => learner,
            Self::Gradual(learner) => learner,
            Self::MaxEnt(learner) => learner,
            Self::HarmonicGrammar(learner) => learner,
        }
    }

    pub fn as_learner_mut(&mut self) -> &mut dyn Learner {
        match self {
            Self::ConstraintDemotion(learner) => learner,
            Self::RecursiveConstraintDemotion(learner) => learner,
            Self::ErrorDriven(learner) => learner,
            Self::Gradual(learner) => learner,
            Self::MaxEnt(learner) => learner,
            Self::HarmonicGrammar(learner) => learner,
        }
    }
}

impl From<Algorithm> for LearnerKind {
    fn from(algorithm: Algorithm) -> Self {
        Self::new(algorithm)
    }
}

/// Learns a ranking for `grammar` with the algorithm named by `algorithm`.
///
/// Accepts the short names `"cd"` (or `"ot"`), `"rcd"`, `"edcd"`, `"gla"`,
/// `"maxent"` and `"hg"`.
///
/// # Errors
///
/// Returns [`OptimalError::UnsupportedAlgorithm`](optimal_core::OptimalError::UnsupportedAlgorithm)
/// for any other selector.
///
/// # Example
///
/// ```
/// use optimal_core::{Constraint, Example, Grammar, OptimalError};
/// use optimal_learner::train;
///
/// let grammar = Grammar::with_examples(
///     vec![Constraint::new("A"), Constraint::new("B")],
///     vec![
///         Example::new("/x/", "x1", true).with_violation("B", 1),
///         Example::new("/x/", "x2", false).with_violation("A", 1),
///     ],
/// );
///
/// let order = train(&grammar, "rcd").unwrap();
/// assert_eq!(order.to_string(), "A >> B");
///
/// let err = train(&grammar, "foo").unwrap_err();
/// assert_eq!(err, OptimalError::UnsupportedAlgorithm("foo".to_string()));
/// ```
pub fn train(grammar: &Grammar, algorithm: &str) -> Result<PartialOrder> {
    let algorithm: Algorithm = algorithm.parse()?;
    LearnerKind::new(algorithm).learn(grammar)
}
