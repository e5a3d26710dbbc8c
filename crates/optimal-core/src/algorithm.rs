//! The closed set of learning algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::OptimalError;

/// Learning algorithm selector.
///
/// # Example
///
/// ```
/// use optimal_core::{Algorithm, OptimalError};
///
/// assert_eq!("rcd".parse::<Algorithm>(), Ok(Algorithm::RecursiveConstraintDemotion));
/// assert_eq!("OT".parse::<Algorithm>(), Ok(Algorithm::ConstraintDemotion));
/// assert!(matches!(
///     "stochastic-ot".parse::<Algorithm>(),
///     Err(OptimalError::UnsupportedAlgorithm(_))
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Algorithm {
    /// Single-pass pairwise constraint demotion.
    #[default]
    ConstraintDemotion,

    /// Recursive constraint demotion (total stratification).
    RecursiveConstraintDemotion,

    /// Error-driven constraint demotion.
    ErrorDrivenConstraintDemotion,

    /// Stochastic gradual learning of ranking values.
    GradualLearning,

    /// Maximum-entropy weight learning.
    MaxEnt,

    /// Perceptron-style Harmonic Grammar weight learning.
    HarmonicGrammar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::ConstraintDemotion,
        Algorithm::RecursiveConstraintDemotion,
        Algorithm::ErrorDrivenConstraintDemotion,
        Algorithm::GradualLearning,
        Algorithm::MaxEnt,
        Algorithm::HarmonicGrammar,
    ];

    /// Short selector used on command lines and in logs.
    pub fn short_name(self) -> &'static str {
        match self {
            Algorithm::ConstraintDemotion => "cd",
            Algorithm::RecursiveConstraintDemotion => "rcd",
            Algorithm::ErrorDrivenConstraintDemotion => "edcd",
            Algorithm::GradualLearning => "gla",
            Algorithm::MaxEnt => "maxent",
            Algorithm::HarmonicGrammar => "hg",
        }
    }

    /// Returns true if the algorithm learns a numeric table besides the order.
    pub fn is_weighted(self) -> bool {
        matches!(
            self,
            Algorithm::GradualLearning | Algorithm::MaxEnt | Algorithm::HarmonicGrammar
        )
    }
}

impl FromStr for Algorithm {
    type Err = OptimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cd" | "ot" | "constraint_demotion" => Ok(Algorithm::ConstraintDemotion),
            "rcd" | "recursive_constraint_demotion" => Ok(Algorithm::RecursiveConstraintDemotion),
            "edcd" | "error_driven_constraint_demotion" => {
                Ok(Algorithm::ErrorDrivenConstraintDemotion)
            }
            "gla" | "gradual_learning" => Ok(Algorithm::GradualLearning),
            "maxent" | "max_ent" => Ok(Algorithm::MaxEnt),
            "hg" | "harmonic_grammar" => Ok(Algorithm::HarmonicGrammar),
            _ => Err(OptimalError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
