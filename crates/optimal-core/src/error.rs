//! Error types for Optimal

use thiserror::Error;

/// Main error type for Optimal operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptimalError {
    /// Algorithm selector outside the supported set
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A constraint name that the grammar or order does not declare
    #[error("Unknown constraint: {0}")]
    UnknownConstraint(String),

    /// Adding the edge would make the dominance relation cyclic
    #[error("Dominance {higher} >> {lower} would create a cycle")]
    CyclicDominance { higher: String, lower: String },

    /// Error in learner configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Optimal operations
pub type Result<T> = std::result::Result<T, OptimalError>;
