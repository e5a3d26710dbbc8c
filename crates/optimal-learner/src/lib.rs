//! Optimal Learner Engine
//!
//! This crate provides the constraint-ranking learners:
//! - Constraint Demotion, Recursive and Error-Driven Constraint Demotion
//! - The Gradual Learning Algorithm
//! - Maximum-entropy and Harmonic Grammar weight learners
//! - Learning scope, statistics and termination conditions
//! - The [`LearnerKind`] facade and configuration wiring (builder module)

pub mod builder;
pub mod demotion;
pub mod error_driven;
pub mod evaluation;
pub mod facade;
pub mod gradual;
pub mod harmonic;
pub mod learner;
pub mod maxent;
pub mod noise;
pub mod recursive;
pub mod scope;
pub mod stats;
pub mod termination;

pub use builder::LearnerBuilder;
pub use demotion::ConstraintDemotionLearner;
pub use error_driven::ErrorDrivenLearner;
pub use evaluation::{best_by_harmony, evaluate_ot, predict_ot, OtEvaluation};
pub use facade::{train, LearnerKind};
pub use gradual::GradualLearner;
pub use harmonic::HarmonicGrammarLearner;
pub use learner::{Learner, WeightedLearner};
pub use maxent::MaxEntLearner;
pub use noise::GaussianNoise;
pub use recursive::RecursiveConstraintDemotionLearner;
pub use scope::LearningScope;
pub use stats::LearningStats;
pub use termination::{
    ErrorFreeTermination, IterationLimitTermination, Termination, WeightChangeTermination,
};

#[cfg(test)]
mod test_utils;
