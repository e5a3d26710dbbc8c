//! Optimal Core - Core types for constraint-ranking learning
//!
//! This crate provides the data model shared by every learner:
//! - [`Constraint`] identities compared by name
//! - [`Example`] violation profiles and [`CompetitionSet`]s
//! - [`Grammar`] bundles of constraints and labeled examples
//! - [`PartialOrder`] dominance graphs with stratification
//! - The closed [`Algorithm`] selector

pub mod algorithm;
pub mod constraint;
pub mod error;
pub mod example;
pub mod grammar;
pub mod order;


pub use algorithm::Algorithm;
pub use constraint::Constraint;
pub use error::{OptimalError, Result};
pub use example::{Example, Violations, WeightTable};
pub use grammar::{CompetitionSet, Grammar, WinnerLoserPair};
pub use order::PartialOrder;
