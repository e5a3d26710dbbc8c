//! Shared test fixtures for Optimal crates.
//!
//! This crate provides ready-made grammars for testing learners.
//!
//! - [`syllables`] - coda resolution and onset grammars with consistent evidence
//! - [`conflict`] - grammars whose evidence cannot be satisfied by any ranking
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! optimal-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use optimal_test::syllables::pat_grammar;
//! ```

pub mod conflict;
pub mod syllables;

pub use conflict::{contradictory_grammar, tied_grammar};
pub use syllables::{onset_grammar, pat_grammar, two_constraint_grammar};

use optimal_core::{Constraint, Example};

/// Builds constraints from names.
pub fn constraints(names: &[&str]) -> Vec<Constraint> {
    names.iter().copied().map(Constraint::new).collect()
}

/// Builds an example from `(constraint, count)` pairs.
pub fn example(input: &str, output: &str, optimal: bool, violations: &[(&str, u32)]) -> Example {
    violations
        .iter()
        .fold(Example::new(input, output, optimal), |e, &(name, count)| {
            e.with_violation(name, count)
        })
}
