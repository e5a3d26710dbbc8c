//! Violation profiles.

use std::collections::BTreeMap;
use std::fmt;

/// Sparse violation vector keyed by constraint name. Absent entries mean zero.
pub type Violations = BTreeMap<String, u32>;

/// Numeric table keyed by constraint name (weights or ranking values).
pub type WeightTable = BTreeMap<String, f64>;

/// One input/output pairing with its optimality label and violation counts.
///
/// # Example
///
/// ```
/// use optimal_core::Example;
///
/// let winner = Example::new("/pat/", "pa.ta", true).with_violation("DEP", 1);
/// assert_eq!(winner.violation("DEP"), 1);
/// assert_eq!(winner.violation("MAX"), 0);
/// assert_eq!(winner.to_string(), "/pat/ → pa.ta");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Example {
    #[cfg_attr(feature = "serde", serde(rename = "input"))]
    input_form: String,
    #[cfg_attr(feature = "serde", serde(rename = "output"))]
    output_form: String,
    #[cfg_attr(feature = "serde", serde(default))]
    optimal: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    violations: Violations,
}

impl Example {
    pub fn new(input_form: impl Into<String>, output_form: impl Into<String>, optimal: bool) -> Self {
        Self {
            input_form: input_form.into(),
            output_form: output_form.into(),
            optimal,
            violations: Violations::new(),
        }
    }

    /// Creates an example from an existing violation map.
    pub fn with_violations(
        input_form: impl Into<String>,
        output_form: impl Into<String>,
        optimal: bool,
        violations: Violations,
    ) -> Self {
        Self {
            input_form: input_form.into(),
            output_form: output_form.into(),
            optimal,
            violations,
        }
    }

    /// Records `count` violations of `constraint`.
    pub fn with_violation(mut self, constraint: impl Into<String>, count: u32) -> Self {
        self.violations.insert(constraint.into(), count);
        self
    }

    pub fn input_form(&self) -> &str {
        &self.input_form
    }

    pub fn output_form(&self) -> &str {
        &self.output_form
    }

    pub fn is_optimal(&self) -> bool {
        self.optimal
    }

    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// Violation count for a constraint, zero when unassigned.
    pub fn violation(&self, constraint: &str) -> u32 {
        self.violations.get(constraint).copied().unwrap_or(0)
    }

    /// Negative weighted sum of the assigned violations.
    ///
    /// Constraints missing from `weights` contribute nothing.
    pub fn harmony(&self, weights: &WeightTable) -> f64 {
        self.violations
            .iter()
            .map(|(name, &count)| weights.get(name).copied().unwrap_or(0.0) * f64::from(count))
            .fold(0.0, |harmony, penalty| harmony - penalty)
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.input_form, self.output_form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_violation_is_zero() {
        let e = Example::new("/ta/", "ta", true);
        assert_eq!(e.violation("ONSET"), 0);
        assert!(e.violations().is_empty());
    }

    #[test]
    fn test_harmony() {
        let e = Example::new("/pat/", "pat", false)
            .with_violation("NOCODA", 2)
            .with_violation("MAX", 1);
        let weights: WeightTable = [("NOCODA".to_string(), 1.5), ("MAX".to_string(), 0.5)]
            .into_iter()
            .collect();
        assert_eq!(e.harmony(&weights), -3.5);
    }

    #[test]
    fn test_harmony_ignores_unweighted_constraints() {
        let e = Example::new("/pat/", "pat", false).with_violation("UNKNOWN", 4);
        assert_eq!(e.harmony(&WeightTable::new()), 0.0);
    }
}
