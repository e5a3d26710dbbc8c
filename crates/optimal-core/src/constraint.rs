//! Core constraint types.
//!
//! A constraint is identified by its name alone. Descriptions and display
//! overrides are presentation data and never take part in equality or hashing.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A named well-formedness constraint.
///
/// # Example
///
/// ```
/// use optimal_core::Constraint;
///
/// let max = Constraint::new("MAX").with_description("Do not delete segments");
/// assert_eq!(max, Constraint::new("MAX"));
/// assert_eq!(max.to_string(), "MAX");
///
/// let ident = Constraint::new("IDENT-IO").with_display("Ident-IO(voice)");
/// assert_eq!(ident.to_string(), "Ident-IO(voice)");
/// assert_eq!(ident.name(), "IDENT-IO");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    display: Option<String>,
}

impl Constraint {
    /// Creates a constraint with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            display: None,
        }
    }

    /// Attaches a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides how the constraint is displayed.
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the display override, falling back to the name.
    pub fn display_name(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.name)
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Constraint {}

impl Hash for Constraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
