//! Configuration system for Optimal.
//!
//! Load learner configuration from TOML or YAML to pick an algorithm and
//! tune its parameters without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use optimal_config::LearnerConfig;
//! use optimal_core::Algorithm;
//!
//! let config = LearnerConfig::from_toml_str(r#"
//!     algorithm = "gradual_learning"
//!     random_seed = 7
//!
//!     [termination]
//!     iteration_limit = 500
//!
//!     [gla]
//!     plasticity = 1.0
//! "#).unwrap();
//!
//! assert_eq!(config.algorithm, Algorithm::GradualLearning);
//! assert_eq!(config.iteration_limit(), 500);
//! assert_eq!(config.gla.plasticity, 1.0);
//! assert_eq!(config.gla.noise, 2.0);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use optimal_config::LearnerConfig;
//!
//! let config = LearnerConfig::load("learner.toml").unwrap_or_default();
//! assert_eq!(config.iteration_limit(), 1000);
//! ```

use std::path::Path;

use optimal_core::{Algorithm, OptimalError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Iteration cap shared by every iterative learner.
pub const DEFAULT_ITERATION_LIMIT: u64 = 1000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for OptimalError {
    fn from(err: ConfigError) -> Self {
        OptimalError::Config(err.to_string())
    }
}

/// Main learner configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LearnerConfig {
    /// Learning algorithm to run.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Random seed for reproducible stochastic learning.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Gradual Learning Algorithm parameters.
    #[serde(default)]
    pub gla: GlaConfig,

    /// Maximum-entropy parameters.
    #[serde(default)]
    pub maxent: MaxEntConfig,

    /// Harmonic Grammar parameters.
    #[serde(default)]
    pub hg: HgConfig,
}

impl LearnerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or holds
    /// out-of-range parameters.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the learning algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the iteration cap.
    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            iteration_limit: Some(limit),
        });
        self
    }

    /// Returns the configured iteration cap, or the default of 1000.
    pub fn iteration_limit(&self) -> u64 {
        self.termination
            .as_ref()
            .and_then(|t| t.iteration_limit)
            .unwrap_or(DEFAULT_ITERATION_LIMIT)
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        };
        let non_negative = |name: &str, value: f64| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative, got {value}"
                )))
            }
        };

        positive("gla.plasticity", self.gla.plasticity)?;
        non_negative("gla.noise", self.gla.noise)?;
        if !self.gla.initial_value.is_finite() {
            return Err(ConfigError::Invalid(
                "gla.initial_value must be finite".to_string(),
            ));
        }
        positive("maxent.learning_rate", self.maxent.learning_rate)?;
        non_negative("maxent.tolerance", self.maxent.tolerance)?;
        positive("hg.learning_rate", self.hg.learning_rate)?;
        non_negative("hg.epsilon", self.hg.epsilon)?;
        Ok(())
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of passes over the data.
    pub iteration_limit: Option<u64>,
}

/// Gradual Learning Algorithm parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GlaConfig {
    /// Step size of each promotion or demotion.
    pub plasticity: f64,

    /// Standard deviation of the evaluation noise.
    pub noise: f64,

    /// Starting ranking value of every constraint.
    pub initial_value: f64,
}

impl Default for GlaConfig {
    fn default() -> Self {
        Self {
            plasticity: 2.0,
            noise: 2.0,
            initial_value: 100.0,
        }
    }
}

/// Maximum-entropy parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MaxEntConfig {
    /// Gradient step size.
    pub learning_rate: f64,

    /// Stop once the summed absolute weight change of a pass falls below this.
    pub tolerance: f64,
}

impl Default for MaxEntConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            tolerance: 0.001,
        }
    }
}

/// Harmonic Grammar parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HgConfig {
    /// Perceptron step size.
    pub learning_rate: f64,

    /// Weights closer than this share a stratum.
    pub epsilon: f64,
}

impl Default for HgConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epsilon: 0.01,
        }
    }
}
