//! Configuration-driven entry point.

use std::path::Path;

use optimal_config::LearnerConfig;
use optimal_core::{Grammar, PartialOrder, Result, WeightTable};
use optimal_learner::{LearnerBuilder, LearningStats};

/// Everything a learning run produces.
#[derive(Debug, Clone)]
pub struct LearningOutcome {
    pub order: PartialOrder,
    /// Ranking values or weights, for the numeric learners.
    pub values: Option<WeightTable>,
    pub stats: LearningStats,
}

/// Learns a ranking for `grammar` with the learner `config` selects.
///
/// # Errors
///
/// Out-of-range parameters surface as [`OptimalError::Config`](optimal_core::OptimalError::Config).
pub fn run_learner(grammar: &Grammar, config: &LearnerConfig) -> Result<LearningOutcome> {
    #[cfg(feature = "console")]
    optimal_console::init();

    config.validate()?;
    let mut learner = LearnerBuilder::build(config);
    let order = learner.learn(grammar)?;

    Ok(LearningOutcome {
        order,
        values: learner.values(),
        stats: learner.stats().clone(),
    })
}

/// Loads a TOML or YAML configuration and runs the selected learner.
///
/// Files ending in `.yaml` or `.yml` are read as YAML, anything else as TOML.
///
/// # Errors
///
/// Configuration failures surface as [`OptimalError::Config`](optimal_core::OptimalError::Config).
pub fn run_learner_from_file(
    grammar: &Grammar,
    path: impl AsRef<Path>,
) -> Result<LearningOutcome> {
    let path = path.as_ref();
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let config = if is_yaml {
        LearnerConfig::from_yaml_file(path)?
    } else {
        LearnerConfig::from_toml_file(path)?
    };
    run_learner(grammar, &config)
}
