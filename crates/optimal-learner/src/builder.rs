//! Builder module for constructing learners from configuration
//!
//! This module provides the wiring between [`LearnerConfig`] and the
//! learner implementations.

use optimal_config::LearnerConfig;
use optimal_core::Algorithm;

use crate::demotion::ConstraintDemotionLearner;
use crate::error_driven::ErrorDrivenLearner;
use crate::facade::LearnerKind;
use crate::gradual::GradualLearner;
use crate::harmonic::HarmonicGrammarLearner;
use crate::maxent::MaxEntLearner;
use crate::recursive::RecursiveConstraintDemotionLearner;

/// Builder for constructing learners from configuration.
pub struct LearnerBuilder;

impl LearnerBuilder {
    /// Builds the learner selected by `config.algorithm`.
    ///
    /// Only the parameter section of the selected algorithm is read. The
    /// iteration limit applies to every iterative learner.
    pub fn build(config: &LearnerConfig) -> LearnerKind {
        let limit = config.iteration_limit();
        match config.algorithm {
            Algorithm::ConstraintDemotion => {
                LearnerKind::ConstraintDemotion(ConstraintDemotionLearner::new())
            }
            Algorithm::RecursiveConstraintDemotion => {
                LearnerKind::RecursiveConstraintDemotion(RecursiveConstraintDemotionLearner::new())
            }
            Algorithm::ErrorDrivenConstraintDemotion => {
                LearnerKind::ErrorDriven(ErrorDrivenLearner::new().with_iteration_limit(limit))
            }
            Algorithm::GradualLearning => {
                let learner = match config.random_seed {
                    Some(seed) => GradualLearner::with_seed(seed),
                    None => GradualLearner::new(),
                };
                LearnerKind::Gradual(
                    learner
                        .with_plasticity(config.gla.plasticity)
                        .with_noise(config.gla.noise)
                        .with_initial_value(config.gla.initial_value)
                        .with_iteration_limit(limit),
                )
            }
            Algorithm::MaxEnt => LearnerKind::MaxEnt(
                MaxEntLearner::new()
                    .with_learning_rate(config.maxent.learning_rate)
                    .with_tolerance(config.maxent.tolerance)
                    .with_iteration_limit(limit),
            ),
            Algorithm::HarmonicGrammar => LearnerKind::HarmonicGrammar(
                HarmonicGrammarLearner::new()
                    .with_learning_rate(config.hg.learning_rate)
                    .with_epsilon(config.hg.epsilon)
                    .with_iteration_limit(limit),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::pat_grammar;

    #[test]
    fn test_builder_follows_algorithm() {
        for algorithm in Algorithm::ALL {
            let config = LearnerConfig::new().with_algorithm(algorithm);
            assert_eq!(LearnerBuilder::build(&config).algorithm(), algorithm);
        }
    }

    #[test]
    fn test_builder_gla_parameters() {
        let mut config = LearnerConfig::new()
            .with_algorithm(Algorithm::GradualLearning)
            .with_random_seed(7)
            .with_iteration_limit(50);
        config.gla.plasticity = 0.5;
        config.gla.noise = 0.0;

        let LearnerKind::Gradual(learner) = LearnerBuilder::build(&config) else {
            panic!("expected a GLA learner");
        };
        assert_eq!(learner.plasticity(), 0.5);
        assert!(learner.noise().is_silent());
        assert_eq!(learner.initial_value(), 100.0);
        assert_eq!(learner.iteration_limit(), 50);
    }

    #[test]
    fn test_builder_seed_is_reproducible() {
        let config = LearnerConfig::new()
            .with_algorithm(Algorithm::GradualLearning)
            .with_random_seed(11)
            .with_iteration_limit(200);
        let grammar = pat_grammar();

        let mut first = LearnerBuilder::build(&config);
        let mut second = LearnerBuilder::build(&config);
        first.learn(&grammar).unwrap();
        second.learn(&grammar).unwrap();

        assert_eq!(first.values(), second.values());
    }

    #[test]
    fn test_builder_hg_and_maxent_parameters() {
        let mut config = LearnerConfig::new()
            .with_algorithm(Algorithm::HarmonicGrammar)
            .with_iteration_limit(10);
        config.hg.epsilon = 0.5;

        let LearnerKind::HarmonicGrammar(hg) = LearnerBuilder::build(&config) else {
            panic!("expected an HG learner");
        };
        assert_eq!(hg.epsilon(), 0.5);
        assert_eq!(hg.iteration_limit(), 10);

        config.algorithm = Algorithm::MaxEnt;
        config.maxent.tolerance = 0.25;
        let LearnerKind::MaxEnt(maxent) = LearnerBuilder::build(&config) else {
            panic!("expected a MaxEnt learner");
        };
        assert_eq!(maxent.tolerance(), 0.25);
        assert_eq!(maxent.learning_rate(), 0.1);
    }
}
