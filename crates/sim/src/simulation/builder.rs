//! Builder pattern for creating engines.
//!
//! Provides a fluent API over [`GaConfig`]: every parameter starts at its
//! default, and validation happens once in [`EngineBuilder::build`].

use crate::base::Alphabet;
use crate::errors::EngineError;
use crate::simulation::{Engine, GaConfig};

/// Builder for constructing [`Engine`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use phrasevo_sim::simulation::EngineBuilder;
///
/// // Defaults, uninitialized
/// let engine = EngineBuilder::new().seed(42).build().unwrap();
/// assert!(!engine.is_initialized());
///
/// // Tuned and ready to evolve
/// let mut engine = EngineBuilder::new()
///     .population_size(100)
///     .mutation_rate(0.02)
///     .elitism_count(4)
///     .target("SOME ARE BORN GREAT")
///     .seed(42)
///     .build()
///     .unwrap();
/// engine.evolve().unwrap();
/// assert_eq!(engine.generation(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: GaConfig,
    // Parsed in build() so errors surface in one place
    alphabet: Option<String>,
    target: Option<String>,
}

impl EngineBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self.alphabet = None;
        self
    }

    /// Set the population size (default: 200).
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the per-character mutation rate (default: 0.01).
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.mutation_rate = rate;
        self
    }

    /// Set the per-mating crossover rate (default: 0.8).
    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.config.crossover_rate = rate;
        self
    }

    /// Set the number of elites (default: 2).
    pub fn elitism_count(mut self, count: usize) -> Self {
        self.config.elitism_count = count;
        self
    }

    /// Set the tournament size (default: 5).
    pub fn tournament_size(mut self, size: usize) -> Self {
        self.config.tournament_size = size;
        self
    }

    /// Set the gene alphabet from its characters (default: A-Z and space).
    pub fn alphabet(mut self, chars: impl Into<String>) -> Self {
        self.alphabet = Some(chars.into());
        self
    }

    /// Initialize the engine toward `target` as part of `build`.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the random seed for reproducibility (default: None = random).
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build and validate the engine.
    ///
    /// When a target was given the engine is returned already initialized.
    pub fn build(self) -> Result<Engine, EngineError> {
        let mut config = self.config;
        if let Some(chars) = self.alphabet {
            config.alphabet = chars.parse::<Alphabet>()?;
        }

        let mut engine = Engine::new(config)?;
        if let Some(target) = self.target {
            engine.initialize(&target)?;
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn test_builder_defaults() {
        let engine = EngineBuilder::new().build().unwrap();
        assert_eq!(engine.config(), &GaConfig::default());
        assert!(!engine.is_initialized());
    }

    #[test]
    fn test_builder_sets_every_parameter() {
        let engine = EngineBuilder::new()
            .population_size(10)
            .mutation_rate(0.2)
            .crossover_rate(0.5)
            .elitism_count(1)
            .tournament_size(2)
            .alphabet("XYZ")
            .seed(9)
            .build()
            .unwrap();

        let config = engine.config();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.mutation_rate, 0.2);
        assert_eq!(config.crossover_rate, 0.5);
        assert_eq!(config.elitism_count, 1);
        assert_eq!(config.tournament_size, 2);
        assert_eq!(config.alphabet.to_string(), "XYZ");
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_builder_with_target_initializes() {
        let engine = EngineBuilder::new()
            .population_size(8)
            .target("HELLO")
            .seed(1)
            .build()
            .unwrap();

        assert!(engine.is_initialized());
        assert_eq!(engine.target(), "HELLO");
        assert_eq!(engine.population().size(), 8);
    }

    #[test]
    fn test_builder_from_config_then_override() {
        let base = GaConfig {
            population_size: 64,
            ..Default::default()
        };
        let engine = EngineBuilder::new()
            .config(base)
            .tournament_size(9)
            .build()
            .unwrap();

        assert_eq!(engine.config().population_size, 64);
        assert_eq!(engine.config().tournament_size, 9);
    }

    #[test]
    fn test_builder_invalid_parameters() {
        assert_eq!(
            EngineBuilder::new().alphabet("").build().unwrap_err(),
            EngineError::Config(ConfigError::EmptyAlphabet)
        );
        assert_eq!(
            EngineBuilder::new().mutation_rate(2.0).build().unwrap_err(),
            EngineError::Config(ConfigError::InvalidProbability("mutation_rate", 2.0))
        );
        assert_eq!(
            EngineBuilder::new().tournament_size(0).build().unwrap_err(),
            EngineError::Config(ConfigError::InvalidTournamentSize(0))
        );
        assert_eq!(
            EngineBuilder::new().target("").build().unwrap_err(),
            EngineError::EmptyTarget
        );
    }
}
