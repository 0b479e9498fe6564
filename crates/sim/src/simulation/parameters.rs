//! Engine parameters and configuration.
//!
//! [`GaConfig`] is the single record the engine is built from. It can be
//! written to and read from JSON so a run can be reproduced exactly when a
//! seed is included.

use crate::base::Alphabet;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_POPULATION_SIZE: usize = 200;
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;
pub const DEFAULT_CROSSOVER_RATE: f64 = 0.8;
pub const DEFAULT_ELITISM_COUNT: usize = 2;
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;

/// Configuration of a genetic algorithm run.
///
/// Missing fields fall back to their defaults when deserializing, so a JSON
/// document only needs the values it changes:
///
/// ```
/// use phrasevo_sim::simulation::GaConfig;
///
/// let config = GaConfig::from_json(r#"{ "population_size": 50, "seed": 7 }"#).unwrap();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.tournament_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals per generation (> 0)
    pub population_size: usize,
    /// Per-character probability of resampling an offspring gene, in [0, 1]
    pub mutation_rate: f64,
    /// Per-mating probability of single-point crossover, in [0, 1]
    pub crossover_rate: f64,
    /// Number of top individuals copied unchanged into the next generation.
    /// Values above `population_size` are clamped.
    pub elitism_count: usize,
    /// Contenders drawn per tournament (>= 1)
    pub tournament_size: usize,
    /// Characters genes are drawn from
    pub alphabet: Alphabet,
    /// Optional RNG seed for reproducibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            elitism_count: DEFAULT_ELITISM_COUNT,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            alphabet: Alphabet::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Check every parameter against its documented range.
    ///
    /// `elitism_count` is not checked: it is clamped instead, see
    /// [`GaConfig::effective_elitism`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("crossover_rate", self.crossover_rate)?;
        if self.tournament_size == 0 {
            return Err(ConfigError::InvalidTournamentSize(self.tournament_size));
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(())
    }

    /// Number of elites actually carried over: `min(elitism_count, population_size)`.
    pub fn effective_elitism(&self) -> usize {
        self.elitism_count.min(self.population_size)
    }

    /// Return a copy with the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability(name, value));
    }
    Ok(())
}
