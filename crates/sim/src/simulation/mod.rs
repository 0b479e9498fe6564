//! Evolution engine and population management.
//!
//! Re-exports
//!
//! - `Engine`: runs generations and orchestrates selection, crossover and
//!   mutation toward a target string.
//! - `EngineBuilder`: fluent builder for constructing `Engine` instances.
//! - `Population`: one generation of individuals, kept sorted by fitness.
//! - `GaConfig`: the serializable parameter record an engine is built from.
//! - `GenerationStats`, `FitnessHistory`, `RecordingStrategy`: fitness
//!   snapshots and caller-side sampling of them.

pub mod builder;
pub mod engine;
pub mod parameters;
pub mod population;
pub mod stats;

pub use builder::EngineBuilder;
pub use engine::Engine;
pub use parameters::{
    DEFAULT_CROSSOVER_RATE, DEFAULT_ELITISM_COUNT, DEFAULT_MUTATION_RATE,
    DEFAULT_POPULATION_SIZE, DEFAULT_TOURNAMENT_SIZE, GaConfig,
};
pub use population::Population;
pub use stats::{FitnessHistory, GenerationStats, RecordingStrategy};
