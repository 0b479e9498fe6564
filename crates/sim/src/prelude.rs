//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use phrasevo_sim::prelude::*;
//!
//! let mut engine = EngineBuilder::new().seed(1).target("HI").build().unwrap();
//! engine.evolve().unwrap();
//! assert_eq!(engine.generation(), 1);
//! ```

pub use crate::errors::{self, ConfigError, EngineError};
pub use crate::base::{Alphabet, FitnessValue};
pub use crate::genome::Individual;
pub use crate::evolution::{SinglePointCrossover, TournamentSelection, UniformMutation};
pub use crate::simulation::{
    Engine, EngineBuilder, FitnessHistory, GaConfig, GenerationStats, Population,
    RecordingStrategy,
};
