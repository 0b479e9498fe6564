//! Evolution module providing mutation, recombination, and selection.
//!
//! This module implements the genetic operators used by the engine:
//! - **Mutation**: per-character uniform resampling from the alphabet
//! - **Recombination**: single-point crossover between two parents
//! - **Selection**: target-match fitness and tournament selection

pub mod mutation;
pub mod recombination;
pub mod selection;

pub use mutation::UniformMutation;
pub use recombination::{RecombinationType, SinglePointCrossover};
pub use selection::{IndividualFitness, TargetMatchFitness, TournamentSelection, match_percentage};
