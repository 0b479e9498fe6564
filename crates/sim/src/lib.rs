//! # Simulation Crate
//!
//! The `sim` crate provides a generational genetic algorithm that evolves
//! random strings toward a fixed target. It includes modules for the gene
//! alphabet and fitness scale, individuals, the evolutionary operators
//! (mutation, crossover, tournament selection), and the engine that drives
//! them one generation at a time.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod simulation;
pub mod prelude;

pub use base::{Alphabet, FitnessValue};
