//! Genome structures: the candidate strings evolved by the engine.

mod individual;

pub use individual::Individual;
