//! Recombination (crossover) between two parent genomes.
//!
//! Mating first samples a [`RecombinationType`] event: with probability
//! `crossover_rate` a single cut position is drawn uniformly from
//! `[0, length)`, otherwise the parents pass through unchanged. Applying a
//! crossover at cut `c` produces two complementary children:
//!
//! ```text
//! parent1: AAAA|AAAA      child1: AAAA|BBBB
//! parent2: BBBB|BBBB  ->  child2: BBBB|AAAA
//! ```
//!
//! Children always come back unscored, even for pass-through events, because
//! they are mutated before the next evaluation pass.

pub use crate::errors::RecombinationError;
use crate::genome::Individual;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of sampling a mating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecombinationType {
    /// Children are copies of the parents.
    None,
    /// Single-point crossover at `position`.
    Crossover { position: usize },
}

/// Single-point crossover applied with a fixed per-mating probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SinglePointCrossover {
    rate: f64,
}

impl SinglePointCrossover {
    /// Create a crossover operator applied with probability `rate` per mating.
    pub fn new(rate: f64) -> Result<Self, RecombinationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(RecombinationError::InvalidProbability("crossover_rate", rate));
        }
        Ok(Self { rate })
    }

    /// Probability that a mating performs crossover.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Sample the event for one mating of genomes of `length` characters.
    ///
    /// Zero-length genomes never cross over.
    pub fn sample_event<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> RecombinationType {
        if length == 0 || rng.random::<f64>() >= self.rate {
            return RecombinationType::None;
        }
        RecombinationType::Crossover {
            position: rng.random_range(0..length),
        }
    }

    /// Apply a sampled event to a pair of parents.
    pub fn apply(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        event: RecombinationType,
    ) -> Result<(Individual, Individual), RecombinationError> {
        match event {
            RecombinationType::None => Ok((
                Individual::new(parent1.genes().to_vec()),
                Individual::new(parent2.genes().to_vec()),
            )),
            RecombinationType::Crossover { position } => self.crossover(parent1, parent2, position),
        }
    }

    /// Sample an event and apply it.
    pub fn breed<R: Rng + ?Sized>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Result<(Individual, Individual), RecombinationError> {
        let event = self.sample_event(parent1.len(), rng);
        self.apply(parent1, parent2, event)
    }

    /// Perform single-point crossover at `position`.
    ///
    /// Child 1 takes `parent1[..position]` followed by `parent2[position..]`;
    /// child 2 is the complementary recombination.
    ///
    /// # Errors
    /// Returns an error if the parents differ in length or `position` lies
    /// beyond the end of the genomes.
    pub fn crossover(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        position: usize,
    ) -> Result<(Individual, Individual), RecombinationError> {
        let (genes1, genes2) = (parent1.genes(), parent2.genes());

        if genes1.len() != genes2.len() {
            return Err(RecombinationError::LengthMismatch {
                len1: genes1.len(),
                len2: genes2.len(),
            });
        }
        if position > genes1.len() {
            return Err(RecombinationError::InvalidPosition {
                position,
                length: genes1.len(),
            });
        }

        let mut child1 = Vec::with_capacity(genes1.len());
        child1.extend_from_slice(&genes1[..position]);
        child1.extend_from_slice(&genes2[position..]);

        let mut child2 = Vec::with_capacity(genes2.len());
        child2.extend_from_slice(&genes2[..position]);
        child2.extend_from_slice(&genes1[position..]);

        Ok((Individual::new(child1), Individual::new(child2)))
    }
}

impl Default for SinglePointCrossover {
    fn default() -> Self {
        Self { rate: 0.8 }
    }
}
