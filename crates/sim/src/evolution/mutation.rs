//! Mutation operations for genomes.
//!
//! Point mutation is the only source of new characters once the initial
//! population has been drawn: crossover merely recombines what is already
//! present. Each position of an offspring is resampled independently with a
//! fixed probability, and the replacement is drawn uniformly from the
//! configured alphabet (so it may coincide with the original character).

pub use crate::errors::MutationError;
use crate::base::Alphabet;
use crate::genome::Individual;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-character uniform resampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformMutation {
    rate: f64,
}

impl UniformMutation {
    /// Create a mutation operator with the given per-character probability.
    ///
    /// # Errors
    /// Returns [`MutationError::InvalidMutationRate`] unless `rate` is in `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self, MutationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(MutationError::InvalidMutationRate(rate));
        }
        Ok(Self { rate })
    }

    /// Per-character mutation probability.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Produce a mutated, unscored copy of `individual`.
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        individual: &Individual,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Individual {
        individual.mutate(self.rate, alphabet, rng)
    }

    /// Expected number of resampled positions for a genome of `length`.
    pub fn expected_mutations(&self, length: usize) -> f64 {
        self.rate * length as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_uniform_mutation_valid_rates() {
        assert!(UniformMutation::new(0.0).is_ok());
        assert!(UniformMutation::new(0.01).is_ok());
        assert!(UniformMutation::new(1.0).is_ok());
    }

    #[test]
    fn test_uniform_mutation_invalid_rates() {
        assert_eq!(
            UniformMutation::new(-0.1),
            Err(MutationError::InvalidMutationRate(-0.1))
        );
        assert_eq!(
            UniformMutation::new(1.5),
            Err(MutationError::InvalidMutationRate(1.5))
        );
        assert!(UniformMutation::new(f64::NAN).is_err());
    }

    #[test]
    fn test_uniform_mutation_zero_rate() {
        let model = UniformMutation::new(0.0).unwrap();
        let alphabet = Alphabet::default();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let parent = Individual::from("SOME ARE BORN GREAT");

        let child = model.mutate(&parent, &alphabet, &mut rng);
        assert_eq!(child.genes(), parent.genes());
    }

    #[test]
    fn test_uniform_mutation_observed_frequency() {
        // Two-letter alphabet: a resampled position keeps its value half the time,
        // so the observed change frequency is rate / 2.
        let model = UniformMutation::new(0.2).unwrap();
        let alphabet: Alphabet = "AB".parse().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let parent = Individual::from("A".repeat(10_000).as_str());

        let child = model.mutate(&parent, &alphabet, &mut rng);
        let changed = child.genes().iter().filter(|&&c| c != 'A').count();
        let frequency = changed as f64 / 10_000.0;

        assert!(
            (frequency - 0.1).abs() < 0.02,
            "Observed change frequency {frequency} too far from 0.1"
        );
    }

    #[test]
    fn test_expected_mutations() {
        let model = UniformMutation::new(0.01).unwrap();
        assert!((model.expected_mutations(200) - 2.0).abs() < 1e-12);
    }
}
