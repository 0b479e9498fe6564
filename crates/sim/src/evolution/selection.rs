//! Fitness scoring and parent selection.
//!
//! ## Fitness
//! An individual's fitness is the percentage of positions whose character
//! equals the target's character at the same position. Only the overlapping
//! prefix is compared, but the denominator is always the target length, so a
//! genome shorter than the target can never reach 100%.
//!
//! ## Tournament selection
//! A tournament draws `size` contenders uniformly at random, with
//! replacement, and the fittest one wins (the first one drawn wins ties).
//! Larger tournaments raise selection pressure: with size 1 selection is
//! uniform, and as the size grows the winner converges on the population's
//! best individual.

use crate::base::FitnessValue;
use crate::errors::ConfigError;
use crate::genome::Individual;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Percentage of positions in `genes` that equal `target` at the same index.
pub fn match_percentage(genes: &[char], target: &[char]) -> FitnessValue {
    let matches = genes
        .iter()
        .zip(target.iter())
        .filter(|(g, t)| g == t)
        .count();
    FitnessValue::from_matches(matches, target.len())
}

/// Trait for scoring the fitness of an individual.
pub trait IndividualFitness {
    /// Compute the fitness of `individual` without consulting its cache.
    fn individual_fitness(&self, individual: &Individual) -> FitnessValue;

    /// Return a copy of `individual` carrying its freshly computed fitness.
    fn evaluate(&self, individual: &Individual) -> Individual {
        individual.scored(self.individual_fitness(individual))
    }
}

/// Fitness as similarity to a fixed target string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMatchFitness {
    target: Arc<[char]>,
}

impl TargetMatchFitness {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect::<Vec<_>>().into(),
        }
    }

    /// Target characters.
    pub fn target(&self) -> &[char] {
        &self.target
    }

    /// Target length in characters.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}

impl IndividualFitness for TargetMatchFitness {
    fn individual_fitness(&self, individual: &Individual) -> FitnessValue {
        match_percentage(individual.genes(), &self.target)
    }
}

/// Tournament selection with replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSelection {
    size: usize,
}

impl TournamentSelection {
    /// Create a tournament with `size` contenders.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidTournamentSize(size));
        }
        Ok(Self { size })
    }

    /// Number of contenders per tournament.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run one tournament over `candidates` and return the winner.
    ///
    /// Returns `None` if `candidates` is empty. Fitness is read from each
    /// individual's cache, so the candidates must already be scored.
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Individual],
        rng: &mut R,
    ) -> Option<&'a Individual> {
        if candidates.is_empty() {
            return None;
        }

        let mut best = &candidates[rng.random_range(0..candidates.len())];
        for _ in 1..self.size {
            let contender = &candidates[rng.random_range(0..candidates.len())];
            if contender.fitness() > best.fitness() {
                best = contender;
            }
        }
        Some(best)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { size: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn scored(genes: &str, fitness: f64) -> Individual {
        Individual::with_fitness(chars(genes), fitness)
    }

    // ===== Fitness =====

    #[test]
    fn test_match_percentage() {
        assert_eq!(match_percentage(&chars("ABCD"), &chars("ABCD")).get(), 100.0);
        assert_eq!(match_percentage(&chars("ABCD"), &chars("ABXY")).get(), 50.0);
        assert_eq!(match_percentage(&chars("A"), &chars("ABCD")).get(), 25.0);
        assert_eq!(match_percentage(&chars("ABCD"), &chars("")), FitnessValue::ZERO);
    }

    #[test]
    fn test_match_percentage_out_of_alphabet_target() {
        // A target position no gene can hold simply never matches
        let score = match_percentage(&chars("AB"), &chars("A!"));
        assert_eq!(score.get(), 50.0);
        assert!(!score.is_perfect());
    }

    #[test]
    fn test_target_match_fitness() {
        let fitness = TargetMatchFitness::new("HELLO");
        assert_eq!(fitness.len(), 5);
        assert!(!fitness.is_empty());

        let ind = Individual::from("HELLX");
        assert_eq!(fitness.individual_fitness(&ind).get(), 80.0);

        let evaluated = fitness.evaluate(&ind);
        assert!(evaluated.is_scored());
        assert_eq!(evaluated.fitness(), 80.0);
    }

    #[test]
    fn test_target_match_fitness_ignores_stale_cache() {
        let fitness = TargetMatchFitness::new("AB");
        let stale = scored("AB", 0.0);
        assert_eq!(fitness.evaluate(&stale).fitness(), 100.0);
    }

    #[test]
    fn test_evaluate_routes_through_individual_fitness() {
        struct LengthFitness;
        impl IndividualFitness for LengthFitness {
            fn individual_fitness(&self, individual: &Individual) -> FitnessValue {
                FitnessValue::new(individual.len() as f64 * 10.0)
            }
        }

        let ind = Individual::from("ABC");
        let evaluated = LengthFitness.evaluate(&ind);
        assert_eq!(evaluated.fitness(), 30.0);
        assert_eq!(evaluated.genes(), ind.genes());
        assert!(!ind.is_scored());
    }

    // ===== Tournament =====

    #[test]
    fn test_tournament_size_validation() {
        assert!(TournamentSelection::new(1).is_ok());
        assert_eq!(
            TournamentSelection::new(0),
            Err(ConfigError::InvalidTournamentSize(0))
        );
    }

    #[test]
    fn test_tournament_empty_candidates() {
        let selection = TournamentSelection::default();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        assert!(selection.select(&[], &mut rng).is_none());
    }

    #[test]
    fn test_tournament_single_candidate() {
        let selection = TournamentSelection::new(3).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let candidates = vec![scored("AB", 50.0)];

        let winner = selection.select(&candidates, &mut rng).unwrap();
        assert_eq!(winner.as_string(), "AB");
    }

    #[test]
    fn test_tournament_size_one_is_uniform() {
        let selection = TournamentSelection::new(1).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let candidates = vec![scored("A", 0.0), scored("B", 100.0)];

        let trials = 10_000;
        let wins_a = (0..trials)
            .filter(|_| selection.select(&candidates, &mut rng).unwrap().genes()[0] == 'A')
            .count();
        let frequency = wins_a as f64 / trials as f64;

        assert!((frequency - 0.5).abs() < 0.03, "Observed {frequency}");
    }

    #[test]
    fn test_tournament_pressure_favors_fit() {
        let candidates: Vec<Individual> = (0..10)
            .map(|i| scored(&i.to_string(), i as f64 * 10.0))
            .collect();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mean_winner = |size: usize, rng: &mut Xoshiro256PlusPlus| {
            let selection = TournamentSelection::new(size).unwrap();
            (0..2_000)
                .map(|_| selection.select(&candidates, rng).unwrap().fitness())
                .sum::<f64>()
                / 2_000.0
        };

        let weak = mean_winner(1, &mut rng);
        let strong = mean_winner(5, &mut rng);
        assert!(strong > weak, "size 5 mean {strong} should beat size 1 mean {weak}");
    }

    #[test]
    fn test_tournament_large_size_finds_best() {
        let selection = TournamentSelection::new(200).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let candidates = vec![scored("LOW", 10.0), scored("TOP", 90.0), scored("MID", 50.0)];

        for _ in 0..20 {
            let winner = selection.select(&candidates, &mut rng).unwrap();
            assert_eq!(winner.as_string(), "TOP");
        }
    }
}
