//! Population management and operations.
//!
//! This module provides the container for one generation of individuals.

use crate::evolution::IndividualFitness;
use crate::genome::Individual;
use rayon::prelude::*;

/// One generation of candidate strings.
///
/// After [`Population::evaluate`] the individuals are ordered by descending
/// fitness, so index 0 holds the best member and the first `k` entries are
/// the top-`k` elites.
#[derive(Debug, Clone, Default)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Generation counter
    generation: usize,
}

impl Population {
    /// Create a new population from individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter.
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Replace the entire population with new individuals.
    pub fn set_individuals(&mut self, individuals: Vec<Individual>) {
        self.individuals = individuals;
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// The first individual; the fittest one once the population is evaluated.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// The first `count` individuals, clamped to the population size.
    pub fn elites(&self, count: usize) -> &[Individual] {
        &self.individuals[..count.min(self.individuals.len())]
    }

    /// Arithmetic mean of the cached fitness values, 0 for an empty population.
    pub fn average_fitness(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.individuals.iter().map(Individual::fitness).sum();
        sum / self.individuals.len() as f64
    }

    /// Rescore every individual in parallel, then sort by descending fitness.
    ///
    /// Scoring is independent per individual; the sort runs only after all
    /// scores are in.
    pub fn evaluate<F: IndividualFitness + Sync>(&mut self, fitness: &F) {
        self.individuals = self
            .individuals
            .par_iter()
            .map(|ind| fitness.evaluate(ind))
            .collect();
        self.sort_by_fitness();
    }

    /// Stable sort by descending cached fitness.
    pub fn sort_by_fitness(&mut self) {
        self.individuals
            .sort_by(|a, b| b.fitness_value().total_cmp(&a.fitness_value()));
    }
}
