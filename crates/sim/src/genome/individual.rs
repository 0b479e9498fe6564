use crate::base::{Alphabet, FitnessValue};
use crate::errors::GenomeError;
use crate::evolution::match_percentage;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A candidate string together with its cached fitness.
///
/// Genes are stored in an `Arc<[char]>`, so cloning an individual (for elite
/// carry-over, tournament winners or the best-ever snapshot) never copies the
/// genome. Genes are never modified after construction: scoring and mutation
/// return new `Individual` values instead.
///
/// A fitness of `None` means the genome has not been scored against the
/// current target yet; [`Individual::fitness`] reads such an individual as 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Arc<[char]>,
    fitness: Option<FitnessValue>,
}

impl Individual {
    /// Create an unscored individual from a gene sequence.
    pub fn new(genes: impl Into<Arc<[char]>>) -> Self {
        Self {
            genes: genes.into(),
            fitness: None,
        }
    }

    /// Create an individual with an already known fitness.
    pub fn with_fitness(genes: impl Into<Arc<[char]>>, fitness: impl Into<FitnessValue>) -> Self {
        Self {
            genes: genes.into(),
            fitness: Some(fitness.into()),
        }
    }

    /// Generate `length` genes, each drawn independently and uniformly from
    /// `alphabet`. The result is unscored.
    pub fn create_random<R: Rng + ?Sized>(
        length: usize,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<Self, GenomeError> {
        if length == 0 {
            return Err(GenomeError::EmptyGenome);
        }

        let genes: Vec<char> = (0..length).map(|_| alphabet.sample(rng)).collect();
        Ok(Self::new(genes))
    }

    /// Score this genome against `target` and return the scored individual.
    ///
    /// The returned value shares its genes with `self`. Scoring is a pure
    /// function of genes and target, so calling it repeatedly yields the same
    /// fitness.
    pub fn calculate_fitness(&self, target: &[char]) -> Self {
        self.scored(match_percentage(&self.genes, target))
    }

    /// Return a copy carrying `fitness`, sharing genes with `self`.
    pub fn scored(&self, fitness: FitnessValue) -> Self {
        Self {
            genes: Arc::clone(&self.genes),
            fitness: Some(fitness),
        }
    }

    /// Return a copy where each position is, with probability `mutation_rate`,
    /// replaced by a fresh character drawn from `alphabet`.
    ///
    /// The replacement may coincide with the original character. The result
    /// is always unscored.
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        mutation_rate: f64,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Self {
        let genes: Vec<char> = self
            .genes
            .iter()
            .map(|&c| {
                if rng.random::<f64>() < mutation_rate {
                    alphabet.sample(rng)
                } else {
                    c
                }
            })
            .collect();

        Self::new(genes)
    }

    /// Borrow the genes.
    #[inline]
    pub fn genes(&self) -> &[char] {
        &self.genes
    }

    /// Genome length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Fitness as a percentage; 0 when the individual is unscored.
    #[inline]
    pub fn fitness(&self) -> f64 {
        self.fitness_value().get()
    }

    /// Fitness as a [`FitnessValue`]; [`FitnessValue::ZERO`] when unscored.
    #[inline]
    pub fn fitness_value(&self) -> FitnessValue {
        self.fitness.unwrap_or(FitnessValue::ZERO)
    }

    /// Return the cached fitness value, `None` if not yet computed.
    #[inline]
    pub fn cached_fitness(&self) -> Option<FitnessValue> {
        self.fitness
    }

    #[inline]
    pub fn is_scored(&self) -> bool {
        self.fitness.is_some()
    }

    /// Per-position match mask against `target`.
    ///
    /// Positions past the end of the shorter sequence count as mismatches, so
    /// the mask always has the genome's length.
    pub fn matches(&self, target: &[char]) -> Vec<bool> {
        self.genes
            .iter()
            .enumerate()
            .map(|(i, c)| target.get(i) == Some(c))
            .collect()
    }

    /// Genes collected into a `String`.
    pub fn as_string(&self) -> String {
        self.genes.iter().collect()
    }
}

impl From<&str> for Individual {
    fn from(genes: &str) -> Self {
        Self::new(genes.chars().collect::<Vec<_>>())
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.genes.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
