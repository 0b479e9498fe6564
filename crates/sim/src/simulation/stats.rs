//! Per-generation statistics and caller-side sampling.
//!
//! The engine exposes a [`GenerationStats`] snapshot after every step. It
//! never stores them itself: a caller that wants a fitness curve decides
//! which generations to keep with a [`RecordingStrategy`] and appends them to
//! a [`FitnessHistory`].

use serde::{Deserialize, Serialize};

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    /// Fitness of the best individual in the current population
    pub best_fitness: f64,
    /// Fitness of the best individual seen in any generation so far
    pub best_ever_fitness: f64,
    /// Mean fitness of the current population
    pub average_fitness: f64,
}

/// Strategy for choosing which generations to sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordingStrategy {
    /// Record every N generations.
    EveryN(usize),

    /// Record at specific generations.
    Specific(Vec<usize>),

    /// Record all generations.
    All,

    /// No recording.
    None,
}

impl RecordingStrategy {
    /// Check if generation should be recorded.
    ///
    /// `EveryN(0)` records nothing.
    pub fn should_record(&self, generation: usize) -> bool {
        match self {
            Self::EveryN(0) => false,
            Self::EveryN(n) => generation % n == 0,
            Self::Specific(gens) => gens.contains(&generation),
            Self::All => true,
            Self::None => false,
        }
    }
}

impl Default for RecordingStrategy {
    fn default() -> Self {
        Self::EveryN(10)
    }
}

/// Ordered fitness samples collected by a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessHistory {
    samples: Vec<GenerationStats>,
}

impl FitnessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample.
    pub fn record(&mut self, stats: GenerationStats) {
        self.samples.push(stats);
    }

    /// Append `stats` only if `strategy` selects its generation.
    ///
    /// Returns whether the sample was kept.
    pub fn record_with(&mut self, strategy: &RecordingStrategy, stats: GenerationStats) -> bool {
        if strategy.should_record(stats.generation) {
            self.record(stats);
            return true;
        }
        false
    }

    pub fn samples(&self) -> &[GenerationStats] {
        &self.samples
    }

    pub fn last(&self) -> Option<&GenerationStats> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(generation: usize) -> GenerationStats {
        GenerationStats {
            generation,
            best_fitness: 50.0,
            best_ever_fitness: 60.0,
            average_fitness: 20.0,
        }
    }

    #[test]
    fn test_recording_strategy_every_n() {
        let strategy = RecordingStrategy::EveryN(10);
        assert!(strategy.should_record(0));
        assert!(!strategy.should_record(5));
        assert!(strategy.should_record(10));
        assert!(strategy.should_record(30));
    }

    #[test]
    fn test_recording_strategy_every_zero() {
        let strategy = RecordingStrategy::EveryN(0);
        assert!(!strategy.should_record(0));
        assert!(!strategy.should_record(10));
    }

    #[test]
    fn test_recording_strategy_variants() {
        assert!(RecordingStrategy::All.should_record(7));
        assert!(!RecordingStrategy::None.should_record(0));

        let specific = RecordingStrategy::Specific(vec![1, 4]);
        assert!(specific.should_record(4));
        assert!(!specific.should_record(2));
    }

    #[test]
    fn test_history_record_with() {
        let mut history = FitnessHistory::new();
        let strategy = RecordingStrategy::default();

        for generation in 0..=25 {
            history.record_with(&strategy, stats(generation));
        }

        let generations: Vec<usize> = history.samples().iter().map(|s| s.generation).collect();
        assert_eq!(generations, vec![0, 10, 20]);
        assert_eq!(history.last().unwrap().generation, 20);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_history_empty() {
        let history = FitnessHistory::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }
}
