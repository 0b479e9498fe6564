//! Generational genetic algorithm engine.
//!
//! The engine owns the current [`Population`], the target, the configuration
//! and the best individual seen so far. Callers drive it explicitly:
//!
//! ```
//! use phrasevo_sim::simulation::{Engine, GaConfig};
//!
//! let config = GaConfig::default().with_seed(42);
//! let mut engine = Engine::new(config).unwrap();
//! engine.initialize("TO BE").unwrap();
//!
//! while !engine.is_complete() && engine.generation() < 5_000 {
//!     engine.evolve().unwrap();
//! }
//! assert!(engine.is_complete());
//! assert_eq!(engine.best_ever().unwrap().as_string(), "TO BE");
//! ```
//!
//! Every operation runs to completion on the calling thread, apart from the
//! fitness pass which fans out over rayon. All randomness comes from one
//! `Xoshiro256PlusPlus` owned by the engine, so a seeded engine replays the
//! same run.

use crate::errors::EngineError;
use crate::evolution::{SinglePointCrossover, TargetMatchFitness, TournamentSelection, UniformMutation};
use crate::genome::Individual;
use crate::simulation::{GaConfig, GenerationStats, Population};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info, instrument, warn};

/// Main evolution engine.
#[derive(Debug)]
pub struct Engine {
    /// Engine configuration
    config: GaConfig,
    mutation: UniformMutation,
    crossover: SinglePointCrossover,
    selection: TournamentSelection,
    /// Target scorer, `None` until `initialize`
    fitness: Option<TargetMatchFitness>,
    target: String,
    /// Current generation, sorted by descending fitness
    population: Population,
    /// Snapshot of the fittest individual seen so far
    best_ever: Option<Individual>,
    /// First generation whose best individual matched the target
    completed_at: Option<usize>,
    /// Random number generator (using Xoshiro256++ for better performance)
    rng: Xoshiro256PlusPlus,
}

impl Engine {
    /// Create an engine from a configuration.
    ///
    /// The RNG is seeded from `config.seed` when present, otherwise from the
    /// thread-local generator.
    pub fn new(config: GaConfig) -> Result<Self, EngineError> {
        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };
        Self::with_rng(config, rng)
    }

    /// Create an engine that draws from the supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: GaConfig, rng: Xoshiro256PlusPlus) -> Result<Self, EngineError> {
        config.validate()?;

        let mutation = UniformMutation::new(config.mutation_rate)?;
        let crossover = SinglePointCrossover::new(config.crossover_rate)?;
        let selection = TournamentSelection::new(config.tournament_size)?;

        if config.elitism_count > config.population_size {
            warn!(
                elitism_count = config.elitism_count,
                population_size = config.population_size,
                "elitism count exceeds population size, clamping"
            );
        }

        Ok(Self {
            config,
            mutation,
            crossover,
            selection,
            fitness: None,
            target: String::new(),
            population: Population::default(),
            best_ever: None,
            completed_at: None,
            rng,
        })
    }

    /// Start a new run toward `target`.
    ///
    /// Draws `population_size` random individuals of the target's length,
    /// scores and sorts them, and snapshots the best one. Any previous run
    /// is discarded and the generation counter restarts at 0.
    ///
    /// # Errors
    /// [`EngineError::EmptyTarget`] if `target` is empty.
    #[instrument(level = "debug", skip(self, target), fields(target_len = target.chars().count()))]
    pub fn initialize(&mut self, target: &str) -> Result<(), EngineError> {
        if target.is_empty() {
            return Err(EngineError::EmptyTarget);
        }

        let fitness = TargetMatchFitness::new(target);
        let individuals = (0..self.config.population_size)
            .map(|_| Individual::create_random(fitness.len(), &self.config.alphabet, &mut self.rng))
            .collect::<Result<Vec<_>, _>>()?;

        let foreign = self.config.alphabet.foreign_chars(target);
        if !foreign.is_empty() {
            warn!(?foreign, "target contains characters outside the alphabet; it can never be matched exactly");
        }

        self.target = target.to_string();
        self.fitness = Some(fitness);
        self.population = Population::new(individuals);
        self.best_ever = None;
        self.completed_at = None;

        self.evaluate()?;

        info!(
            population_size = self.population.size(),
            best_fitness = self.best_fitness(),
            "population initialized"
        );
        Ok(())
    }

    /// Advance the run by exactly one generation.
    ///
    /// 1. Rescore and sort the current population, updating best-ever.
    /// 2. Copy the top `min(elitism_count, population_size)` individuals.
    /// 3. Fill the rest by tournament selection, crossover and mutation,
    ///    dropping the second child of a pair when only one slot is left.
    /// 4. Replace the population, bump the generation, and score the new
    ///    generation so accessors always see evaluated individuals.
    ///
    /// # Errors
    /// [`EngineError::NotInitialized`] if called before [`Engine::initialize`].
    #[instrument(level = "debug", skip(self), fields(generation = self.generation()))]
    pub fn evolve(&mut self) -> Result<(), EngineError> {
        self.evaluate()?;

        let population_size = self.config.population_size;
        let mut next = Vec::with_capacity(population_size);

        // Elites are clones carrying their current scores
        next.extend_from_slice(self.population.elites(self.config.effective_elitism()));

        while next.len() < population_size {
            let parent1 = self.select_parent()?;
            let parent2 = self.select_parent()?;

            let (child1, child2) = self.crossover.breed(&parent1, &parent2, &mut self.rng)?;

            let child1 = self.mutation.mutate(&child1, &self.config.alphabet, &mut self.rng);
            let child2 = self.mutation.mutate(&child2, &self.config.alphabet, &mut self.rng);

            for child in [child1, child2] {
                if next.len() < population_size {
                    next.push(child);
                }
            }
        }

        self.population.set_individuals(next);
        self.population.increment_generation();
        self.evaluate()?;

        debug!(
            best_fitness = self.best_fitness(),
            best_ever_fitness = self.best_ever_fitness(),
            average_fitness = self.average_fitness(),
            "generation complete"
        );
        Ok(())
    }

    /// Call [`Engine::evolve`] until the target is matched or
    /// `max_generations` steps have run.
    ///
    /// Returns the number of generations advanced by this call.
    pub fn run_until_complete(&mut self, max_generations: usize) -> Result<usize, EngineError> {
        let mut steps = 0;
        while !self.is_complete() && steps < max_generations {
            self.evolve()?;
            steps += 1;
        }
        Ok(steps)
    }

    /// True once the best individual of the current population matches the
    /// target exactly.
    pub fn is_complete(&self) -> bool {
        self.population
            .best()
            .is_some_and(|best| best.fitness_value().is_perfect())
    }

    /// Rescore and sort the population, then update the best-ever snapshot.
    ///
    /// Best-ever is replaced only on a strict improvement, so it keeps the
    /// earliest individual reaching a given fitness.
    fn evaluate(&mut self) -> Result<(), EngineError> {
        let fitness = self.fitness.as_ref().ok_or(EngineError::NotInitialized)?;
        self.population.evaluate(fitness);

        if let Some(best) = self.population.best() {
            let improved = self
                .best_ever
                .as_ref()
                .is_none_or(|ever| best.fitness() > ever.fitness());
            if improved {
                self.best_ever = Some(best.clone());
            }
        }

        if self.completed_at.is_none() && self.is_complete() {
            let generation = self.generation();
            self.completed_at = Some(generation);
            info!(generation, "target matched");
        }
        Ok(())
    }

    /// Run one tournament and clone the winner.
    fn select_parent(&mut self) -> Result<Individual, EngineError> {
        self.selection
            .select(self.population.individuals(), &mut self.rng)
            .cloned()
            .ok_or(EngineError::NotInitialized)
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Fittest individual seen in any generation of this run.
    pub fn best_ever(&self) -> Option<&Individual> {
        self.best_ever.as_ref()
    }

    /// Fittest individual of the current population.
    pub fn best(&self) -> Option<&Individual> {
        self.population.best()
    }

    /// Mean fitness of the current population, 0 if empty.
    pub fn average_fitness(&self) -> f64 {
        self.population.average_fitness()
    }

    /// Get the target string; empty before `initialize`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get reference to engine configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Whether `initialize` has been called.
    pub fn is_initialized(&self) -> bool {
        self.fitness.is_some()
    }

    /// Generation at which the target was first matched.
    pub fn completed_at(&self) -> Option<usize> {
        self.completed_at
    }

    /// Snapshot of the current fitness statistics.
    pub fn stats(&self) -> GenerationStats {
        GenerationStats {
            generation: self.generation(),
            best_fitness: self.best_fitness(),
            best_ever_fitness: self.best_ever_fitness(),
            average_fitness: self.average_fitness(),
        }
    }

    fn best_fitness(&self) -> f64 {
        self.population.best().map_or(0.0, Individual::fitness)
    }

    fn best_ever_fitness(&self) -> f64 {
        self.best_ever.as_ref().map_or(0.0, Individual::fitness)
    }
}
