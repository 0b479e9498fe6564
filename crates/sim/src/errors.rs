use thiserror::Error;

/// Errors raised while validating a [`GaConfig`](crate::simulation::GaConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The alphabet has no characters to draw genes from.
    #[error("Alphabet must contain at least one character")]
    EmptyAlphabet,

    /// Population size must be strictly positive.
    #[error("Invalid population size: {0} (must be at least 1)")]
    InvalidPopulationSize(usize),

    /// A probability parameter fell outside `[0.0, 1.0]`.
    #[error("Invalid probability for {0}: {1} (must be between 0.0 and 1.0)")]
    InvalidProbability(&'static str, f64),

    /// Tournament size must be at least one contender.
    #[error("Invalid tournament size: {0} (must be at least 1)")]
    InvalidTournamentSize(usize),

    /// A configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Errors raised when constructing genomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenomeError {
    /// A genome of length zero was requested.
    #[error("Genome length must be greater than zero")]
    EmptyGenome,
}

/// Errors that can occur during mutation operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    /// Invalid mutation rate (must be between 0.0 and 1.0)
    #[error("Invalid mutation rate: {0} (must be between 0.0 and 1.0)")]
    InvalidMutationRate(f64),
}

/// Errors that can occur during recombination operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecombinationError {
    /// Invalid probability value
    #[error("Invalid probability for {0}: {1} (must be between 0.0 and 1.0)")]
    InvalidProbability(&'static str, f64),

    /// Parents have different genome lengths
    #[error("Genome length mismatch: {len1} vs {len2}")]
    LengthMismatch { len1: usize, len2: usize },

    /// Cut position beyond the end of the genome
    #[error("Invalid position {position} for genome of length {length}")]
    InvalidPosition { position: usize, length: usize },
}

/// Errors returned by the [`Engine`](crate::simulation::Engine).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// `initialize` was called with an empty target.
    #[error("Target string must not be empty")]
    EmptyTarget,

    /// `evolve` was called before `initialize`.
    #[error("Engine has not been initialized with a target")]
    NotInitialized,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Genome(#[from] GenomeError),

    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error("Breeding failed: {0}")]
    Recombination(#[from] RecombinationError),
}
