use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Target phrase to evolve toward (upper-cased before use)
    #[arg(short = 'T', long, conflicts_with = "quote")]
    pub target: Option<String>,

    /// Use preset quote N as the target (see `phrasevo quotes`)
    ///
    /// Defaults to quote 1 when neither --target nor --quote is given.
    #[arg(short, long)]
    pub quote: Option<usize>,

    /// Load engine parameters from a JSON file
    ///
    /// Flags given on the command line override values from the file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Population size [default: 200]
    #[arg(short = 'n', long)]
    pub population_size: Option<usize>,

    /// Mutation rate in percent per character [default: 1]
    #[arg(short, long)]
    pub mutation_rate: Option<f64>,

    /// Probability that a mating performs crossover [default: 0.8]
    #[arg(long)]
    pub crossover_rate: Option<f64>,

    /// Number of top individuals copied unchanged [default: 2]
    #[arg(short, long)]
    pub elitism: Option<usize>,

    /// Contenders per tournament [default: 5]
    #[arg(long)]
    pub tournament_size: Option<usize>,

    /// Characters genes are drawn from [default: A-Z and space]
    #[arg(short, long)]
    pub alphabet: Option<String>,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Stop after this many generations if the target is not matched
    #[arg(short = 'g', long, default_value_t = defaults::MAX_GENERATIONS)]
    pub max_generations: usize,

    /// Print fitness statistics every N generations (0 disables)
    #[arg(short, long, default_value_t = defaults::RECORD_EVERY)]
    pub record_every: usize,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Print the top N individuals of the final population
    #[arg(long, default_value_t = defaults::SHOW_TOP)]
    pub show: usize,
}
