mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::RunArgs;
use commands::{config, quotes, run};

/// Phrasevo: evolve random strings into a target phrase
///
/// A population of random strings is improved generation by generation
/// through tournament selection, single-point crossover and per-character
/// mutation until one of them spells the target exactly.
#[derive(Parser, Debug)]
#[command(name = "phrasevo")]
#[command(author, version, about = "Evolves random strings toward a target phrase", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel fitness evaluation
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the genetic algorithm until the target is matched.
    ///
    /// Prints sampled fitness statistics while running and the best
    /// individual found at the end.
    Run(Box<RunArgs>),

    /// List the preset quotes usable with `run --quote N`.
    Quotes,

    /// Print the default engine configuration as JSON.
    ///
    /// Edit the output and pass it back with `run --config FILE`.
    Config {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => {
            run::run_evolution(&args)?;
        }
        Commands::Quotes => {
            quotes::list_quotes();
        }
        Commands::Config { output } => {
            config::write_default_config(output.as_deref())?;
        }
    }

    Ok(())
}
