use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use phrasevo_sim::base::Alphabet;
use phrasevo_sim::simulation::{Engine, FitnessHistory, GaConfig, RecordingStrategy};
use tracing::{debug, info};

use crate::args::RunArgs;
use crate::defaults::QUOTES;
use crate::printing::{format_stats, print_run_parameters, print_summary};

pub fn run_evolution(args: &RunArgs) -> Result<()> {
    println!("🧬 Phrasevo - Evolving a Phrase");
    println!("============================================\n");

    let config = resolve_config(args)?;
    let target = resolve_target(args, &config.alphabet)?;

    print_run_parameters(&config, &target, args.max_generations);

    let mut engine = Engine::new(config).context("Failed to create engine")?;
    engine
        .initialize(&target)
        .context("Failed to initialize population")?;

    let strategy = if args.record_every == 0 {
        RecordingStrategy::None
    } else {
        RecordingStrategy::EveryN(args.record_every)
    };
    let mut history = FitnessHistory::new();

    let pb = if args.progress {
        let pb = ProgressBar::new(args.max_generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {per_sec} {msg}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let report = |line: String| match &pb {
        Some(pb) => pb.println(line),
        None => println!("{line}"),
    };

    if history.record_with(&strategy, engine.stats()) {
        report(format_stats(&engine.stats()));
    }

    while !engine.is_complete() && engine.generation() < args.max_generations {
        let next = engine.generation() + 1;
        engine
            .evolve()
            .with_context(|| format!("Generation {next} failed"))?;

        let stats = engine.stats();
        if history.record_with(&strategy, stats) {
            report(format_stats(&stats));
        }

        if let Some(pb) = &pb {
            pb.inc(1);
            if let Some(best) = engine.best() {
                pb.set_message(best.as_string());
            }
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    // Always close the curve with the final generation
    let last = engine.stats();
    if history.last().is_none_or(|s| s.generation != last.generation) {
        history.record(last);
        println!("{}", format_stats(&last));
    }
    debug!(samples = history.len(), "run finished");

    print_summary(&engine, args.show);
    Ok(())
}

/// Start from `--config` (or defaults) and apply explicit flags on top.
fn resolve_config(args: &RunArgs) -> Result<GaConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config = GaConfig::from_json(&json)
                .with_context(|| format!("Invalid config file {}", path.display()))?;
            info!(path = %path.display(), "loaded configuration");
            config
        }
        None => GaConfig::default(),
    };

    if let Some(size) = args.population_size {
        config.population_size = size;
    }
    if let Some(percent) = args.mutation_rate {
        config.mutation_rate = percent / 100.0;
    }
    if let Some(rate) = args.crossover_rate {
        config.crossover_rate = rate;
    }
    if let Some(count) = args.elitism {
        config.elitism_count = count;
    }
    if let Some(size) = args.tournament_size {
        config.tournament_size = size;
    }
    if let Some(chars) = &args.alphabet {
        config.alphabet = chars
            .parse::<Alphabet>()
            .context("Invalid --alphabet")?;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Pick the target from `--target` or `--quote` and check it can be matched.
///
/// A typed target is kept as is when the alphabet covers it, otherwise its
/// upper-cased form is tried.
fn resolve_target(args: &RunArgs, alphabet: &Alphabet) -> Result<String> {
    let target = match (&args.target, args.quote) {
        (Some(text), _) => {
            if alphabet.foreign_chars(text).is_empty() {
                text.clone()
            } else {
                text.to_uppercase()
            }
        }
        (None, Some(index)) => match index.checked_sub(1).and_then(|i| QUOTES.get(i)) {
            Some(quote) => quote.to_string(),
            None => bail!("Quote index {index} out of range (1-{})", QUOTES.len()),
        },
        (None, None) => QUOTES[0].to_string(),
    };

    if target.is_empty() {
        bail!("Target must not be empty");
    }

    let foreign = alphabet.foreign_chars(&target);
    if !foreign.is_empty() {
        let listed: String = foreign.iter().collect();
        bail!("Target contains characters not in the alphabet: \"{listed}\"");
    }

    Ok(target)
}
