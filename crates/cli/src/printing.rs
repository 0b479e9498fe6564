use phrasevo_sim::evolution::UniformMutation;
use phrasevo_sim::genome::Individual;
use phrasevo_sim::simulation::{Engine, GaConfig, GenerationStats};

/// Print the parameters of a run, with the flag that sets each one.
pub fn print_run_parameters(config: &GaConfig, target: &str, max_generations: usize) {
    println!("🎯 Target");
    println!("  • Target: {target}");
    println!("  • Length: {} characters", target.chars().count());

    println!("\n⚙️  Engine Parameters");
    println!("  • Population size: {} [--population-size]", config.population_size);
    match UniformMutation::new(config.mutation_rate) {
        Ok(mutation) => println!(
            "  • Mutation rate: {:.2}% per character (~{:.2} per offspring) [--mutation-rate]",
            mutation.rate() * 100.0,
            mutation.expected_mutations(target.chars().count())
        ),
        Err(e) => println!("  • Mutation rate: {e} [--mutation-rate]"),
    }
    println!("  • Crossover rate: {:.2} [--crossover-rate]", config.crossover_rate);
    if config.elitism_count > config.population_size {
        println!(
            "  • Elitism: {} (clamped from {}) [--elitism]",
            config.effective_elitism(),
            config.elitism_count
        );
    } else {
        println!("  • Elitism: {} [--elitism]", config.elitism_count);
    }
    println!("  • Tournament size: {} [--tournament-size]", config.tournament_size);
    println!(
        "  • Alphabet: \"{}\" ({} characters) [--alphabet]",
        config.alphabet,
        config.alphabet.len()
    );
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
    println!("  • Max generations: {max_generations} [--max-generations]");
    println!();
}

/// One line of sampled statistics.
pub fn format_stats(stats: &GenerationStats) -> String {
    format!(
        "Gen {:>6} | best {:>6.2}% | best ever {:>6.2}% | average {:>6.2}%",
        stats.generation, stats.best_fitness, stats.best_ever_fitness, stats.average_fitness
    )
}

/// Marker line under a genome: `^` where it matches the target, blank elsewhere.
pub fn match_markers(individual: &Individual, target: &[char]) -> String {
    individual
        .matches(target)
        .into_iter()
        .map(|hit| if hit { '^' } else { ' ' })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Print the outcome of a finished run.
pub fn print_summary(engine: &Engine, show: usize) {
    let target: Vec<char> = engine.target().chars().collect();

    println!();
    match engine.completed_at() {
        Some(generation) => println!("✓ Target matched at generation {generation}"),
        None => println!(
            "✗ Did not match target within {} generations",
            engine.generation()
        ),
    }

    if let Some(best) = engine.best_ever() {
        println!("  Best ever: \"{best}\" ({:.1})", best.fitness_value());
        println!("              {}", match_markers(best, &target));
    }
    println!("  Final generation: {}", engine.generation());
    println!("  Final average fitness: {:.2}%", engine.average_fitness());

    if show > 0 {
        println!("\n🏆 Top {} of final population", show.min(engine.population().size()));
        for (rank, individual) in engine.population().elites(show).iter().enumerate() {
            println!(
                "  {:>3}. \"{individual}\" {:.1}",
                rank + 1,
                individual.fitness_value()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stats() {
        let line = format_stats(&GenerationStats {
            generation: 40,
            best_fitness: 50.0,
            best_ever_fitness: 62.5,
            average_fitness: 12.25,
        });
        assert_eq!(
            line,
            "Gen     40 | best  50.00% | best ever  62.50% | average  12.25%"
        );
    }

    #[test]
    fn test_match_markers() {
        let target: Vec<char> = "HELLO".chars().collect();
        assert_eq!(match_markers(&Individual::from("HXLLY"), &target), "^ ^^");
        assert_eq!(match_markers(&Individual::from("XXXXX"), &target), "");
    }
}
