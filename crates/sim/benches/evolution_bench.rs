use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use phrasevo_sim::base::Alphabet;
use phrasevo_sim::evolution::{
    IndividualFitness, SinglePointCrossover, TargetMatchFitness, TournamentSelection,
    UniformMutation,
};
use phrasevo_sim::genome::Individual;
use phrasevo_sim::simulation::{EngineBuilder, Population};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

const TARGET: &str = "THE COURSE OF TRUE LOVE NEVER DID RUN SMOOTH";

fn random_individuals(count: usize, length: usize, rng: &mut Xoshiro256PlusPlus) -> Vec<Individual> {
    let alphabet = Alphabet::default();
    (0..count)
        .map(|_| Individual::create_random(length, &alphabet, rng).unwrap())
        .collect()
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let alphabet = Alphabet::default();

    let rates = [0.001, 0.01, 0.1, 1.0];
    let lengths = [16, 256, 4_096];

    for &len in &lengths {
        let individual = Individual::create_random(len, &alphabet, &mut rng).unwrap();
        group.throughput(Throughput::Elements(len as u64));

        for &rate in &rates {
            let mutation = UniformMutation::new(rate).unwrap();
            group.bench_with_input(
                BenchmarkId::new("uniform", format!("len={len}/rate={rate}")),
                &(len, rate),
                |b, _| b.iter(|| black_box(mutation.mutate(black_box(&individual), &alphabet, &mut rng))),
            );
        }
    }

    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossover");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let crossover = SinglePointCrossover::new(1.0).unwrap();

    for &len in &[16, 256, 4_096] {
        let parents = random_individuals(2, len, &mut rng);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("breed", len), &len, |b, _| {
            b.iter(|| {
                black_box(
                    crossover
                        .breed(black_box(&parents[0]), black_box(&parents[1]), &mut rng)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let fitness = TargetMatchFitness::new(TARGET);

    let candidates: Vec<Individual> = random_individuals(200, fitness.len(), &mut rng)
        .iter()
        .map(|ind| fitness.evaluate(ind))
        .collect();

    for &size in &[2, 5, 20] {
        let selection = TournamentSelection::new(size).unwrap();
        group.bench_with_input(BenchmarkId::new("tournament", size), &size, |b, _| {
            b.iter(|| black_box(selection.select(black_box(&candidates), &mut rng)))
        });
    }

    group.finish();
}

fn bench_population_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_evaluate");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let fitness = TargetMatchFitness::new(TARGET);

    for &pop_size in &[100, 1_000, 10_000] {
        let population = Population::new(random_individuals(pop_size, fitness.len(), &mut rng));
        group.throughput(Throughput::Elements(pop_size as u64));

        group.bench_with_input(BenchmarkId::new("score_and_sort", pop_size), &pop_size, |b, _| {
            b.iter_batched(
                || population.clone(),
                |mut pop| {
                    pop.evaluate(&fitness);
                    black_box(pop)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_engine_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");

    for &pop_size in &[50, 200, 1_000] {
        group.throughput(Throughput::Elements(pop_size as u64));

        group.bench_with_input(BenchmarkId::new("evolve", pop_size), &pop_size, |b, &pop_size| {
            b.iter_batched(
                || {
                    EngineBuilder::new()
                        .population_size(pop_size)
                        .target(TARGET)
                        .seed(42)
                        .build()
                        .unwrap()
                },
                |mut engine| {
                    engine.evolve().unwrap();
                    black_box(engine)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mutation,
    bench_crossover,
    bench_selection,
    bench_population_evaluate,
    bench_engine_step
);
criterion_main!(benches);
