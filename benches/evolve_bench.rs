//! Criterion benchmarks for the evolution engine.
//!
//! Measures generational step cost across population sizes and target
//! lengths, and full runs to completion on short targets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evolve::evolve::{
    CharacterSet, EvolutionEngine, EvolutionRunner, EvolveConfig, RunLimits, SelectionStrategy,
};

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    group.sample_size(20);

    for (len, pop) in [(16usize, 100usize), (64, 500), (256, 1000)] {
        let target: String = "abcdefghijklmnopqrstuvwxyz ".chars().cycle().take(len).collect();
        let config = EvolveConfig::new(target)
            .with_population_size(pop)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(config).expect("valid config");
        engine.initialize();

        group.bench_with_input(
            BenchmarkId::new(format!("l{}_p{}", len, pop), len),
            &len,
            |b, _| {
                b.iter(|| {
                    if engine.stats().map(|s| s.is_complete).unwrap_or(false) {
                        engine.initialize();
                    }
                    black_box(engine.step().expect("initialized"))
                })
            },
        );
    }
    group.finish();
}

fn bench_selection_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    group.sample_size(20);

    for selection in [
        SelectionStrategy::Elitism,
        SelectionStrategy::SemiElitism,
        SelectionStrategy::Random,
    ] {
        let config = EvolveConfig::new("the quick brown fox jumps over the lazy dog")
            .with_population_size(300)
            .with_selection(selection)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(config).expect("valid config");
        engine.initialize();

        group.bench_function(BenchmarkId::from_parameter(selection), |b| {
            b.iter(|| black_box(engine.step().expect("initialized")))
        });
    }
    group.finish();
}

fn bench_run_to_completion(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_to_completion");
    group.sample_size(10);

    for target in ["Hello World", "Methinks it is like a weasel"] {
        let config = EvolveConfig::new(target)
            .with_population_size(300)
            .with_mutation_rate(0.03)
            .with_character_set(CharacterSet::LettersSpace)
            .with_seed(42);
        let limits = RunLimits::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(target.len()),
            &(config, limits),
            |b, (c, l)| {
                b.iter(|| {
                    let mut engine = EvolutionEngine::new(c.clone()).expect("valid config");
                    let summary = EvolutionRunner::run(&mut engine, black_box(l));
                    black_box(summary)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_step,
    bench_selection_strategies,
    bench_run_to_completion
);
criterion_main!(benches);
