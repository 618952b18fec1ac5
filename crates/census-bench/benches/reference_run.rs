//! Criterion benchmark for complete runs of the reference profile.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use census_bench::{reference_config, BENCH_GENERATIONS};
use census_engine::{NullSink, Simulation};

/// Benchmark: 50 generations of the 100x100 reference grid.
fn bench_reference_run(c: &mut Criterion) {
    c.bench_function("reference_run_50_generations", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(reference_config(42)).unwrap();
            let summary = sim.run(&mut NullSink).unwrap();
            assert_eq!(summary.generations_run, BENCH_GENERATIONS);
            black_box(summary.grand_total);
        });
    });
}

/// Benchmark: single steps, reporting per-generation work.
fn bench_reference_step(c: &mut Criterion) {
    let mut sim = Simulation::new(reference_config(7)).unwrap();

    c.bench_function("reference_step", |b| {
        b.iter(|| {
            if sim.generation().0 >= sim.generations() {
                sim = Simulation::new(reference_config(7)).unwrap();
            }
            let r = sim.step(&mut NullSink).unwrap();
            black_box(r.metrics);
        });
    });
}

criterion_group!(benches, bench_reference_run, bench_reference_step);
criterion_main!(benches);
