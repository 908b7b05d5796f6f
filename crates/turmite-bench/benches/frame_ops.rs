//! Criterion benchmarks for agent steps and whole frames.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use turmite_bench::{reference_profile, stress_profile};
use turmite_core::{Heading, Position};
use turmite_engine::{SimulationRunner, TurmiteAgent};
use turmite_space::Grid2D;
use turmite_test_utils::fixtures::{black_white, langton, scatter};

/// Benchmark: 1000 bare agent steps on a scattered 1024x1024 grid.
fn bench_agent_steps_1k(c: &mut Criterion) {
    let palette = black_white();
    let rules = langton();
    let mut grid = Grid2D::new(1024, 1024, palette.background()).unwrap();
    scatter(&mut grid, &palette, 42);

    c.bench_function("agent_steps_1k", |b| {
        b.iter(|| {
            let mut ant = TurmiteAgent::new(Position::new(512, 512), Heading::North);
            for _ in 0..1000 {
                black_box(ant.step(&mut grid, &palette, &rules).unwrap());
            }
        });
    });
}

/// Benchmark: one 1000-step frame of the reference profile.
fn bench_frame_reference(c: &mut Criterion) {
    let mut runner = SimulationRunner::in_memory(reference_profile()).unwrap();
    runner.advance_frame().unwrap();

    c.bench_function("frame_reference_1k", |b| {
        b.iter(|| {
            // Restart before the classic ant reaches the edge.
            if runner.total_steps() > 8_000 {
                runner = SimulationRunner::in_memory(reference_profile()).unwrap();
            }
            black_box(runner.advance_frame().unwrap());
        });
    });
}

/// Benchmark: one 10K-step frame of the four-color stress profile.
fn bench_frame_stress(c: &mut Criterion) {
    let config = stress_profile().unwrap();
    let mut runner = SimulationRunner::in_memory(config.clone()).unwrap();

    c.bench_function("frame_stress_10k", |b| {
        b.iter(|| {
            if !runner.is_running() {
                runner = SimulationRunner::in_memory(config.clone()).unwrap();
            }
            black_box(runner.advance_frame().unwrap());
        });
    });
}

/// Benchmark: the classic ant from a blank 128x128 grid until it halts.
fn bench_run_to_halt_128(c: &mut Criterion) {
    c.bench_function("run_to_halt_128", |b| {
        b.iter(|| {
            let config = turmite_engine::RunConfig::new(128, 128, langton(), black_white());
            let mut runner = SimulationRunner::in_memory(config).unwrap();
            black_box(runner.run_to_halt(u64::MAX).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_agent_steps_1k,
    bench_frame_reference,
    bench_frame_stress,
    bench_run_to_halt_128
);
criterion_main!(benches);
