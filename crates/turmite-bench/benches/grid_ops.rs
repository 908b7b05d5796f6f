//! Criterion micro-benchmarks for grid access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use turmite_core::{Color, Grid, Position};
use turmite_space::Grid2D;

/// Benchmark: read every cell of a 256x256 grid.
fn bench_read_all_64k(c: &mut Criterion) {
    let grid = Grid2D::new(256, 256, Color::WHITE).unwrap();

    c.bench_function("read_all_64k", |b| {
        b.iter(|| {
            for y in 0..256i64 {
                for x in 0..256i64 {
                    black_box(grid.read(Position::new(x, y)).unwrap());
                }
            }
        });
    });
}

/// Benchmark: write every cell of a 256x256 grid.
fn bench_write_all_64k(c: &mut Criterion) {
    let mut grid = Grid2D::new(256, 256, Color::WHITE).unwrap();

    c.bench_function("write_all_64k", |b| {
        b.iter(|| {
            for y in 0..256i64 {
                for x in 0..256i64 {
                    grid.write(Position::new(x, y), Color::BLACK).unwrap();
                }
            }
            black_box(&grid);
        });
    });
}

/// Benchmark: background fill of a 1024x1024 grid.
fn bench_fill_1m(c: &mut Criterion) {
    let mut grid = Grid2D::new(1024, 1024, Color::WHITE).unwrap();

    c.bench_function("fill_1m", |b| {
        b.iter(|| {
            grid.fill(black_box(Color::BLACK));
            black_box(&grid);
        });
    });
}

/// Benchmark: pack a 1024x1024 grid to RGBA words.
fn bench_to_rgba_1m(c: &mut Criterion) {
    let grid = Grid2D::new(1024, 1024, Color::WHITE).unwrap();

    c.bench_function("to_rgba_1m", |b| {
        b.iter(|| black_box(grid.to_rgba()));
    });
}

criterion_group!(
    benches,
    bench_read_all_64k,
    bench_write_all_64k,
    bench_fill_1m,
    bench_to_rgba_1m
);
criterion_main!(benches);
