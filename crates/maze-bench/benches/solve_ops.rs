//! Criterion benchmarks for the pathfinders.

use criterion::{criterion_group, criterion_main, Criterion};
use maze::solve::pathfinder_for;
use maze::types::{Algorithm, NoopObserver};
use maze_bench::stress_profile;
use std::hint::black_box;

/// Benchmark: each pathfinder on the same 128x128 maze.
fn bench_pathfinders(c: &mut Criterion) {
    let built = maze::generate(&stress_profile(42), &mut NoopObserver)
        .unwrap()
        .maze;

    let mut group = c.benchmark_group("solve_128x128");
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut maze = built.clone();
                let start = maze.start();
                let path = pathfinder_for(algorithm)
                    .solve(&mut maze, start, &mut NoopObserver)
                    .unwrap();
                black_box(path.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pathfinders);
criterion_main!(benches);
