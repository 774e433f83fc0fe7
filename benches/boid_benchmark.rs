/*
 * Boid Simulation Benchmark
 *
 * Measures the brute-force tick (every boid against every other boid) for a
 * few flock sizes, and the polar vector addition at its core.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polar_boids::app::spawn_flock;
use polar_boids::{add_vectors, PolarVector, SimulationParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

// Benchmark one full tick for different numbers of boids
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for num_boids in [30, 100, 300].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut params = SimulationParams::default();
            params.num_boids = n;
            let mut simulation = spawn_flock(&params, &mut StdRng::seed_from_u64(n as u64))
                .expect("default parameters are valid");

            b.iter(|| {
                simulation.step();
                black_box(simulation.boids().len());
            });
        });
    }

    group.finish();
}

fn bench_add_vectors(c: &mut Criterion) {
    let v1 = PolarVector::new(0.7, 3.0);
    let v2 = PolarVector::new(-2.1, 1.5);

    c.bench_function("add_vectors", |b| {
        b.iter(|| add_vectors(black_box(v1), black_box(v2)));
    });
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step, bench_add_vectors
}

criterion_main!(benches);
