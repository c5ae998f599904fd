//! Criterion benchmarks for the tick resolver and episode bootstrap.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dropship_bench::{congested_params, fleet_params, random_actions};
use dropship_engine::DeliveryWorld;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark: one tick of a random-policy fleet at several drone counts.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for n_drones in [4u16, 16, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_drones),
            &n_drones,
            |b, &n| {
                let mut world = DeliveryWorld::new(fleet_params(n)).unwrap();
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                let mut state = world.reset(&mut rng).unwrap();
                b.iter(|| {
                    let actions = random_actions(&mut rng, world.n_drones());
                    let out = world.step(&mut rng, &mut state, &actions).unwrap();
                    black_box(&out.rewards);
                });
            },
        );
    }
    group.finish();
}

/// Benchmark: ticking a crowded board, where most drones crash or
/// respawn every tick and the spawner works hardest.
fn bench_step_congested(c: &mut Criterion) {
    let mut world = DeliveryWorld::new(congested_params(16)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut state = world.reset(&mut rng).unwrap();

    c.bench_function("step_congested_16", |b| {
        b.iter(|| {
            let actions = random_actions(&mut rng, world.n_drones());
            let out = world.step(&mut rng, &mut state, &actions).unwrap();
            black_box(out.metrics.crashes);
        });
    });
}

/// Benchmark: full episode bootstrap.
fn bench_reset(c: &mut Criterion) {
    let mut world = DeliveryWorld::new(fleet_params(16)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(13);

    c.bench_function("reset_16", |b| {
        b.iter(|| {
            let state = world.reset(&mut rng).unwrap();
            black_box(state.n_drones());
        });
    });
}

criterion_group!(benches, bench_step, bench_step_congested, bench_reset);
criterion_main!(benches);
