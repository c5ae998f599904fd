//! Criterion benchmarks for observation extraction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dropship_bench::fleet_params;
use dropship_engine::DeliveryWorld;
use dropship_obs::{compass, grid_view, lidar};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_projections(c: &mut Criterion) {
    let mut world = DeliveryWorld::new(fleet_params(16)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let state = world.reset(&mut rng).unwrap();

    c.bench_function("compass_16", |b| {
        b.iter(|| black_box(compass(&state)));
    });
    c.bench_function("lidar_16", |b| {
        b.iter(|| black_box(lidar(&state)));
    });
    c.bench_function("grid_view_16", |b| {
        b.iter(|| black_box(grid_view(&state)));
    });
}

criterion_group!(benches, bench_projections);
criterion_main!(benches);
