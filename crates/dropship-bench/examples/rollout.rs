//! End-to-end rollout example.
//!
//! Demonstrates: build params → DeliveryWorld → random policy → step →
//! read observations → render. Run with `cargo run --example rollout`.

use dropship_bench::{fleet_params, random_actions};
use dropship_engine::DeliveryWorld;
use dropship_obs::{compass, render};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("=== Dropship rollout example ===\n");

    let mut world = DeliveryWorld::new(fleet_params(4)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut state = world.reset(&mut rng).unwrap();

    println!(
        "{} drones on a {}x{} grid\n",
        world.n_drones(),
        world.side(),
        world.side()
    );
    println!("{}\n", render(&state));

    let mut totals = vec![0.0f32; world.n_drones()];
    let mut crashes = 0u32;
    let mut deliveries = 0u32;

    for tick in 1..=200 {
        let actions = random_actions(&mut rng, world.n_drones());
        let outcome = world.step(&mut rng, &mut state, &actions).unwrap();

        for (total, reward) in totals.iter_mut().zip(&outcome.rewards) {
            *total += reward;
        }
        crashes += outcome.metrics.crashes;
        deliveries += outcome.metrics.deliveries;

        if tick % 50 == 0 {
            println!(
                "tick {:>3}: total_reward={:>8.2}, crashes={:>3}, deliveries={:>2}, time={:>4}us",
                tick,
                totals.iter().sum::<f32>(),
                crashes,
                deliveries,
                outcome.metrics.total_us,
            );
        }
    }

    println!("\nfinal board:\n{}", render(&state));

    let headings = compass(&state);
    for (i, heading) in headings.iter().enumerate() {
        match heading {
            Some(obs) => println!(
                "drone {}: target {} at L1 distance {}",
                i + 1,
                obs.heading,
                obs.distance
            ),
            None => println!("drone {}: no target on the board", i + 1),
        }
    }
}
