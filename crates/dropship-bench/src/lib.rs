//! Benchmark profiles and utilities for the Dropship simulation.
//!
//! Provides pre-built [`EnvParams`] profiles shared by the benches and
//! the rollout example:
//!
//! - [`fleet_params`]: N drones at the default density (the training shape)
//! - [`congested_params`]: a deliberately crowded board for collision-heavy ticks
//! - [`random_actions`]: a deterministic random policy

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dropship_core::Action;
use dropship_engine::EnvParams;
use rand::Rng;

/// Parameters for a fleet of `n_drones` on a density-derived grid.
pub fn fleet_params(n_drones: u16) -> EnvParams {
    EnvParams {
        n_drones,
        ..EnvParams::default()
    }
}

/// A crowded board: the grid is shrunk until drones and objects occupy
/// most cells, which maximizes collisions and respawn traffic per tick.
pub fn congested_params(n_drones: u16) -> EnvParams {
    let params = fleet_params(n_drones);
    // Smallest side that still passes capacity validation.
    let mut side = (params.required_cells() as f64).sqrt().ceil() as u32;
    loop {
        let candidate = EnvParams {
            grid_size: Some(side),
            ..params.clone()
        };
        if candidate.validate().is_ok() {
            return candidate;
        }
        side += 1;
    }
}

/// Draw one uniform random action per drone.
pub fn random_actions<R: Rng + ?Sized>(rng: &mut R, n_drones: usize) -> Vec<Action> {
    (0..n_drones)
        .map(|_| Action::ALL[rng.random_range(0..Action::COUNT)])
        .collect()
}
