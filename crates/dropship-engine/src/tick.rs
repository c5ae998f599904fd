//! The tick resolver: one atomic state transition.
//!
//! Resolution runs in five ordered phases over the D drones:
//!
//! 1. **Project** every intent to a target cell.
//! 2. **Boundary/obstacle**: targets off-grid or into a skyscraper crash.
//! 3. **Collisions**: group survivors by target; every group of two or
//!    more crashes entirely. Swapping drones have distinct targets and
//!    pass through each other.
//! 4. **Rewrite and interact**: survivors move, then pick up, deliver, or
//!    start charging depending on the ground under them.
//! 5. **Battery**: charge on stations, discharge elsewhere; a drained
//!    drone crashes at end of tick.
//!
//! Crashed drones and consumed ground objects respawn at the end of the
//! tick — ground first, so a respawning drone may land atop a fresh
//! object and absorb it under the silent-pickup rule.
//!
//! All scratch is O(D) and reused across ticks; the resolver never walks
//! the grid (the spawner does, only when something must respawn).

use crate::config::EnvParams;
use crate::metrics::StepMetrics;
use crate::spawn::Spawner;
use dropship_core::{Action, DroneId, StepError, Tile, FULL_CHARGE, NO_DRONE};
use dropship_grid::{Cell, WorldState};
use indexmap::IndexMap;
use log::debug;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Instant;

/// Result of one resolved tick.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    /// Per-drone reward, indexed by `id − 1`.
    pub rewards: Vec<f32>,
    /// Per-drone episode-termination flag: `true` iff the drone was
    /// respawned this tick.
    pub dones: Vec<bool>,
    /// Timing and event counts for this tick.
    pub metrics: StepMetrics,
}

/// Reusable O(D) scratch for the resolver.
#[derive(Debug, Default)]
pub(crate) struct StepScratch {
    /// Flat target cell per drone; meaningless for crashed drones.
    dest: Vec<u32>,
    /// Whether each drone has crashed this tick.
    crashed: Vec<bool>,
    /// Target cell → number of surviving drones aiming at it.
    dest_count: IndexMap<u32, u16>,
    /// Drones awaiting air respawn, in crash order.
    air_respawn: SmallVec<[DroneId; 8]>,
    /// Ground objects awaiting respawn, in consumption order.
    ground_respawn: SmallVec<[Tile; 8]>,
}

impl StepScratch {
    fn begin(&mut self, n_drones: usize) {
        self.dest.clear();
        self.dest.resize(n_drones, 0);
        self.crashed.clear();
        self.crashed.resize(n_drones, false);
        self.dest_count.clear();
        self.air_respawn.clear();
        self.ground_respawn.clear();
    }
}

/// Mark drone `i` crashed: crash reward, episode done, queued for air
/// respawn, carried package scheduled as a ground packet.
fn schedule_crash(
    scratch: &mut StepScratch,
    rewards: &mut [f32],
    dones: &mut [bool],
    carrying: &mut [bool],
    crash_reward: f32,
    i: usize,
) {
    scratch.crashed[i] = true;
    scratch.air_respawn.push((i + 1) as DroneId);
    rewards[i] += crash_reward;
    dones[i] = true;
    if carrying[i] {
        carrying[i] = false;
        scratch.ground_respawn.push(Tile::Packet);
    }
}

/// Resolve one tick. See the module docs for the phase contract.
pub(crate) fn resolve<R: Rng + ?Sized>(
    params: &EnvParams,
    scratch: &mut StepScratch,
    spawner: &mut Spawner,
    rng: &mut R,
    state: &mut WorldState,
    actions: &[Action],
) -> Result<StepOutcome, StepError> {
    let d = state.n_drones();
    if actions.len() != d {
        return Err(StepError::ShapeMismatch {
            expected: d,
            got: actions.len(),
        });
    }

    let started = Instant::now();
    let side = state.side();
    let mut metrics = StepMetrics::default();
    let mut rewards = vec![0.0f32; d];
    let mut dones = vec![false; d];
    scratch.begin(d);

    // Phases 1–2: project intents; off-grid or skyscraper targets crash.
    for i in 0..d {
        let target = state.positions[i].step(actions[i]);
        let blocked =
            !target.in_bounds(side) || state.ground.get(target) == Tile::Skyscraper;
        if blocked {
            schedule_crash(
                scratch,
                &mut rewards,
                &mut dones,
                &mut state.carrying,
                params.crash_reward,
                i,
            );
        } else {
            scratch.dest[i] = target.flat(side) as u32;
        }
    }

    // Phase 3: every target shared by two or more survivors downs them all.
    // STAY counts like any intent, so a mover aiming at a stayer collides.
    for i in 0..d {
        if !scratch.crashed[i] {
            *scratch.dest_count.entry(scratch.dest[i]).or_insert(0) += 1;
        }
    }
    for i in 0..d {
        if !scratch.crashed[i] && scratch.dest_count[&scratch.dest[i]] >= 2 {
            metrics.collisions += 1;
            schedule_crash(
                scratch,
                &mut rewards,
                &mut dones,
                &mut state.carrying,
                params.crash_reward,
                i,
            );
        }
    }

    // Phase 4: everyone lifts off, survivors land on their targets.
    // Clearing every origin first makes swap chains safe to write.
    for i in 0..d {
        state.air.set(state.positions[i], NO_DRONE);
    }
    for i in 0..d {
        if scratch.crashed[i] {
            continue;
        }
        let cell = Cell::from_flat(scratch.dest[i] as usize, side);
        state.air.set(cell, (i + 1) as DroneId);
        state.positions[i] = cell;

        match state.ground.get(cell) {
            Tile::Packet if !state.carrying[i] => {
                state.carrying[i] = true;
                state.ground.set(cell, Tile::Empty);
                rewards[i] += params.pickup_reward;
                scratch.ground_respawn.push(Tile::Packet);
                metrics.pickups += 1;
            }
            Tile::Dropzone if state.carrying[i] => {
                state.carrying[i] = false;
                state.ground.set(cell, Tile::Empty);
                rewards[i] += params.delivery_reward;
                scratch.ground_respawn.push(Tile::Dropzone);
                metrics.deliveries += 1;
            }
            // A carrying drone over a packet leaves it on the ground; an
            // empty drone over a dropzone has nothing to deliver.
            _ => {}
        }
    }

    // Phase 5: battery. A drone that drains to zero crashes at end of
    // tick, additive to anything it earned above.
    for i in 0..d {
        if scratch.crashed[i] {
            continue;
        }
        let cell = state.positions[i];
        if state.ground.get(cell) == Tile::Station {
            state.charge[i] = state.charge[i].saturating_add(params.charge_rate).min(FULL_CHARGE);
            rewards[i] += params.charge_reward;
            metrics.charging += 1;
        } else {
            state.charge[i] = state.charge[i].saturating_sub(params.discharge_rate);
        }
        if state.charge[i] == 0 {
            metrics.battery_failures += 1;
            state.air.set(cell, NO_DRONE);
            schedule_crash(
                scratch,
                &mut rewards,
                &mut dones,
                &mut state.carrying,
                params.crash_reward,
                i,
            );
        }
    }

    // Respawn: ground before air, so a respawning drone may land atop a
    // fresh object.
    metrics.ground_respawns = scratch.ground_respawn.len() as u32;
    spawner.spawn_tiles(rng, state, &scratch.ground_respawn)?;

    let landed = spawner.spawn_drones(rng, state, &scratch.air_respawn)?;
    for (&id, &cell) in scratch.air_respawn.iter().zip(landed.iter()) {
        let i = (id - 1) as usize;
        state.charge[i] = FULL_CHARGE;
        state.carrying[i] = false;
        // Silent pickup: a packet under the landing cell is absorbed with
        // no reward and no replacement respawn.
        if state.ground.get(cell) == Tile::Packet {
            state.carrying[i] = true;
            state.ground.set(cell, Tile::Empty);
        }
    }

    metrics.crashes = scratch.air_respawn.len() as u32;
    metrics.total_us = started.elapsed().as_micros() as u64;
    if metrics.crashes > 0 {
        debug!(
            "tick: {} crashed ({} collisions, {} drained), {} ground respawns",
            metrics.crashes, metrics.collisions, metrics.battery_failures, metrics.ground_respawns
        );
    }

    Ok(StepOutcome {
        rewards,
        dones,
        metrics,
    })
}
