//! Episode bootstrap.

use crate::config::EnvParams;
use crate::spawn::Spawner;
use dropship_core::{DroneId, SpawnError, Tile};
use dropship_grid::WorldState;
use log::debug;
use rand::Rng;

/// Build a valid initial state.
///
/// Static objects are placed first so they bind the scarce cells, then the
/// consumables, then the drones; finally every drone that happened to land
/// on a packet absorbs it under the silent-pickup rule. All drones start
/// at full charge.
pub(crate) fn bootstrap<R: Rng + ?Sized>(
    params: &EnvParams,
    side: u32,
    spawner: &mut Spawner,
    rng: &mut R,
) -> Result<WorldState, SpawnError> {
    let d = params.n_drones as usize;
    let mut state = WorldState::empty(side, d);

    let (sky, stations, zones, packets) = params.ground_counts();
    spawner.spawn_tiles(rng, &mut state, &vec![Tile::Skyscraper; sky])?;
    spawner.spawn_tiles(rng, &mut state, &vec![Tile::Station; stations])?;
    spawner.spawn_tiles(rng, &mut state, &vec![Tile::Dropzone; zones])?;
    spawner.spawn_tiles(rng, &mut state, &vec![Tile::Packet; packets])?;

    let ids: Vec<DroneId> = (1..=params.n_drones).collect();
    let landed = spawner.spawn_drones(rng, &mut state, &ids)?;
    for (&id, &cell) in ids.iter().zip(landed.iter()) {
        if state.ground.get(cell) == Tile::Packet {
            state.carrying[(id - 1) as usize] = true;
            state.ground.set(cell, Tile::Empty);
        }
    }

    debug!(
        "reset: {side}×{side} grid, {d} drones, {sky} skyscrapers, {stations} stations, \
         {zones} dropzones, {packets} packets"
    );
    Ok(state)
}
