//! Dense tensor projection of the full board.

use dropship_core::{Tile, NO_DRONE};
use dropship_grid::WorldState;

/// Channels of the grid view tensor: drone index, packet marker,
/// dropzone marker.
pub const GRID_VIEW_CHANNELS: usize = 3;

/// Project the state into a flat `N × N × 3` tensor, row-major with the
/// channel innermost (`[y][x][channel]`).
///
/// - Channel 0: the drone index `1..=D` at the cell, 0 elsewhere.
/// - Channel 1: packet marker — a ground packet reads `1.0`; a packet
///   held by a drone reads the drone's index at the drone's cell, since
///   packets carry no identity of their own.
/// - Channel 2: `1.0` on dropzones.
///
/// All drones share this view; per-drone egocentric framing is a wrapper
/// concern.
pub fn grid_view(state: &WorldState) -> Vec<f32> {
    let side = state.side() as usize;
    let mut tensor = vec![0.0f32; side * side * GRID_VIEW_CHANNELS];

    for (i, (&id, &tile)) in state
        .air
        .as_slice()
        .iter()
        .zip(state.ground.as_slice())
        .enumerate()
    {
        let base = i * GRID_VIEW_CHANNELS;
        if id != NO_DRONE {
            tensor[base] = id as f32;
            if state.carrying[(id - 1) as usize] {
                tensor[base + 1] = id as f32;
            }
        }
        match tile {
            Tile::Packet => tensor[base + 1] = 1.0,
            Tile::Dropzone => tensor[base + 2] = 1.0,
            _ => {}
        }
    }
    tensor
}
