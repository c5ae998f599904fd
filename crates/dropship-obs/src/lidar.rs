//! Lidar projection: compass plus an eight-bit obstacle mask.

use crate::compass::{compass, Cardinal, CompassObs};
use dropship_core::NO_DRONE;
use dropship_grid::{Cell, WorldState};

/// Probe offsets per direction, in [`Cardinal::ALL`] order. Cardinals
/// look two cells out, diagonals one.
const PROBES: [&[(i32, i32)]; 8] = [
    &[(0, -1), (0, -2)],       // W
    &[(1, -1)],                // SW
    &[(1, 0), (2, 0)],         // S
    &[(1, 1)],                 // SE
    &[(0, 1), (0, 2)],         // E
    &[(-1, 1)],                // NE
    &[(-1, 0), (-2, 0)],       // N
    &[(-1, -1)],               // NW
];

/// One drone's lidar reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LidarObs {
    /// Compass reading toward the current target, if any exists.
    pub compass: Option<CompassObs>,
    /// Obstacle mask: bit `c` (LSB first) is set iff any probed cell in
    /// direction `Cardinal::ALL[c]` is out of the grid or holds another
    /// drone.
    pub obstacles: u8,
}

impl LidarObs {
    /// Whether the given direction's obstacle bit is set.
    pub fn blocked(&self, direction: Cardinal) -> bool {
        self.obstacles & (1 << direction as u8) != 0
    }
}

/// Per-drone lidar readings, indexed by `id − 1`.
pub fn lidar(state: &WorldState) -> Vec<LidarObs> {
    let headings = compass(state);
    state
        .positions
        .iter()
        .zip(headings)
        .map(|(&from, compass)| LidarObs {
            compass,
            obstacles: obstacle_mask(state, from),
        })
        .collect()
}

fn obstacle_mask(state: &WorldState, from: Cell) -> u8 {
    let mut mask = 0u8;
    for (bit, probes) in PROBES.iter().enumerate() {
        let hit = probes.iter().any(|&(dy, dx)| {
            let cell = Cell::new(from.y + dy, from.x + dx);
            !state.air.contains(cell) || state.air.get(cell) != NO_DRONE
        });
        if hit {
            mask |= 1 << bit;
        }
    }
    mask
}
