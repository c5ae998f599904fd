//! Compass projection: heading and L1 distance to the current target.

use dropship_core::Tile;
use dropship_grid::{Cell, WorldState};
use std::fmt;

/// The eight compass directions, in the fixed observation order.
///
/// The order matters: Q-table learners index their state space by
/// `Cardinal as u8`, and the tie-break in [`Cardinal::toward`] resolves
/// by first match in exactly this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cardinal {
    /// West.
    W = 0,
    /// South-west.
    SW = 1,
    /// South.
    S = 2,
    /// South-east.
    SE = 3,
    /// East.
    E = 4,
    /// North-east.
    NE = 5,
    /// North.
    N = 6,
    /// North-west.
    NW = 7,
}

impl Cardinal {
    /// All directions in observation order.
    pub const ALL: [Cardinal; 8] = [
        Cardinal::W,
        Cardinal::SW,
        Cardinal::S,
        Cardinal::SE,
        Cardinal::E,
        Cardinal::NE,
        Cardinal::N,
        Cardinal::NW,
    ];

    /// The direction that reduces distance from `from` to `to`.
    ///
    /// Evaluates the eight direction predicates in observation order and
    /// returns the first that holds, so a target due south-west reads SW,
    /// not S or W. With `from == to` no predicate holds and the first
    /// direction (W) is returned, keeping the function total.
    pub fn toward(from: Cell, to: Cell) -> Cardinal {
        let west = from.x - to.x;
        let south = to.y - from.y;
        let predicates = [
            west > 0 && south == 0,  // W
            west > 0 && south > 0,   // SW
            west == 0 && south > 0,  // S
            west < 0 && south > 0,   // SE
            west < 0 && south == 0,  // E
            west < 0 && south < 0,   // NE
            west == 0 && south < 0,  // N
            west > 0 && south < 0,   // NW
        ];
        predicates
            .iter()
            .position(|&p| p)
            .map(|i| Cardinal::ALL[i])
            .unwrap_or(Cardinal::W)
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cardinal::W => "W",
            Cardinal::SW => "SW",
            Cardinal::S => "S",
            Cardinal::SE => "SE",
            Cardinal::E => "E",
            Cardinal::NE => "NE",
            Cardinal::N => "N",
            Cardinal::NW => "NW",
        };
        write!(f, "{name}")
    }
}

/// One drone's compass reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompassObs {
    /// Direction toward the nearest target.
    pub heading: Cardinal,
    /// L1 distance to that target.
    pub distance: u32,
}

/// Per-drone compass readings, indexed by `id − 1`.
///
/// A drone's target is the nearest packet while empty-handed and the
/// nearest dropzone while carrying, nearest by L1 distance with ties
/// broken by row-major scan order. `None` when no object of the wanted
/// kind is on the ground.
pub fn compass(state: &WorldState) -> Vec<Option<CompassObs>> {
    (0..state.n_drones())
        .map(|i| {
            let wanted = if state.carrying[i] {
                Tile::Dropzone
            } else {
                Tile::Packet
            };
            let from = state.positions[i];
            nearest(state, from, wanted).map(|(cell, distance)| CompassObs {
                heading: Cardinal::toward(from, cell),
                distance,
            })
        })
        .collect()
}

/// Nearest cell holding `wanted`, first in row-major order on ties.
fn nearest(state: &WorldState, from: Cell, wanted: Tile) -> Option<(Cell, u32)> {
    let mut best: Option<(Cell, u32)> = None;
    for (cell, tile) in state.ground.iter_objects() {
        if tile != wanted {
            continue;
        }
        let distance = from.l1(cell);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((cell, distance));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropship_test_utils::StateBuilder;

    #[test]
    fn heading_covers_all_eight_directions() {
        let from = Cell::new(4, 4);
        let cases = [
            (Cell::new(4, 2), Cardinal::W),
            (Cell::new(6, 2), Cardinal::SW),
            (Cell::new(6, 4), Cardinal::S),
            (Cell::new(6, 6), Cardinal::SE),
            (Cell::new(4, 6), Cardinal::E),
            (Cell::new(2, 6), Cardinal::NE),
            (Cell::new(2, 4), Cardinal::N),
            (Cell::new(2, 2), Cardinal::NW),
        ];
        for (to, cardinal) in cases {
            assert_eq!(Cardinal::toward(from, to), cardinal, "target {to}");
        }
    }

    #[test]
    fn same_cell_defaults_to_west() {
        let c = Cell::new(3, 3);
        assert_eq!(Cardinal::toward(c, c), Cardinal::W);
    }

    #[test]
    fn empty_drone_tracks_nearest_packet() {
        let state = StateBuilder::new(8, 1)
            .drone_at(1, 3, 3)
            .tile(Tile::Packet, 3, 6)
            .tile(Tile::Packet, 5, 3)
            .tile(Tile::Dropzone, 3, 2)
            .build();

        let obs = compass(&state);
        assert_eq!(
            obs[0],
            Some(CompassObs {
                heading: Cardinal::S,
                distance: 2,
            }),
            "the packet two south beats the one three east; the dropzone is ignored"
        );
    }

    #[test]
    fn carrying_drone_tracks_nearest_dropzone() {
        let state = StateBuilder::new(8, 1)
            .drone_at(1, 3, 3)
            .carrying(1)
            .tile(Tile::Packet, 3, 4)
            .tile(Tile::Dropzone, 6, 6)
            .build();

        let obs = compass(&state);
        assert_eq!(
            obs[0],
            Some(CompassObs {
                heading: Cardinal::SE,
                distance: 6,
            })
        );
    }

    #[test]
    fn ties_break_in_row_major_order() {
        // Both packets are 2 away; (1, 3) scans first.
        let state = StateBuilder::new(8, 1)
            .drone_at(1, 3, 3)
            .tile(Tile::Packet, 1, 3)
            .tile(Tile::Packet, 5, 3)
            .build();

        let obs = compass(&state);
        assert_eq!(obs[0].map(|o| o.heading), Some(Cardinal::N));
    }

    #[test]
    fn no_target_reads_none() {
        let state = StateBuilder::new(8, 1)
            .drone_at(1, 3, 3)
            .tile(Tile::Station, 2, 2)
            .build();
        assert_eq!(compass(&state), vec![None]);
    }
}
