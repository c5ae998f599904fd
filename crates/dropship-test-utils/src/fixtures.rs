//! Canonical boards for the scenario suite.
//!
//! All fixtures use an 8×8 grid and leave the spawner out of the picture:
//! every object is hand-placed so tests can assert exact outcomes.

use crate::StateBuilder;
use dropship_core::Tile;
use dropship_grid::WorldState;

/// One drone at `(3, 3)`, empty ground. Movement scenarios.
pub fn single_drone() -> WorldState {
    StateBuilder::new(8, 1).drone_at(1, 3, 3).build()
}

/// Drones at `(3, 1)` and `(3, 3)`, empty ground. Head-on collisions.
pub fn dual_drones() -> WorldState {
    StateBuilder::new(8, 2)
        .drone_at(1, 3, 1)
        .drone_at(2, 3, 3)
        .build()
}

/// One drone at `(3, 3)` with a packet at `(3, 4)` and a dropzone at
/// `(3, 5)`. Pickup-then-deliver.
pub fn packet_run() -> WorldState {
    StateBuilder::new(8, 1)
        .drone_at(1, 3, 3)
        .tile(Tile::Packet, 3, 4)
        .tile(Tile::Dropzone, 3, 5)
        .build()
}

/// Drones at `(3, 0)` and `(3, 3)` with a skyscraper at `(3, 4)`.
pub fn skyscraper_row() -> WorldState {
    StateBuilder::new(8, 2)
        .drone_at(1, 3, 0)
        .drone_at(2, 3, 3)
        .tile(Tile::Skyscraper, 3, 4)
        .build()
}

/// Three drones with charges `[50, 50, 10]` and a station at `(3, 4)`:
/// drone 1 at `(3, 0)` flying free, drone 2 at `(3, 3)` about to land on
/// the station, drone 3 at `(0, 0)` about to drain out.
pub fn charge_trio() -> WorldState {
    StateBuilder::new(8, 3)
        .drone_at(1, 3, 0)
        .drone_at(2, 3, 3)
        .drone_at(3, 0, 0)
        .tile(Tile::Station, 3, 4)
        .charge(1, 50)
        .charge(2, 50)
        .charge(3, 10)
        .build()
}

/// Drones at `(3, 1)` and `(3, 3)` with one packet at `(4, 4)`. Crashing
/// the drones into each other exercises respawn-onto-packet behavior.
pub fn respawn_bait() -> WorldState {
    StateBuilder::new(8, 2)
        .drone_at(1, 3, 1)
        .drone_at(2, 3, 3)
        .tile(Tile::Packet, 4, 4)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fixtures_are_legal_states() {
        for state in [
            single_drone(),
            dual_drones(),
            packet_run(),
            skyscraper_row(),
            charge_trio(),
            respawn_bait(),
        ] {
            assert_eq!(state.check(), Ok(()));
        }
    }
}
