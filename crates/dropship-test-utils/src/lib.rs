//! Test utilities and fixtures for Dropship development.
//!
//! [`StateBuilder`] constructs hand-placed worlds without going through
//! the spawner, so scenario tests control exactly where everything sits.
//! [`fixtures`] holds the canonical boards the scenario suite is written
//! against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use dropship_core::{DroneId, Tile};
use dropship_grid::{Cell, WorldState};

/// Builder for hand-placed world states.
///
/// Every drone in `1..=n_drones` must be placed with
/// [`drone_at`](StateBuilder::drone_at) before [`build`](StateBuilder::build),
/// or the resulting state fails its own invariant audit.
pub struct StateBuilder {
    state: WorldState,
}

impl StateBuilder {
    pub fn new(side: u32, n_drones: usize) -> Self {
        Self {
            state: WorldState::empty(side, n_drones),
        }
    }

    /// Place drone `id` at `(y, x)`.
    pub fn drone_at(mut self, id: DroneId, y: i32, x: i32) -> Self {
        self.state.place_drone(id, Cell::new(y, x));
        self
    }

    /// Put a ground tile at `(y, x)`.
    pub fn tile(mut self, tile: Tile, y: i32, x: i32) -> Self {
        self.state.ground.set(Cell::new(y, x), tile);
        self
    }

    /// Set drone `id`'s battery.
    pub fn charge(mut self, id: DroneId, charge: u8) -> Self {
        self.state.charge[(id - 1) as usize] = charge;
        self
    }

    /// Mark drone `id` as holding a package.
    pub fn carrying(mut self, id: DroneId) -> Self {
        self.state.carrying[(id - 1) as usize] = true;
        self
    }

    pub fn build(self) -> WorldState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_a_legal_state() {
        let state = StateBuilder::new(8, 2)
            .drone_at(1, 3, 1)
            .drone_at(2, 3, 3)
            .tile(Tile::Packet, 4, 4)
            .charge(2, 50)
            .carrying(1)
            .build();

        assert_eq!(state.check(), Ok(()));
        assert_eq!(state.positions[0], Cell::new(3, 1));
        assert_eq!(state.charge[1], 50);
        assert!(state.carrying[0]);
        assert_eq!(state.ground.get(Cell::new(4, 4)), Tile::Packet);
    }
}
