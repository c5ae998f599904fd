//! Complete world state: both layers plus the drone side arrays.

use crate::air::AirGrid;
use crate::cell::Cell;
use crate::error::InvariantError;
use crate::ground::GroundGrid;
use dropship_core::{DroneId, Tile, FULL_CHARGE, NO_DRONE};

/// The full simulation state for one environment.
///
/// Drone `i ∈ [1, D]` owns slot `i − 1` of each side array. The
/// `positions` array mirrors the air layer so the tick resolver can walk
/// all drones in O(D) without scanning the grid; [`check`](Self::check)
/// audits that the mirror never drifts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldState {
    /// Drone occupancy layer.
    pub air: AirGrid,
    /// Object tag layer.
    pub ground: GroundGrid,
    /// Cached position of each drone, indexed by `id − 1`.
    pub positions: Vec<Cell>,
    /// Whether each drone holds a package.
    pub carrying: Vec<bool>,
    /// Battery percent of each drone, in `[0, 100]`.
    pub charge: Vec<u8>,
}

impl WorldState {
    /// A state with empty layers and D unplaced drones at full charge.
    ///
    /// The caller (reset, or a test builder) must place every drone before
    /// the state is legal; [`check`](Self::check) fails until then.
    pub fn empty(side: u32, n_drones: usize) -> Self {
        Self {
            air: AirGrid::new(side),
            ground: GroundGrid::new(side),
            positions: vec![Cell::default(); n_drones],
            carrying: vec![false; n_drones],
            charge: vec![FULL_CHARGE; n_drones],
        }
    }

    /// Grid side length N.
    pub fn side(&self) -> u32 {
        self.air.side()
    }

    /// Number of drones D.
    pub fn n_drones(&self) -> usize {
        self.positions.len()
    }

    /// Whether `cell` is empty in **both** layers. This is the spawn
    /// predicate for ground objects.
    pub fn free_both(&self, cell: Cell) -> bool {
        self.air.is_empty_at(cell) && self.ground.get(cell).is_empty()
    }

    /// Whether a drone may respawn at `cell`: air-empty and not a
    /// skyscraper. Packets, dropzones, and stations are fair landing
    /// spots — landing on a packet triggers the silent pickup rule.
    pub fn free_air(&self, cell: Cell) -> bool {
        self.air.is_empty_at(cell) && self.ground.get(cell) != Tile::Skyscraper
    }

    /// Write drone `id` into the air layer at `cell` and update its
    /// cached position.
    pub fn place_drone(&mut self, id: DroneId, cell: Cell) {
        self.air.set(cell, id);
        self.positions[(id - 1) as usize] = cell;
    }

    /// Audit every structural invariant. Intended for tests and debug
    /// assertions; the engine never needs it on the hot path.
    pub fn check(&self) -> Result<(), InvariantError> {
        if self.air.side() != self.ground.side() {
            return Err(InvariantError::SideMismatch {
                air: self.air.side(),
                ground: self.ground.side(),
            });
        }
        let d = self.positions.len();
        if self.carrying.len() != d || self.charge.len() != d {
            return Err(InvariantError::ArrayLenMismatch {
                positions: d,
                carrying: self.carrying.len(),
                charge: self.charge.len(),
            });
        }

        // Every air cell holds a known index, and each index only once.
        let mut seen: Vec<Option<Cell>> = vec![None; d];
        for (cell, value) in self.air.iter_drones() {
            if value == NO_DRONE || value as usize > d {
                return Err(InvariantError::UnknownDroneIndex { cell, value });
            }
            let slot = &mut seen[(value - 1) as usize];
            match slot {
                Some(first) => {
                    return Err(InvariantError::DuplicateDrone {
                        id: value,
                        first: *first,
                        second: cell,
                    });
                }
                None => *slot = Some(cell),
            }
        }

        // The cached positions agree with the air layer.
        for i in 0..d {
            let id = (i + 1) as DroneId;
            let cell = self.positions[i];
            if !cell.in_bounds(self.side()) {
                return Err(InvariantError::PositionOutOfBounds { id, cell });
            }
            let found = self.air.get(cell);
            if found != id {
                return Err(InvariantError::PositionMismatch {
                    id,
                    cached: cell,
                    found,
                });
            }
            if self.ground.get(cell) == Tile::Skyscraper {
                return Err(InvariantError::DroneOnSkyscraper { id, cell });
            }
            if self.charge[i] > FULL_CHARGE {
                return Err(InvariantError::ChargeOutOfRange {
                    id,
                    charge: self.charge[i],
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_drone_state() -> WorldState {
        let mut state = WorldState::empty(4, 2);
        state.place_drone(1, Cell::new(0, 0));
        state.place_drone(2, Cell::new(3, 3));
        state
    }

    #[test]
    fn placed_drones_pass_the_audit() {
        let state = two_drone_state();
        assert_eq!(state.check(), Ok(()));
    }

    #[test]
    fn unplaced_drones_fail_the_audit() {
        let state = WorldState::empty(4, 1);
        assert!(matches!(
            state.check(),
            Err(InvariantError::PositionMismatch { id: 1, .. })
        ));
    }

    #[test]
    fn stale_position_mirror_is_caught() {
        let mut state = two_drone_state();
        state.positions[0] = Cell::new(1, 1); // air still holds (0,0)
        assert!(matches!(
            state.check(),
            Err(InvariantError::PositionMismatch { id: 1, .. })
        ));
    }

    #[test]
    fn duplicate_air_index_is_caught() {
        let mut state = two_drone_state();
        state.air.set(Cell::new(2, 2), 1);
        assert!(matches!(
            state.check(),
            Err(InvariantError::DuplicateDrone { id: 1, .. })
        ));
    }

    #[test]
    fn drone_on_skyscraper_is_caught() {
        let mut state = two_drone_state();
        state.ground.set(Cell::new(0, 0), Tile::Skyscraper);
        assert!(matches!(
            state.check(),
            Err(InvariantError::DroneOnSkyscraper { id: 1, .. })
        ));
    }

    #[test]
    fn spawn_predicates() {
        let mut state = two_drone_state();
        state.ground.set(Cell::new(1, 1), Tile::Packet);
        state.ground.set(Cell::new(2, 2), Tile::Skyscraper);

        // (0,0) has a drone: free in neither sense.
        assert!(!state.free_both(Cell::new(0, 0)));
        assert!(!state.free_air(Cell::new(0, 0)));
        // (1,1) has a packet: not ground-free, but a drone may land there.
        assert!(!state.free_both(Cell::new(1, 1)));
        assert!(state.free_air(Cell::new(1, 1)));
        // (2,2) skyscraper: free in neither sense.
        assert!(!state.free_both(Cell::new(2, 2)));
        assert!(!state.free_air(Cell::new(2, 2)));
        // (1,2) empty everywhere.
        assert!(state.free_both(Cell::new(1, 2)));
        assert!(state.free_air(Cell::new(1, 2)));
    }
}
