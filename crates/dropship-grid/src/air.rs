//! The air layer: drone occupancy.

use crate::cell::Cell;
use dropship_core::{DroneId, NO_DRONE};

/// Dense N×N layer of drone indices.
///
/// Each live drone index `1..=D` appears in exactly one cell; every other
/// cell holds [`NO_DRONE`]. The layer itself does not enforce uniqueness —
/// that is the engine's job, audited by
/// [`WorldState::check`](crate::WorldState::check).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AirGrid {
    side: u32,
    slots: Vec<DroneId>,
}

impl AirGrid {
    /// Create an empty air layer for an N×N grid.
    pub fn new(side: u32) -> Self {
        Self {
            side,
            slots: vec![NO_DRONE; (side as usize) * (side as usize)],
        }
    }

    /// Grid side length N.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.side)
    }

    /// The drone index at `cell`, or [`NO_DRONE`].
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn get(&self, cell: Cell) -> DroneId {
        self.slots[cell.flat(self.side)]
    }

    /// Write a drone index (or [`NO_DRONE`]) at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn set(&mut self, cell: Cell, id: DroneId) {
        let idx = cell.flat(self.side);
        self.slots[idx] = id;
    }

    /// Whether no drone occupies `cell`.
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.get(cell) == NO_DRONE
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|&&v| v != NO_DRONE).count()
    }

    /// Iterate `(cell, drone_id)` over occupied cells in row-major order.
    pub fn iter_drones(&self) -> impl Iterator<Item = (Cell, DroneId)> + '_ {
        self.slots.iter().enumerate().filter_map(move |(i, &v)| {
            (v != NO_DRONE).then(|| (Cell::from_flat(i, self.side), v))
        })
    }

    /// Raw row-major slice of the layer.
    pub fn as_slice(&self) -> &[DroneId] {
        &self.slots
    }
}
