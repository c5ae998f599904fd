//! Uniform placement of items onto empty cells.
//!
//! The spawner owns the only full-grid walk in the engine: it materializes
//! the free-cell list into a reusable buffer, then draws k cells without
//! replacement with a partial Fisher–Yates shuffle. Repeated rejection
//! sampling would degrade as the board fills; the shuffle does not.

use dropship_core::{DroneId, SpawnError, Tile};
use dropship_grid::{Cell, WorldState};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Positions chosen by one spawn call, in item order.
pub type SpawnedCells = SmallVec<[Cell; 8]>;

/// Places ground objects and respawning drones onto free cells.
///
/// Holds a reusable free-list buffer so steady-state ticking does not
/// allocate. For fixed `(state, items, rng)` the chosen positions are
/// deterministic: the free list is collected in row-major order and the
/// shuffle consumes the rng in a fixed pattern.
#[derive(Debug, Default)]
pub struct Spawner {
    free: Vec<u32>,
}

impl Spawner {
    /// Create a spawner with an empty scratch buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write each tile to a distinct cell drawn uniformly from the cells
    /// empty in **both** layers. Returns the chosen cells in item order.
    ///
    /// # Errors
    ///
    /// [`SpawnError::InsufficientSpace`] if fewer free cells exist than
    /// items. World capacity validation makes this unreachable in-tick.
    pub fn spawn_tiles<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        state: &mut WorldState,
        tiles: &[Tile],
    ) -> Result<SpawnedCells, SpawnError> {
        let side = state.side();
        self.collect_free(state, |s, c| s.free_both(c));
        let cells = self.draw(rng, side, tiles.len())?;
        for (&tile, &cell) in tiles.iter().zip(cells.iter()) {
            state.ground.set(cell, tile);
        }
        Ok(cells)
    }

    /// Place each drone index onto a cell drawn uniformly from the cells
    /// that are air-empty and not skyscrapers. A drone may land on a
    /// packet, dropzone, or station; the caller applies the landing rules.
    ///
    /// Updates the air layer and the cached positions; battery and cargo
    /// resets stay with the caller.
    ///
    /// # Errors
    ///
    /// [`SpawnError::InsufficientSpace`] as for
    /// [`spawn_tiles`](Self::spawn_tiles).
    pub fn spawn_drones<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        state: &mut WorldState,
        ids: &[DroneId],
    ) -> Result<SpawnedCells, SpawnError> {
        let side = state.side();
        self.collect_free(state, |s, c| s.free_air(c));
        let cells = self.draw(rng, side, ids.len())?;
        for (&id, &cell) in ids.iter().zip(cells.iter()) {
            state.place_drone(id, cell);
        }
        Ok(cells)
    }

    /// Fill the scratch buffer with flat indices of cells matching the
    /// predicate, in row-major order.
    fn collect_free(&mut self, state: &WorldState, pred: impl Fn(&WorldState, Cell) -> bool) {
        let side = state.side();
        self.free.clear();
        for index in 0..(side as usize) * (side as usize) {
            if pred(state, Cell::from_flat(index, side)) {
                self.free.push(index as u32);
            }
        }
    }

    /// Draw `k` cells without replacement from the collected free list.
    fn draw<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        side: u32,
        k: usize,
    ) -> Result<SpawnedCells, SpawnError> {
        if self.free.len() < k {
            return Err(SpawnError::InsufficientSpace {
                requested: k,
                available: self.free.len(),
            });
        }
        let (chosen, _) = self.free.partial_shuffle(rng, k);
        Ok(chosen
            .iter()
            .map(|&index| Cell::from_flat(index as usize, side))
            .collect())
    }
}
