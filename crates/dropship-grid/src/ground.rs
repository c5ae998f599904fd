//! The ground layer: object tags.

use crate::cell::Cell;
use dropship_core::Tile;

/// Dense N×N layer of [`Tile`] tags, at most one object per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroundGrid {
    side: u32,
    tiles: Vec<Tile>,
}

impl GroundGrid {
    /// Create an all-[`Tile::Empty`] ground layer for an N×N grid.
    pub fn new(side: u32) -> Self {
        Self {
            side,
            tiles: vec![Tile::Empty; (side as usize) * (side as usize)],
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

    /// The tile at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn get(&self, cell: Cell) -> Tile {
        self.tiles[cell.flat(self.side)]
    }

    /// Write a tile at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn set(&mut self, cell: Cell, tile: Tile) {
        let idx = cell.flat(self.side);
        self.tiles[idx] = tile;
    }

    /// Number of cells holding the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate `(cell, tile)` over non-empty cells in row-major order.
    pub fn iter_objects(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.tiles.iter().enumerate().filter_map(move |(i, &t)| {
            (!t.is_empty()).then(|| (Cell::from_flat(i, self.side), t))
        })
    }

    /// Raw row-major slice of the layer.
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_and_count() {
        let mut ground = GroundGrid::new(4);
        assert_eq!(ground.count(Tile::Empty), 16);
        ground.set(Cell::new(1, 1), Tile::Packet);
        ground.set(Cell::new(2, 2), Tile::Station);
        assert_eq!(ground.get(Cell::new(1, 1)), Tile::Packet);
        assert_eq!(ground.count(Tile::Packet), 1);
        assert_eq!(ground.count(Tile::Empty), 14);
    }

    #[test]
    fn iter_objects_skips_empty() {
        let mut ground = GroundGrid::new(3);
        ground.set(Cell::new(0, 2), Tile::Dropzone);
        ground.set(Cell::new(2, 1), Tile::Skyscraper);
        let found: Vec<_> = ground.iter_objects().collect();
        assert_eq!(
            found,
            vec![
                (Cell::new(0, 2), Tile::Dropzone),
                (Cell::new(2, 1), Tile::Skyscraper),
            ]
        );
    }
}
