//! Fixed-size tile grid storing palette indices

use serde::{Deserialize, Serialize};

/// Width and height of every tile grid
pub const GRID_SIZE: u32 = 16;

/// Palette index reserved for the eraser / empty tile
pub const EMPTY_TILE: u32 = 0;

/// A 16x16 raster of palette indices.
///
/// Cells are addressed as `(x, y)` and stored column-major, the same order the
/// tilemap file uses. `get` and `set` do not check bounds; callers go through
/// [`TileGrid::contains`] (or [`crate::RasterLayout`]) first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    cells: [[u32; GRID_SIZE as usize]; GRID_SIZE as usize],
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::filled(EMPTY_TILE)
    }
}

impl TileGrid {
    /// Create an empty grid (every cell set to the eraser)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid with every cell set to `index`
    pub fn filled(index: u32) -> Self {
        Self {
            cells: [[index; GRID_SIZE as usize]; GRID_SIZE as usize],
        }
    }

    /// Bounds predicate over signed cell coordinates
    pub fn contains(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < GRID_SIZE as i32 && y < GRID_SIZE as i32
    }

    /// Get the palette index at a cell
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.cells[x as usize][y as usize]
    }

    /// Set the palette index at a cell. Unconditional; recording history is the caller's job.
    pub fn set(&mut self, x: u32, y: u32, index: u32) {
        self.cells[x as usize][y as usize] = index;
    }

    /// Overwrite every cell with `index`
    pub fn fill_all(&mut self, index: u32) {
        for column in self.cells.iter_mut() {
            column.fill(index);
        }
    }

    /// Iterate `(x, y, index)` in column-major order
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, index)| (x as u32, y as u32, *index))
        })
    }

    /// Column-major copy of the cells (`columns()[x][y]`)
    pub fn columns(&self) -> Vec<Vec<u32>> {
        self.cells.iter().map(|column| column.to_vec()).collect()
    }

    /// Build a grid from column-major data.
    ///
    /// Returns `None` if the data is not exactly 16 columns of 16 cells.
    pub fn from_columns(columns: &[Vec<u32>]) -> Option<Self> {
        if columns.len() != GRID_SIZE as usize {
            return None;
        }

        let mut grid = Self::new();
        for (x, column) in columns.iter().enumerate() {
            if column.len() != GRID_SIZE as usize {
                return None;
            }
            grid.cells[x].copy_from_slice(column);
        }
        Some(grid)
    }

    /// Number of cells holding `index`
    pub fn count(&self, index: u32) -> usize {
        self.cells().filter(|(_, _, i)| *i == index).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = TileGrid::new();
        assert_eq!(grid.count(EMPTY_TILE), 256);
        assert_eq!(grid.cells().count(), 256);
    }

    #[test]
    fn test_get_set() {
        let mut grid = TileGrid::new();
        grid.set(3, 7, 5);
        assert_eq!(grid.get(3, 7), 5);
        assert_eq!(grid.get(7, 3), EMPTY_TILE);

        grid.set(3, 7, 2);
        assert_eq!(grid.get(3, 7), 2);
    }

    #[test]
    fn test_contains() {
        assert!(TileGrid::contains(0, 0));
        assert!(TileGrid::contains(15, 15));
        assert!(!TileGrid::contains(-1, 0));
        assert!(!TileGrid::contains(0, 16));
        assert!(!TileGrid::contains(16, 3));
    }

    #[test]
    fn test_columns_are_column_major() {
        let mut grid = TileGrid::new();
        grid.set(2, 9, 4);

        let columns = grid.columns();
        assert_eq!(columns.len(), 16);
        assert_eq!(columns[2][9], 4);

        let rebuilt = TileGrid::from_columns(&columns).unwrap();
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn test_from_columns_rejects_wrong_shape() {
        let short = vec![vec![0; 16]; 15];
        assert!(TileGrid::from_columns(&short).is_none());

        let mut ragged = vec![vec![0; 16]; 16];
        ragged[4].pop();
        assert!(TileGrid::from_columns(&ragged).is_none());
    }

    #[test]
    fn test_fill_all() {
        let mut grid = TileGrid::filled(3);
        assert_eq!(grid.count(3), 256);

        grid.fill_all(EMPTY_TILE);
        assert_eq!(grid, TileGrid::new());
    }
}
