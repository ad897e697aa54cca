//! Screen-space layout for the tile raster and the swatch board
//!
//! Pointer positions are in window pixels. A cell `(x, y)` is centered on
//! `origin + (x, y) * cell_size`, so mapping a position back to a cell rounds
//! to the nearest center.

use serde::{Deserialize, Serialize};

use crate::grid::GRID_SIZE;
use crate::palette::BOARD_SIZE;

/// A grid of square cells placed in window space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterLayout {
    /// Center of cell (0, 0)
    pub origin: [f32; 2],
    /// Cell edge length in pixels
    pub cell_size: f32,
    pub columns: u32,
    pub rows: u32,
}

impl Default for RasterLayout {
    fn default() -> Self {
        Self::tile_raster()
    }
}

impl RasterLayout {
    /// Default placement of the 16x16 tile raster
    pub fn tile_raster() -> Self {
        Self {
            origin: [882.0, 45.0],
            cell_size: 64.0,
            columns: GRID_SIZE,
            rows: GRID_SIZE,
        }
    }

    /// Default placement of the 8x8 swatch board
    pub fn swatch_board() -> Self {
        Self {
            origin: [44.0, 44.0],
            cell_size: 64.0,
            columns: BOARD_SIZE,
            rows: BOARD_SIZE,
        }
    }

    /// Map a pointer position to cell coordinates: `round((pos - origin) / cell_size)`.
    ///
    /// The result may be out of bounds; check it with [`RasterLayout::contains_cell`].
    pub fn screen_to_cell(&self, pos: [f32; 2]) -> (i32, i32) {
        let x = ((pos[0] - self.origin[0]) / self.cell_size).round();
        let y = ((pos[1] - self.origin[1]) / self.cell_size).round();
        (x as i32, y as i32)
    }

    /// Bounds predicate for cell coordinates
    pub fn contains_cell(&self, cell: (i32, i32)) -> bool {
        cell.0 >= 0 && cell.1 >= 0 && cell.0 < self.columns as i32 && cell.1 < self.rows as i32
    }

    /// Map a pointer position to an in-bounds cell
    pub fn cell_at(&self, pos: [f32; 2]) -> Option<(u32, u32)> {
        let cell = self.screen_to_cell(pos);
        self.contains_cell(cell).then(|| (cell.0 as u32, cell.1 as u32))
    }

    /// Center of a cell in window space
    pub fn cell_center(&self, x: u32, y: u32) -> [f32; 2] {
        [
            self.origin[0] + x as f32 * self.cell_size,
            self.origin[1] + y as f32 * self.cell_size,
        ]
    }

    /// Pixel rectangle covered by the cells, as `(min, max)` corners
    pub fn pixel_rect(&self) -> ([f32; 2], [f32; 2]) {
        let half = self.cell_size * 0.5;
        (
            [self.origin[0] - half, self.origin[1] - half],
            [
                self.origin[0] + (self.columns as f32 - 0.5) * self.cell_size,
                self.origin[1] + (self.rows as f32 - 0.5) * self.cell_size,
            ],
        )
    }

    /// Whether a raw pointer position lies strictly between the centers of the
    /// first cell and the far edge of the last one.
    pub fn contains_point(&self, pos: [f32; 2]) -> bool {
        let (_, max) = self.pixel_rect();
        pos[0] > self.origin[0] && pos[0] < max[0] && pos[1] > self.origin[1] && pos[1] < max[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell() {
        let layout = RasterLayout::tile_raster();
        assert_eq!(layout.screen_to_cell([946.0, 109.0]), (1, 1));
        assert_eq!(layout.screen_to_cell([882.0, 45.0]), (0, 0));
        // Rounds to the nearest cell center
        assert_eq!(layout.screen_to_cell([913.0, 45.0]), (0, 0));
        assert_eq!(layout.screen_to_cell([915.0, 45.0]), (1, 0));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let layout = RasterLayout::tile_raster();
        let cell = layout.screen_to_cell([2000.0, 2000.0]);
        assert!(!layout.contains_cell(cell));
        assert_eq!(layout.cell_at([2000.0, 2000.0]), None);
        assert_eq!(layout.cell_at([10.0, 10.0]), None);
        assert_eq!(layout.cell_at([946.0, 109.0]), Some((1, 1)));
    }

    #[test]
    fn test_cell_center_round_trips() {
        let layout = RasterLayout::tile_raster();
        for x in 0..16 {
            for y in 0..16 {
                assert_eq!(layout.cell_at(layout.cell_center(x, y)), Some((x, y)));
            }
        }
    }

    #[test]
    fn test_contains_point() {
        let layout = RasterLayout::tile_raster();
        assert!(layout.contains_point([900.0, 100.0]));
        assert!(!layout.contains_point([882.0, 100.0]));
        assert!(!layout.contains_point([1900.0, 100.0]));
        assert!(!layout.contains_point([900.0, 1100.0]));
    }

    #[test]
    fn test_swatch_board_layout() {
        let board = RasterLayout::swatch_board();
        assert_eq!(board.cell_at([44.0, 44.0]), Some((0, 0)));
        assert_eq!(board.cell_at([44.0 + 7.0 * 64.0, 44.0]), Some((7, 0)));
        assert_eq!(board.cell_at([44.0 + 8.0 * 64.0, 44.0]), None);
    }
}
