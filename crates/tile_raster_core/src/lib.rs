//! Core data structures and algorithms for tile_raster
//!
//! This crate is engine-free and provides:
//! - `TileGrid` - The fixed 16x16 raster of palette indices
//! - `TilePalette` - 64 tile image slots on an 8x8 swatch board
//! - `EditRecord` - Invertible cell edits and nested edit batches
//! - `EditHistory` - Linear undo/redo stacks
//! - `BrushEngine` - Paint/erase strokes and flood fill
//! - `RasterLayout` - Pointer position to cell mapping
//! - Tilemap and palette file save/load
//!
//! # Example
//!
//! ```rust
//! use tile_raster_core::{BrushEngine, BrushMode, EditHistory, PointerEvent, Swatch, TileGrid};
//!
//! let mut grid = TileGrid::new();
//! let mut history = EditHistory::new();
//! let mut brush = BrushEngine::new();
//! brush.set_mode(BrushMode::Fill);
//! brush.set_swatch(Swatch { index: 7, source: String::new() });
//!
//! brush.handle(PointerEvent::Down, (0, 0), &mut grid, &mut history);
//! assert_eq!(grid.count(7), 256);
//!
//! history.undo(&mut grid);
//! assert_eq!(grid, TileGrid::new());
//! ```

mod brush;
mod edit;
mod error;
mod file;
mod grid;
mod history;
mod layout;
mod palette;

pub use brush::{
    flood_fill, inspect, paint_cell, BrushEngine, BrushMode, BrushOutcome, PointerEvent, Swatch,
};
pub use edit::{EditBatch, EditRecord, TileEdit};
pub use error::{PaletteError, PersistError};
pub use file::{
    load_palette, load_tilemap, parse_palette, parse_tilemap, save_palette, save_tilemap,
    TilemapFile,
};
pub use grid::{TileGrid, EMPTY_TILE, GRID_SIZE};
pub use history::EditHistory;
pub use layout::RasterLayout;
pub use palette::{board_position, slot_index, TilePalette, BOARD_SIZE, PALETTE_SLOTS};
