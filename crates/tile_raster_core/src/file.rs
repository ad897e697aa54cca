//! Tilemap and palette file save/load
//!
//! Both files are JSON. A load that fails (unreadable, unparsable, or
//! breaking a grid/palette invariant) returns an error and leaves nothing
//! half-applied; callers keep their current state.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PersistError;
use crate::grid::TileGrid;
use crate::palette::{TilePalette, PALETTE_SLOTS};

/// On-disk shape of a tilemap: column-major palette indices (`tile_data[x][y]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilemapFile {
    pub tile_data: Vec<Vec<u32>>,
}

impl TilemapFile {
    pub fn from_grid(grid: &TileGrid) -> Self {
        Self {
            tile_data: grid.columns(),
        }
    }

    /// Validate shape and index range, producing a grid
    pub fn into_grid(self) -> Result<TileGrid, PersistError> {
        let grid = TileGrid::from_columns(&self.tile_data).ok_or_else(|| {
            PersistError::Invalid("tile data must be 16 columns of 16 cells".to_string())
        })?;

        if let Some((x, y, index)) = grid.cells().find(|(_, _, i)| *i >= PALETTE_SLOTS) {
            return Err(PersistError::Invalid(format!(
                "tile ({}, {}) has index {}, palette has {} slots",
                x, y, index, PALETTE_SLOTS
            )));
        }

        Ok(grid)
    }
}

/// Parse a tilemap from a JSON string
pub fn parse_tilemap(json: &str) -> Result<TileGrid, PersistError> {
    let file: TilemapFile =
        serde_json::from_str(json).map_err(|e| PersistError::Parse(e.to_string()))?;
    file.into_grid()
}

/// Load a tilemap from a JSON file
pub fn load_tilemap(path: &Path) -> Result<TileGrid, PersistError> {
    let content = std::fs::read_to_string(path).map_err(|e| PersistError::Io(e.to_string()))?;
    parse_tilemap(&content)
}

/// Save a tilemap to a JSON file
pub fn save_tilemap(grid: &TileGrid, path: &Path) -> Result<(), PersistError> {
    let content = serde_json::to_string_pretty(&TilemapFile::from_grid(grid))
        .map_err(|e| PersistError::Serialize(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| PersistError::Io(e.to_string()))?;

    Ok(())
}

/// Parse a palette from a JSON string
pub fn parse_palette(json: &str) -> Result<TilePalette, PersistError> {
    let palette: TilePalette =
        serde_json::from_str(json).map_err(|e| PersistError::Parse(e.to_string()))?;

    palette.validate()?;

    Ok(palette)
}

/// Load a palette from a JSON file
pub fn load_palette(path: &Path) -> Result<TilePalette, PersistError> {
    let content = std::fs::read_to_string(path).map_err(|e| PersistError::Io(e.to_string()))?;
    parse_palette(&content)
}

/// Save a palette to a JSON file.
///
/// Refused while any slot points at a missing image.
pub fn save_palette(palette: &TilePalette, path: &Path) -> Result<(), PersistError> {
    if let Some(first) = palette.missing_sources().into_iter().next() {
        return Err(PersistError::Invalid(first));
    }

    let content = serde_json::to_string_pretty(palette)
        .map_err(|e| PersistError::Serialize(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| PersistError::Io(e.to_string()))?;

    Ok(())
}
