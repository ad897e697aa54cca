//! Tile palette: 64 image slots laid out on an 8x8 swatch board

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PaletteError, PersistError};
use crate::grid::EMPTY_TILE;

/// Number of palette slots
pub const PALETTE_SLOTS: u32 = 64;

/// Rows and columns of the swatch board
pub const BOARD_SIZE: u32 = 8;

/// Linear slot index for a swatch board position
pub fn slot_index(row: u32, col: u32) -> u32 {
    row * BOARD_SIZE + col
}

/// Swatch board position `(row, col)` for a linear slot index
pub fn board_position(index: u32) -> (u32, u32) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Maps slot indices to tile image sources.
///
/// Slot 0 is always the eraser and has no source. Occupied slots are dense:
/// `0..count` are in use, everything at or above `count` is empty.
///
/// Removing a slot shifts every slot above it down by one. Grid cells that
/// referenced the shifted slots are not remapped and will show the tile that
/// moved into their old index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePalette {
    /// Image path per slot; empty string means no image
    paths: Vec<String>,
    /// Number of slots in use, including the eraser
    count: u32,
}

impl Default for TilePalette {
    fn default() -> Self {
        Self {
            paths: vec![String::new(); PALETTE_SLOTS as usize],
            count: 1,
        }
    }
}

impl TilePalette {
    /// Create a palette holding only the eraser
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots in use, including the eraser
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_full(&self) -> bool {
        self.count >= PALETTE_SLOTS
    }

    /// Returns true if `index` refers to a slot in use
    pub fn contains(&self, index: u32) -> bool {
        index < self.count
    }

    /// Image source for a slot, or `None` for the eraser and empty slots
    pub fn source(&self, index: u32) -> Option<&str> {
        self.paths
            .get(index as usize)
            .map(String::as_str)
            .filter(|path| !path.is_empty())
    }

    /// Slots in use as `(index, source)`; the eraser has an empty source
    pub fn entries(&self) -> impl Iterator<Item = (u32, &str)> {
        self.paths
            .iter()
            .take(self.count as usize)
            .enumerate()
            .map(|(i, path)| (i as u32, path.as_str()))
    }

    /// Append a tile image. Returns its slot index.
    pub fn add(&mut self, path: impl Into<String>) -> Result<u32, PaletteError> {
        let path = path.into();
        if path.is_empty() {
            return Err(PaletteError::EmptyPath);
        }
        if self.is_full() {
            return Err(PaletteError::Full(PALETTE_SLOTS));
        }

        let index = self.count;
        self.paths[index as usize] = path;
        self.count += 1;
        Ok(index)
    }

    /// Remove a slot, shifting every later slot down by one.
    ///
    /// Any captured index above `index` is stale afterwards.
    pub fn remove(&mut self, index: u32) -> Result<String, PaletteError> {
        if index >= PALETTE_SLOTS {
            return Err(PaletteError::OutOfRange(index));
        }
        if index == EMPTY_TILE {
            return Err(PaletteError::ReservedSlot);
        }
        if index >= self.count || self.paths[index as usize].is_empty() {
            return Err(PaletteError::EmptySlot(index));
        }

        let removed = self.paths.remove(index as usize);
        self.paths.push(String::new());
        self.count -= 1;
        Ok(removed)
    }

    /// Messages for every slot whose image file does not exist
    pub fn missing_sources(&self) -> Vec<String> {
        self.entries()
            .filter(|(_, path)| !path.is_empty() && !Path::new(path).exists())
            .map(|(i, path)| format!("Slot {}: file {} does not exist", i, path))
            .collect()
    }

    /// Check the palette invariants after deserializing
    pub fn validate(&self) -> Result<(), PersistError> {
        if self.paths.len() != PALETTE_SLOTS as usize {
            return Err(PersistError::Invalid(format!(
                "palette has {} slots, expected {}",
                self.paths.len(),
                PALETTE_SLOTS
            )));
        }
        if self.count == 0 || self.count > PALETTE_SLOTS {
            return Err(PersistError::Invalid(format!(
                "palette count {} is out of range",
                self.count
            )));
        }
        if !self.paths[0].is_empty() {
            return Err(PersistError::Invalid(
                "slot 0 is reserved for the eraser".to_string(),
            ));
        }
        if let Some(i) = self.paths[1..self.count as usize]
            .iter()
            .position(|p| p.is_empty())
        {
            return Err(PersistError::Invalid(format!("slot {} is empty", i + 1)));
        }
        if let Some(i) = self.paths[self.count as usize..]
            .iter()
            .position(|p| !p.is_empty())
        {
            return Err(PersistError::Invalid(format!(
                "slot {} is set beyond the palette count",
                i + self.count as usize
            )));
        }
        Ok(())
    }
}
