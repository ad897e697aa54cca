//! The document being edited: tile grid, palette and their file paths

mod file;

pub use file::*;

use bevy::prelude::Resource;
use std::path::PathBuf;
use tile_raster_core::{TileGrid, TilePalette};

/// The open tilemap and palette
#[derive(Resource, Debug, Default)]
pub struct RasterDocument {
    pub grid: TileGrid,
    pub palette: TilePalette,
    /// File the tilemap was loaded from or last saved to
    pub tilemap_path: Option<PathBuf>,
    /// File the palette was loaded from or last saved to
    pub palette_path: Option<PathBuf>,
    /// Unsaved tilemap changes
    dirty: bool,
}

impl RasterDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the tilemap as having unsaved changes
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Display name from the tilemap path
    pub fn name(&self) -> String {
        self.tilemap_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string()
    }

    /// Reset the grid to empty and forget the tilemap path.
    ///
    /// The palette is kept.
    pub fn reset_tilemap(&mut self) {
        self.grid = TileGrid::new();
        self.tilemap_path = None;
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_name() {
        let mut document = RasterDocument::new();
        assert_eq!(document.name(), "Untitled");

        document.tilemap_path = Some(PathBuf::from("maps/cave.json"));
        assert_eq!(document.name(), "cave");
    }

    #[test]
    fn test_reset_keeps_palette() {
        let mut document = RasterDocument::new();
        document.palette.add("grass.png").unwrap();
        document.grid.set(2, 2, 1);
        document.tilemap_path = Some(PathBuf::from("a.json"));
        document.mark_dirty();

        document.reset_tilemap();
        assert_eq!(document.grid, TileGrid::new());
        assert_eq!(document.tilemap_path, None);
        assert!(!document.is_dirty());
        assert_eq!(document.palette.count(), 2);
    }
}
