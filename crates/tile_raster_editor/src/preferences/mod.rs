//! Editor preferences and persistent settings
//!
//! Stored as JSON in the platform config directory:
//! - Windows: %APPDATA%/tile_raster/tile_raster_editor/
//! - Linux: ~/.config/tile_raster_editor/
//! - macOS: ~/Library/Application Support/com.tile_raster.tile_raster_editor/

mod file;

pub use file::*;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tile_raster_core::RasterLayout;

/// Editor preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct EditorPreferences {
    /// Version for future migrations
    pub version: u32,

    // Layout
    pub raster_layout: RasterLayout,
    pub swatch_layout: RasterLayout,
    /// Added to the cursor position before mapping it to a cell
    pub pointer_offset: [f32; 2],

    // Last opened files
    pub last_tilemap: Option<String>,
    pub last_palette: Option<String>,

    // Startup behavior
    pub auto_open_last: bool,

    // Window
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            version: 1,
            raster_layout: RasterLayout::tile_raster(),
            swatch_layout: RasterLayout::swatch_board(),
            pointer_offset: [0.0, 0.0],
            last_tilemap: None,
            last_palette: None,
            auto_open_last: true,
            window_width: None,
            window_height: None,
        }
    }
}

impl EditorPreferences {
    /// Remember the last opened or saved tilemap. Returns true if it changed.
    pub fn set_last_tilemap(&mut self, path: &std::path::Path) -> bool {
        let path = Some(path.to_string_lossy().to_string());
        if self.last_tilemap == path {
            return false;
        }
        self.last_tilemap = path;
        true
    }

    /// Remember the last opened or saved palette. Returns true if it changed.
    pub fn set_last_palette(&mut self, path: &std::path::Path) -> bool {
        let path = Some(path.to_string_lossy().to_string());
        if self.last_palette == path {
            return false;
        }
        self.last_palette = path;
        true
    }

    pub fn last_tilemap_path(&self) -> Option<PathBuf> {
        self.last_tilemap.as_ref().map(PathBuf::from)
    }

    pub fn last_palette_path(&self) -> Option<PathBuf> {
        self.last_palette.as_ref().map(PathBuf::from)
    }

    /// Remember the window size for the next launch. Returns true if it changed.
    pub fn set_window_size(&mut self, width: f32, height: f32) -> bool {
        let size = (Some(width), Some(height));
        if (self.window_width, self.window_height) == size {
            return false;
        }
        self.window_width = size.0;
        self.window_height = size.1;
        true
    }

    /// Cursor position with the configured offset applied
    pub fn pointer_position(&self, cursor: [f32; 2]) -> [f32; 2] {
        [
            cursor[0] + self.pointer_offset[0],
            cursor[1] + self.pointer_offset[1],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_set_last_tilemap() {
        let mut preferences = EditorPreferences::default();
        assert!(preferences.set_last_tilemap(Path::new("maps/a.json")));
        assert!(!preferences.set_last_tilemap(Path::new("maps/a.json")));
        assert_eq!(
            preferences.last_tilemap_path(),
            Some(PathBuf::from("maps/a.json"))
        );
    }

    #[test]
    fn test_set_window_size() {
        let mut preferences = EditorPreferences::default();
        assert!(preferences.set_window_size(1280.0, 720.0));
        assert!(!preferences.set_window_size(1280.0, 720.0));
        assert_eq!(preferences.window_width, Some(1280.0));
        assert_eq!(preferences.window_height, Some(720.0));
    }

    #[test]
    fn test_pointer_offset() {
        let mut preferences = EditorPreferences::default();
        assert_eq!(preferences.pointer_position([10.0, 20.0]), [10.0, 20.0]);

        preferences.pointer_offset = [-16.0, -16.0];
        assert_eq!(preferences.pointer_position([10.0, 20.0]), [-6.0, 4.0]);
    }
}
