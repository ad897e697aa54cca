//! Document file operations

use std::path::{Path, PathBuf};
use tile_raster_core::{
    load_palette, load_tilemap, save_palette, save_tilemap, PaletteError, PersistError,
};

use super::RasterDocument;

/// Errors raised by document operations
#[derive(Debug)]
pub enum DocumentError {
    /// Save requested with no file path set
    NoPath,
    /// A tile image that does not exist on disk
    MissingFile(PathBuf),
    Persist(PersistError),
    Palette(PaletteError),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::NoPath => write!(f, "No file path set"),
            DocumentError::MissingFile(path) => {
                write!(f, "File {} does not exist.", path.display())
            }
            DocumentError::Persist(e) => write!(f, "{}", e),
            DocumentError::Palette(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<PersistError> for DocumentError {
    fn from(e: PersistError) -> Self {
        DocumentError::Persist(e)
    }
}

impl From<PaletteError> for DocumentError {
    fn from(e: PaletteError) -> Self {
        DocumentError::Palette(e)
    }
}

impl RasterDocument {
    /// Replace the grid with a tilemap file. On error the grid is untouched.
    pub fn open_tilemap(&mut self, path: &Path) -> Result<(), DocumentError> {
        self.grid = load_tilemap(path)?;
        self.tilemap_path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    /// Save the tilemap to its current path
    pub fn save_tilemap(&mut self) -> Result<PathBuf, DocumentError> {
        let path = self.tilemap_path.clone().ok_or(DocumentError::NoPath)?;
        self.save_tilemap_as(&path)?;
        Ok(path)
    }

    /// Save the tilemap to a new path and remember it
    pub fn save_tilemap_as(&mut self, path: &Path) -> Result<(), DocumentError> {
        save_tilemap(&self.grid, path)?;
        self.tilemap_path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    /// Replace the palette with a palette file. On error the palette is untouched.
    pub fn open_palette(&mut self, path: &Path) -> Result<(), DocumentError> {
        self.palette = load_palette(path)?;
        self.palette_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save the palette to its current path
    pub fn save_palette(&mut self) -> Result<PathBuf, DocumentError> {
        let path = self.palette_path.clone().ok_or(DocumentError::NoPath)?;
        self.save_palette_as(&path)?;
        Ok(path)
    }

    /// Save the palette to a new path and remember it
    pub fn save_palette_as(&mut self, path: &Path) -> Result<(), DocumentError> {
        save_palette(&self.palette, path)?;
        self.palette_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Add a tile image to the palette. The file must exist.
    pub fn add_tile(&mut self, path: &Path) -> Result<u32, DocumentError> {
        if !path.exists() {
            return Err(DocumentError::MissingFile(path.to_path_buf()));
        }
        Ok(self.palette.add(path.to_string_lossy().to_string())?)
    }

    /// Remove a palette slot. Later slots shift down by one.
    pub fn remove_tile(&mut self, index: u32) -> Result<String, DocumentError> {
        Ok(self.palette.remove(index)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile_raster_core::TileGrid;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "tile_raster_editor_doc_{}_{}",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_save_without_path() {
        let mut document = RasterDocument::new();
        assert!(matches!(
            document.save_tilemap(),
            Err(DocumentError::NoPath)
        ));
        assert!(matches!(
            document.save_palette(),
            Err(DocumentError::NoPath)
        ));
    }

    #[test]
    fn test_save_as_then_open() {
        let path = temp_path("map.json");
        let mut document = RasterDocument::new();
        document.grid.set(5, 6, 2);
        document.mark_dirty();

        document.save_tilemap_as(&path).unwrap();
        assert!(!document.is_dirty());
        assert_eq!(document.tilemap_path.as_deref(), Some(path.as_path()));

        let mut reopened = RasterDocument::new();
        reopened.open_tilemap(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(reopened.grid.get(5, 6), 2);
    }

    #[test]
    fn test_open_invalid_keeps_grid() {
        let path = temp_path("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut document = RasterDocument::new();
        document.grid.set(1, 1, 3);
        let result = document.open_tilemap(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(DocumentError::Persist(PersistError::Parse(_)))
        ));
        assert_eq!(document.grid.get(1, 1), 3);
        assert_eq!(document.tilemap_path, None);
    }

    #[test]
    fn test_add_tile_requires_file() {
        let mut document = RasterDocument::new();
        let missing = temp_path("missing.png");
        let err = document.add_tile(&missing).unwrap_err();
        assert!(err.to_string().ends_with("does not exist."));
        assert_eq!(document.palette.count(), 1);

        let image = temp_path("stone.png");
        std::fs::write(&image, b"png").unwrap();
        assert_eq!(document.add_tile(&image).unwrap(), 1);
        std::fs::remove_file(&image).ok();
    }

    #[test]
    fn test_remove_tile_leaves_grid() {
        let mut document = RasterDocument::new();
        document.palette.add("a.png").unwrap();
        document.palette.add("b.png").unwrap();
        document.grid = TileGrid::filled(2);

        assert_eq!(document.remove_tile(1).unwrap(), "a.png");
        assert!(matches!(
            document.remove_tile(0),
            Err(DocumentError::Palette(PaletteError::ReservedSlot))
        ));
        assert_eq!(document.grid.count(2), 256);
    }
}
