//! Preferences file load/save

use bevy::log::warn;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use super::EditorPreferences;

const PREFERENCES_FILE: &str = "preferences.json";

/// Errors that can occur when reading or writing preferences
#[derive(Debug)]
pub enum PreferencesError {
    /// The platform has no config directory
    NoConfigDir,
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferencesError::NoConfigDir => write!(f, "No config directory available"),
            PreferencesError::Io(e) => write!(f, "IO error: {}", e),
            PreferencesError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for PreferencesError {}

impl From<std::io::Error> for PreferencesError {
    fn from(e: std::io::Error) -> Self {
        PreferencesError::Io(e)
    }
}

impl From<serde_json::Error> for PreferencesError {
    fn from(e: serde_json::Error) -> Self {
        PreferencesError::Json(e)
    }
}

impl EditorPreferences {
    /// Platform-specific config directory for the editor
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tile_raster", "tile_raster_editor")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Full path of the preferences file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(PREFERENCES_FILE))
    }

    /// Load preferences, falling back to defaults if missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(preferences) => preferences,
            Err(e) => {
                warn!("Failed to load preferences from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load preferences from a specific file
    pub fn load_from(path: &Path) -> Result<Self, PreferencesError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save preferences to the config directory
    pub fn save(&self) -> Result<(), PreferencesError> {
        let path = Self::config_path().ok_or(PreferencesError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.save_to(&path)
    }

    /// Save preferences to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), PreferencesError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
