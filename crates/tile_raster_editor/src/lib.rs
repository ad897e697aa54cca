//! tile_raster_editor - 16x16 tile-map painting editor
//!
//! This crate hosts the `tile_raster_core` engine in Bevy + egui:
//! - A 16x16 tile raster painted with paint, fill and erase brushes
//! - An 8x8 swatch board for picking, adding and removing tiles
//! - Undo/redo with keyboard shortcuts
//! - Tilemap and palette save/load
//! - Persistent editor preferences
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use tile_raster_editor::RasterEditorPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(RasterEditorPlugin)
//!         .run();
//! }
//! ```

pub mod commands;
pub mod document;
pub mod preferences;
pub mod tools;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use tile_raster_core;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use tile_raster_core::{BrushEngine, Swatch, TilePalette};

use commands::{handle_keyboard_shortcuts, CommandHistory};
use document::RasterDocument;
use preferences::EditorPreferences;
use tools::EditorToolsPlugin;
use ui::{EditorUiPlugin, PendingAction};

/// Main editor plugin
pub struct RasterEditorPlugin;

impl Plugin for RasterEditorPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<EditorPreferences>() {
            app.insert_resource(EditorPreferences::load());
        }

        app.add_plugins(EguiPlugin::default())
            .add_plugins(EditorToolsPlugin)
            .add_plugins(EditorUiPlugin)
            .init_resource::<EditorState>()
            .init_resource::<CommandHistory>()
            .init_resource::<RasterDocument>()
            .configure_sets(
                Update,
                (EditorSet::Shortcuts, EditorSet::Input, EditorSet::Actions).chain(),
            )
            .add_systems(Startup, setup_editor_camera)
            .add_systems(Update, handle_keyboard_shortcuts.in_set(EditorSet::Shortcuts));
    }
}

/// Per-frame ordering of the systems that touch the document
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditorSet {
    /// Keyboard shortcuts queue actions
    Shortcuts,
    /// Pointer input paints the raster and queues board actions
    Input,
    /// Queued actions are applied
    Actions,
}

/// Spawns the editor camera if one doesn't exist
fn setup_editor_camera(mut commands: Commands, camera_query: Query<&Camera2d>) {
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }
}

/// Global editor state
#[derive(Resource, Default)]
pub struct EditorState {
    pub brush: BrushEngine,
    /// Swatch board clicks remove tiles instead of selecting them
    pub remove_tiles: bool,

    // Path fields
    pub tilemap_path_input: String,
    pub palette_path_input: String,
    pub tile_path_input: String,

    /// Last cell inspected with the secondary button: (x, y, index)
    pub inspected: Option<(u32, u32, u32)>,

    pub pending_action: Option<PendingAction>,
    pub error_message: Option<String>,
}

impl EditorState {
    /// Re-pick the active swatch after the palette changed.
    ///
    /// Falls back to the eraser if the slot is no longer in use.
    /// Queue an action for this frame. The first one queued wins; later
    /// ones are dropped with a log line until the queue is processed.
    pub fn queue_action(&mut self, action: PendingAction) -> bool {
        match self.pending_action {
            Some(queued) => {
                debug!("Dropped {:?}, {:?} is already pending", action, queued);
                false
            }
            None => {
                self.pending_action = Some(action);
                true
            }
        }
    }

    pub fn refresh_swatch(&mut self, palette: &TilePalette) {
        let index = self.brush.active_swatch().index;
        let swatch = Swatch::from_palette(palette, index).unwrap_or_else(Swatch::eraser);
        self.brush.set_swatch(swatch);
    }
}
