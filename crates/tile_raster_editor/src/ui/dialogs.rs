//! Queued editor actions and the error dialog

use bevy::prelude::*;
use bevy_egui::egui;
use std::path::PathBuf;
use tile_raster_core::Swatch;

use crate::commands::CommandHistory;
use crate::document::RasterDocument;
use crate::preferences::EditorPreferences;
use crate::EditorState;

/// Actions queued by the toolbar, shortcuts and the swatch board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Undo,
    Redo,
    /// Empty tilemap, cleared history
    NewDocument,
    OpenTilemap,
    SaveTilemap,
    OpenPalette,
    SavePalette,
    /// Add the image in the tile path field to the palette
    AddTile,
    RemoveTile(u32),
    SelectSwatch(u32),
}

/// Apply queued actions once per frame
pub fn process_pending_actions(
    mut editor_state: ResMut<EditorState>,
    mut document: ResMut<RasterDocument>,
    mut history: ResMut<CommandHistory>,
    mut preferences: ResMut<EditorPreferences>,
) {
    let Some(action) = editor_state.pending_action.take() else {
        return;
    };

    if apply_pending_action(
        action,
        &mut editor_state,
        &mut document,
        &mut history,
        &mut preferences,
    ) {
        if let Err(e) = preferences.save() {
            error!("Failed to save preferences: {}", e);
        }
    }
}

/// Path typed into a field, if any
fn input_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

/// Apply one action. Returns true if the preferences changed.
///
/// Failures are logged and shown in the error dialog; the document is left
/// as it was.
pub fn apply_pending_action(
    action: PendingAction,
    editor_state: &mut EditorState,
    document: &mut RasterDocument,
    history: &mut CommandHistory,
    preferences: &mut EditorPreferences,
) -> bool {
    match action {
        PendingAction::Undo => {
            history.undo(document);
        }
        PendingAction::Redo => {
            history.redo(document);
        }
        PendingAction::NewDocument => {
            editor_state.brush.cancel_stroke();
            document.reset_tilemap();
            history.clear();
            editor_state.tilemap_path_input.clear();
            info!("New tilemap");
        }
        PendingAction::OpenTilemap => {
            let Some(path) = input_path(&editor_state.tilemap_path_input) else {
                editor_state.error_message = Some("No tilemap path set".to_string());
                return false;
            };
            match document.open_tilemap(&path) {
                Ok(()) => {
                    editor_state.brush.cancel_stroke();
                    history.clear();
                    info!("Opened tilemap {:?}", path);
                    return preferences.set_last_tilemap(&path);
                }
                Err(e) => {
                    warn!("Failed to load tilemap {:?}: {}", path, e);
                    editor_state.error_message = Some(format!("Failed to load tilemap: {}", e));
                }
            }
        }
        PendingAction::SaveTilemap => {
            let result = match input_path(&editor_state.tilemap_path_input) {
                Some(path) => document.save_tilemap_as(&path).map(|_| path),
                None => document.save_tilemap(),
            };
            match result {
                Ok(path) => {
                    info!("Saved tilemap {:?}", path);
                    editor_state.tilemap_path_input = path.to_string_lossy().to_string();
                    return preferences.set_last_tilemap(&path);
                }
                Err(e) => {
                    warn!("Failed to save tilemap: {}", e);
                    editor_state.error_message = Some(format!("Failed to save tilemap: {}", e));
                }
            }
        }
        PendingAction::OpenPalette => {
            let Some(path) = input_path(&editor_state.palette_path_input) else {
                editor_state.error_message = Some("No palette path set".to_string());
                return false;
            };
            match document.open_palette(&path) {
                Ok(()) => {
                    info!("Opened palette {:?}", path);
                    editor_state.refresh_swatch(&document.palette);
                    let missing = document.palette.missing_sources();
                    for message in &missing {
                        warn!("{}", message);
                    }
                    if !missing.is_empty() {
                        editor_state.error_message = Some(missing.join("\n"));
                    }
                    return preferences.set_last_palette(&path);
                }
                Err(e) => {
                    warn!("Failed to load palette {:?}: {}", path, e);
                    editor_state.error_message = Some(format!("Failed to load palette: {}", e));
                }
            }
        }
        PendingAction::SavePalette => {
            let result = match input_path(&editor_state.palette_path_input) {
                Some(path) => document.save_palette_as(&path).map(|_| path),
                None => document.save_palette(),
            };
            match result {
                Ok(path) => {
                    info!("Saved palette {:?}", path);
                    editor_state.palette_path_input = path.to_string_lossy().to_string();
                    return preferences.set_last_palette(&path);
                }
                Err(e) => {
                    warn!("Failed to save palette: {}", e);
                    editor_state.error_message = Some(format!("Failed to save palette: {}", e));
                }
            }
        }
        PendingAction::AddTile => {
            let Some(path) = input_path(&editor_state.tile_path_input) else {
                return false;
            };
            match document.add_tile(&path) {
                Ok(index) => {
                    info!("Added tile {:?} at slot {}", path, index);
                    editor_state.tile_path_input.clear();
                }
                Err(e) => {
                    warn!("Failed to add tile {:?}: {}", path, e);
                    editor_state.error_message = Some(format!("Failed to add tile: {}", e));
                }
            }
        }
        PendingAction::RemoveTile(index) => match document.remove_tile(index) {
            Ok(source) => {
                info!("Removed tile {} ({})", index, source);
                editor_state.refresh_swatch(&document.palette);
            }
            Err(e) => warn!("Cannot remove slot {}: {}", index, e),
        },
        PendingAction::SelectSwatch(index) => {
            if let Some(swatch) = Swatch::from_palette(&document.palette, index) {
                editor_state.brush.set_swatch(swatch);
            }
        }
    }
    false
}

/// Blocking error message with an OK button
pub fn render_error_dialog(ctx: &egui::Context, editor_state: &mut EditorState) {
    let Some(error_msg) = editor_state.error_message.clone() else {
        return;
    };

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&error_msg);
            ui.separator();
            if ui.button("OK").clicked() {
                editor_state.error_message = None;
            }
        });
}
