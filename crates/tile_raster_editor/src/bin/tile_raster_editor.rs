//! Standalone tile raster editor binary
//!
//! Run with: tile_raster_editor

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use tile_raster_editor::document::RasterDocument;
use tile_raster_editor::preferences::EditorPreferences;
use tile_raster_editor::{EditorState, RasterEditorPlugin};

fn main() {
    // Load preferences early to get saved window size
    let preferences = EditorPreferences::load();
    let window_width = preferences.window_width.unwrap_or(1920.0) as u32;
    let window_height = preferences.window_height.unwrap_or(1080.0) as u32;

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.12, 0.12, 0.14)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tile Raster Editor".to_string(),
                // Layout is in window pixels; keep them 1:1 with egui points
                resolution: WindowResolution::new(window_width, window_height)
                    .with_scale_factor_override(1.0),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(preferences)
        .add_plugins(RasterEditorPlugin)
        .add_systems(Startup, auto_open_last_files)
        .add_systems(Last, save_window_size_on_exit)
        .run();
}

/// Reopen the last palette and tilemap if enabled in preferences
fn auto_open_last_files(
    mut document: ResMut<RasterDocument>,
    mut editor_state: ResMut<EditorState>,
    preferences: Res<EditorPreferences>,
) {
    if !preferences.auto_open_last {
        return;
    }

    if let Some(path) = preferences.last_palette_path() {
        editor_state.palette_path_input = path.to_string_lossy().to_string();
        if path.exists() {
            match document.open_palette(&path) {
                Ok(()) => {
                    info!("Auto-opened palette: {:?}", path);
                    for message in document.palette.missing_sources() {
                        warn!("{}", message);
                    }
                }
                Err(e) => warn!("Failed to auto-open palette {:?}: {}", path, e),
            }
        } else {
            warn!("Last palette file not found: {:?}", path);
        }
    }

    if let Some(path) = preferences.last_tilemap_path() {
        editor_state.tilemap_path_input = path.to_string_lossy().to_string();
        if path.exists() {
            match document.open_tilemap(&path) {
                Ok(()) => {
                    editor_state.brush.cancel_stroke();
                    info!("Auto-opened tilemap: {:?}", path);
                }
                Err(e) => warn!("Failed to auto-open tilemap {:?}: {}", path, e),
            }
        } else {
            warn!("Last tilemap file not found: {:?}", path);
        }
    }
}

/// Save the window size to preferences when the app exits
fn save_window_size_on_exit(
    mut exit_events: MessageReader<AppExit>,
    windows: Query<&Window>,
    mut preferences: ResMut<EditorPreferences>,
) {
    if exit_events.read().next().is_none() {
        return;
    }
    if let Ok(window) = windows.single() {
        preferences.set_window_size(window.resolution.width(), window.resolution.height());
        if let Err(e) = preferences.save() {
            error!("Failed to save window size to preferences: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_window_size_untouched_without_exit() {
        let mut world = World::new();
        world.init_resource::<Messages<AppExit>>();
        world.insert_resource(EditorPreferences::default());
        world.spawn(Window {
            resolution: WindowResolution::new(800, 600),
            ..default()
        });

        // Resizes alone never reach the preferences file
        world.run_system_once(save_window_size_on_exit).unwrap();

        let preferences = world.resource::<EditorPreferences>();
        assert_eq!(preferences.window_width, None);
        assert_eq!(preferences.window_height, None);
    }
}
