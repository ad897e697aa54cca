//! Pointer input for the tile raster and the swatch board

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;
use tile_raster_core::{inspect, slot_index, PointerEvent, RasterLayout};

use crate::commands::CommandHistory;
use crate::document::RasterDocument;
use crate::preferences::EditorPreferences;
use crate::ui::PendingAction;
use crate::{EditorSet, EditorState};

/// Plugin for brush and board input
pub struct EditorToolsPlugin;

impl Plugin for EditorToolsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_raster_input, handle_swatch_input)
                .chain()
                .in_set(EditorSet::Input),
        );
    }
}

/// Primary-button events for this frame, in order.
///
/// A press and release within one frame yields `Down` then `Up`.
pub fn pointer_events(mouse: &ButtonInput<MouseButton>) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    if mouse.just_pressed(MouseButton::Left) {
        events.push(PointerEvent::Down);
    } else if mouse.pressed(MouseButton::Left) {
        events.push(PointerEvent::Held);
    }
    if mouse.just_released(MouseButton::Left) {
        events.push(PointerEvent::Up);
    }
    events
}

/// Palette slot under a pointer position on the swatch board
pub fn board_slot_at(layout: &RasterLayout, pos: [f32; 2]) -> Option<u32> {
    layout
        .cell_at(pos)
        .map(|(col, row)| slot_index(row, col))
}

/// Whether a primary press may open a stroke or seed a fill.
///
/// The pointer must map to an in-bounds cell and not be over an egui window.
pub fn stroke_can_start(
    layout: &RasterLayout,
    cursor: Option<[f32; 2]>,
    pointer_blocked: bool,
) -> bool {
    !pointer_blocked && cursor.is_some_and(|pos| layout.cell_at(pos).is_some())
}

/// Cursor position in window pixels with the configured offset applied
fn cursor_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    preferences: &EditorPreferences,
) -> Option<[f32; 2]> {
    let cursor = windows.iter().next()?.cursor_position()?;
    Some(preferences.pointer_position([cursor.x, cursor.y]))
}

/// Feed the brush engine and handle tile inspection
fn handle_raster_input(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    preferences: Res<EditorPreferences>,
    mut editor_state: ResMut<EditorState>,
    mut document: ResMut<RasterDocument>,
    mut history: ResMut<CommandHistory>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let pointer_blocked = ctx.is_using_pointer() || ctx.is_pointer_over_area();

    let layout = &preferences.raster_layout;
    let cursor = cursor_position(&windows, &preferences);
    // Off-window samples map to a cell the brush ignores
    let cell = cursor
        .map(|pos| layout.screen_to_cell(pos))
        .unwrap_or((-1, -1));

    if mouse.just_pressed(MouseButton::Right) && !pointer_blocked {
        if let Some(index) = inspect(&document.grid, cell) {
            info!("Tile ({}, {}) has palette index {}", cell.0, cell.1, index);
            editor_state.inspected = Some((cell.0 as u32, cell.1 as u32, index));
        }
    }

    for event in pointer_events(&mouse) {
        if event == PointerEvent::Down && !stroke_can_start(layout, cursor, pointer_blocked) {
            continue;
        }

        let outcome =
            editor_state
                .brush
                .handle(event, cell, &mut document.grid, history.edits_mut());
        if outcome.changed > 0 {
            document.mark_dirty();
        }
        if outcome.recorded {
            if let Some(label) = history.undo_description() {
                info!("Recorded {}", label);
            }
        }
    }
}

/// Queue select/remove actions for swatch board clicks
fn handle_swatch_input(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    preferences: Res<EditorPreferences>,
    mut editor_state: ResMut<EditorState>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else { return };
    if ctx.is_using_pointer() || ctx.is_pointer_over_area() {
        return;
    }
    let Some(pos) = cursor_position(&windows, &preferences) else {
        return;
    };

    if let Some(index) = board_slot_at(&preferences.swatch_layout, pos) {
        let action = if editor_state.remove_tiles {
            PendingAction::RemoveTile(index)
        } else {
            PendingAction::SelectSwatch(index)
        };
        editor_state.queue_action(action);
    }
}
