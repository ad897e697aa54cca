//! Keyboard shortcuts

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::ui::PendingAction;
use crate::EditorState;

/// Map this frame's key presses to an editor action.
///
/// Shift+Z / Shift+R undo and redo. With Ctrl (or Cmd): Z undo, Shift+Z and
/// Y redo, S save, O reopen, N new.
pub fn shortcut_action(keyboard: &ButtonInput<KeyCode>) -> Option<PendingAction> {
    let ctrl = keyboard.any_pressed([
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::SuperLeft,
        KeyCode::SuperRight,
    ]);
    let shift = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    if ctrl {
        if keyboard.just_pressed(KeyCode::KeyZ) {
            return Some(if shift {
                PendingAction::Redo
            } else {
                PendingAction::Undo
            });
        }
        if keyboard.just_pressed(KeyCode::KeyY) {
            return Some(PendingAction::Redo);
        }
        if keyboard.just_pressed(KeyCode::KeyS) {
            return Some(PendingAction::SaveTilemap);
        }
        if keyboard.just_pressed(KeyCode::KeyO) {
            return Some(PendingAction::OpenTilemap);
        }
        if keyboard.just_pressed(KeyCode::KeyN) {
            return Some(PendingAction::NewDocument);
        }
        return None;
    }

    if shift {
        if keyboard.just_pressed(KeyCode::KeyZ) {
            return Some(PendingAction::Undo);
        }
        if keyboard.just_pressed(KeyCode::KeyR) {
            return Some(PendingAction::Redo);
        }
    }

    None
}

/// System that queues shortcut actions unless a text field has focus
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut editor_state: ResMut<EditorState>,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_keyboard_input() {
            return;
        }
    }

    if let Some(action) = shortcut_action(&keyboard) {
        editor_state.queue_action(action);
    }
}
