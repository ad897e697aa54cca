//! Test helpers for `tile_raster_editor` UI panels.
//!
//! State factories, harness builders, interaction free functions and
//! assertion helpers for use in `#[cfg(test)]` modules within this crate.
//!
//! ```rust,ignore
//! #[cfg(test)]
//! mod tests {
//!     use crate::testing::*;
//! }
//! ```
#![allow(dead_code)]

use bevy_egui::egui::accesskit;
use egui_kittest::kittest::NodeT;
use egui_kittest::Harness;
use tile_raster_core::{BrushMode, EditBatch, TileEdit};

use crate::commands::CommandHistory;
use crate::document::RasterDocument;
use crate::ui::{render_error_dialog, render_toolbar, PendingAction};
use crate::EditorState;

// Brings `get_by_label` / `query_by_label` into scope for glob importers
pub use egui_kittest::kittest::Queryable;

// ============================================================================
// Bundle Structs
// ============================================================================

/// Everything `render_toolbar` borrows, owned by the harness.
///
/// `history` is `Option<T>` because `render_toolbar` takes
/// `Option<&CommandHistory>`.
pub struct ToolbarBundle {
    pub editor_state: EditorState,
    pub document: RasterDocument,
    pub history: Option<CommandHistory>,
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Default editor state, empty document, no history
pub fn toolbar_bundle_default() -> ToolbarBundle {
    ToolbarBundle {
        editor_state: EditorState::default(),
        document: RasterDocument::new(),
        history: None,
    }
}

/// One recorded "Paint" edit, so Undo is available and Redo is not
pub fn toolbar_bundle_with_undo() -> ToolbarBundle {
    let mut document = RasterDocument::new();
    let mut history = CommandHistory::default();

    let mut batch = EditBatch::new(BrushMode::Paint.label());
    if let Some(edit) = TileEdit::apply(&mut document.grid, 0, 0, 1) {
        batch.push(edit);
    }
    history.record(batch);

    ToolbarBundle {
        editor_state: EditorState::default(),
        document,
        history: Some(history),
    }
}

/// Editor state showing an error message
pub fn editor_state_with_error(message: &str) -> EditorState {
    EditorState {
        error_message: Some(message.to_string()),
        ..Default::default()
    }
}

// ============================================================================
// Harness Builders
// ============================================================================

/// Returns a `Harness<'static, ToolbarBundle>` that renders the toolbar window.
pub fn harness_for_toolbar(bundle: ToolbarBundle) -> Harness<'static, ToolbarBundle> {
    Harness::new_state(
        |ctx, bundle: &mut ToolbarBundle| {
            render_toolbar(
                ctx,
                &mut bundle.editor_state,
                &bundle.document,
                bundle.history.as_ref(),
            );
        },
        bundle,
    )
}

/// Returns a `Harness<'static, EditorState>` that renders the error dialog.
pub fn harness_for_error_dialog(state: EditorState) -> Harness<'static, EditorState> {
    Harness::new_state(
        |ctx, editor_state: &mut EditorState| {
            render_error_dialog(ctx, editor_state);
        },
        state,
    )
}

// ============================================================================
// Interaction Free Functions
// ============================================================================

/// Click the widget with the given AccessKit label.
///
/// Run `harness.run()` afterwards to process the click.
pub fn click_labeled<State>(harness: &Harness<'_, State>, label: &str) {
    harness.get_by_label(label).click();
}

/// Toggle a checkbox widget with the given AccessKit label (one click).
pub fn toggle_labeled<State>(harness: &Harness<'_, State>, label: &str) {
    harness.get_by_label(label).click();
}

/// Select a selectable label (brush mode button) with the given AccessKit label.
pub fn select_labeled<State>(harness: &Harness<'_, State>, label: &str) {
    harness.get_by_label(label).click();
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the brush engine's current mode
pub fn assert_brush_mode(harness: &Harness<'_, ToolbarBundle>, expected: BrushMode) {
    let actual = harness.state().editor_state.brush.mode();
    assert_eq!(
        actual, expected,
        "Expected brush mode {:?}, got {:?}",
        expected, actual,
    );
}

/// Assert that the checkbox with the given AccessKit label is in the expected toggled state.
pub fn assert_checkbox_state<State>(harness: &Harness<'_, State>, label: &str, expected: bool) {
    let node = harness.get_by_label(label);
    let toggled = node.accesskit_node().toggled().unwrap_or_else(|| {
        panic!("Widget '{label}' does not expose a toggled state (is it a checkbox?)")
    });
    let checked = toggled == accesskit::Toggled::True;
    assert_eq!(
        checked, expected,
        "Checkbox '{label}': expected checked={expected}, got checked={checked}",
    );
}

pub fn assert_widget_enabled<State>(harness: &Harness<'_, State>, label: &str) {
    let node = harness.get_by_label(label);
    assert!(
        !node.accesskit_node().is_disabled(),
        "Expected widget '{label}' to be enabled, but it is disabled",
    );
}

pub fn assert_widget_disabled<State>(harness: &Harness<'_, State>, label: &str) {
    let node = harness.get_by_label(label);
    assert!(
        node.accesskit_node().is_disabled(),
        "Expected widget '{label}' to be disabled, but it is enabled",
    );
}

/// Assert that `pending_action` holds `expected`
pub fn assert_pending_action(actual: Option<&PendingAction>, expected: &PendingAction) {
    assert_eq!(
        actual,
        Some(expected),
        "Expected pending_action = {:?}, got {:?}",
        expected,
        actual,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_dialog_ok_clears_message() {
        let mut harness = harness_for_error_dialog(editor_state_with_error(
            "Failed to load tilemap: Parse error: expected value",
        ));
        harness.run();
        harness.get_by_label("Failed to load tilemap: Parse error: expected value");

        click_labeled(&harness, "OK");
        harness.run();

        assert!(harness.state().error_message.is_none());
    }

    #[test]
    fn error_dialog_hidden_without_message() {
        let mut harness = harness_for_error_dialog(EditorState::default());
        harness.run();

        assert!(harness.query_by_label("OK").is_none());
    }
}
