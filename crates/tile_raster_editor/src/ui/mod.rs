//! Editor UI: raster and board painting, toolbar, dialogs

mod canvas;
mod dialogs;
mod toolbar;

pub use canvas::{cell_rect, render_raster, render_swatch_board, tile_color};
pub use dialogs::{
    apply_pending_action, process_pending_actions, render_error_dialog, PendingAction,
};
pub use toolbar::render_toolbar;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::commands::CommandHistory;
use crate::document::RasterDocument;
use crate::preferences::EditorPreferences;
use crate::{EditorSet, EditorState};

/// Plugin for the editor UI
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, process_pending_actions.in_set(EditorSet::Actions))
            .add_systems(EguiPrimaryContextPass, render_ui);
    }
}

fn render_ui(
    mut contexts: EguiContexts,
    mut editor_state: ResMut<EditorState>,
    document: Res<RasterDocument>,
    history: Res<CommandHistory>,
    preferences: Res<EditorPreferences>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    render_raster(ctx, &document.grid, &preferences.raster_layout);
    render_swatch_board(
        ctx,
        &document.palette,
        &preferences.swatch_layout,
        editor_state.brush.active_swatch().index,
        editor_state.remove_tiles,
    );
    render_toolbar(ctx, &mut editor_state, &document, Some(&*history));
    render_error_dialog(ctx, &mut editor_state);
}
