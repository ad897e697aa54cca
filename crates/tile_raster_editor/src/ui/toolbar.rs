//! Toolbar window: brush modes, history, files, palette editing

use bevy_egui::egui;
use tile_raster_core::BrushMode;

use super::canvas::tile_color;
use super::dialogs::PendingAction;
use crate::commands::CommandHistory;
use crate::document::RasterDocument;
use crate::EditorState;

/// Render the toolbar
///
/// The window sits under the swatch board, clear of the raster.
pub fn render_toolbar(
    ctx: &egui::Context,
    editor_state: &mut EditorState,
    document: &RasterDocument,
    history: Option<&CommandHistory>,
) {
    egui::Window::new("Tools")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_BOTTOM, [12.0, -12.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Brush:");
                for mode in BrushMode::ALL {
                    if ui
                        .selectable_label(editor_state.brush.mode() == mode, mode.label())
                        .clicked()
                    {
                        editor_state.brush.set_mode(mode);
                    }
                }

                ui.separator();
                render_brush_display(ui, editor_state);
            });

            ui.horizontal(|ui| {
                let can_undo = history.is_some_and(|h| h.can_undo());
                let can_redo = history.is_some_and(|h| h.can_redo());

                let undo = ui.add_enabled(can_undo, egui::Button::new("Undo"));
                let undo = match history.and_then(|h| h.undo_description()) {
                    Some(desc) => undo.on_hover_text(format!("Undo {} (Shift+Z)", desc)),
                    None => undo,
                };
                if undo.clicked() {
                    editor_state.queue_action(PendingAction::Undo);
                }

                let redo = ui.add_enabled(can_redo, egui::Button::new("Redo"));
                let redo = match history.and_then(|h| h.redo_description()) {
                    Some(desc) => redo.on_hover_text(format!("Redo {} (Shift+R)", desc)),
                    None => redo,
                };
                if redo.clicked() {
                    editor_state.queue_action(PendingAction::Redo);
                }

                ui.separator();
                ui.checkbox(&mut editor_state.remove_tiles, "Remove tiles");
            });

            ui.separator();

            egui::Grid::new("toolbar_files")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Tilemap:");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut editor_state.tilemap_path_input)
                                .hint_text("maps/level.json")
                                .desired_width(220.0),
                        );
                        if ui.button("Open Map").clicked() {
                            editor_state.queue_action(PendingAction::OpenTilemap);
                        }
                        if ui.button("Save Map").clicked() {
                            editor_state.queue_action(PendingAction::SaveTilemap);
                        }
                        if ui.button("New Map").clicked() {
                            editor_state.queue_action(PendingAction::NewDocument);
                        }
                    });
                    ui.end_row();

                    ui.label("Palette:");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut editor_state.palette_path_input)
                                .hint_text("tiles/palette.json")
                                .desired_width(220.0),
                        );
                        if ui.button("Open Palette").clicked() {
                            editor_state.queue_action(PendingAction::OpenPalette);
                        }
                        if ui.button("Save Palette").clicked() {
                            editor_state.queue_action(PendingAction::SavePalette);
                        }
                    });
                    ui.end_row();

                    ui.label("Tile image:");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut editor_state.tile_path_input)
                                .hint_text("tiles/grass.png")
                                .desired_width(220.0),
                        );
                        let can_add = !document.palette.is_full()
                            && !editor_state.tile_path_input.trim().is_empty();
                        if ui
                            .add_enabled(can_add, egui::Button::new("Add Tile"))
                            .clicked()
                        {
                            editor_state.queue_action(PendingAction::AddTile);
                        }
                    });
                    ui.end_row();
                });

            ui.separator();

            ui.horizontal(|ui| {
                let dirty = if document.is_dirty() { "*" } else { "" };
                ui.label(format!("{}{}", document.name(), dirty));
                ui.separator();
                ui.label(format!("{} / 64 tiles", document.palette.count()));
                if let Some((x, y, index)) = editor_state.inspected {
                    ui.separator();
                    ui.label(format!("Tile ({}, {}): {}", x, y, index));
                }
            });
        });
}

/// Active swatch: color chip plus index and source file name
fn render_brush_display(ui: &mut egui::Ui, editor_state: &EditorState) {
    let swatch = editor_state.brush.active_swatch();

    let (rect, _) = ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, tile_color(swatch.index));

    if swatch.is_eraser() {
        ui.label("Brush: eraser");
    } else {
        let name = std::path::Path::new(&swatch.source)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(swatch.source.as_str());
        ui.label(format!("Brush: {} ({})", swatch.index, name));
    }
}
