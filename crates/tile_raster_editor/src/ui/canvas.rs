//! Painting the tile raster and the swatch board
//!
//! Both are drawn on egui's background layer so they sit under every window
//! and never capture the pointer. Tiles are shown as a color per palette index.

use bevy_egui::egui;
use tile_raster_core::{
    board_position, RasterLayout, TileGrid, TilePalette, EMPTY_TILE, PALETTE_SLOTS,
};

const GRID_LINE: egui::Color32 = egui::Color32::from_gray(60);
const EMPTY_SLOT: egui::Color32 = egui::Color32::from_gray(20);
const ACTIVE_OUTLINE: egui::Color32 = egui::Color32::from_rgb(255, 210, 60);
const REMOVE_OUTLINE: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);

/// Fill color for a palette index
pub fn tile_color(index: u32) -> egui::Color32 {
    if index == EMPTY_TILE {
        return egui::Color32::from_gray(30);
    }
    // Co-prime steps per channel keep neighboring indices apart
    let channel = |step: u32| (60 + (index * step) % 180) as u8;
    egui::Color32::from_rgb(channel(97), channel(57), channel(131))
}

/// Screen rectangle of a layout cell
pub fn cell_rect(layout: &RasterLayout, x: u32, y: u32) -> egui::Rect {
    let [cx, cy] = layout.cell_center(x, y);
    egui::Rect::from_center_size(egui::pos2(cx, cy), egui::Vec2::splat(layout.cell_size))
}

/// Paint the tile raster
pub fn render_raster(ctx: &egui::Context, grid: &TileGrid, layout: &RasterLayout) {
    let painter = ctx.layer_painter(egui::LayerId::background());

    for (x, y, index) in grid.cells() {
        let rect = cell_rect(layout, x, y);
        painter.rect_filled(rect, 0.0, tile_color(index));
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, GRID_LINE),
            egui::StrokeKind::Inside,
        );
    }
}

/// Paint the swatch board, outlining the active slot
pub fn render_swatch_board(
    ctx: &egui::Context,
    palette: &TilePalette,
    layout: &RasterLayout,
    active: u32,
    removing: bool,
) {
    let painter = ctx.layer_painter(egui::LayerId::background());

    for index in 0..PALETTE_SLOTS {
        let (row, col) = board_position(index);
        let rect = cell_rect(layout, col, row);

        if !palette.contains(index) {
            painter.rect_filled(rect, 0.0, EMPTY_SLOT);
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, GRID_LINE),
                egui::StrokeKind::Inside,
            );
            continue;
        }

        painter.rect_filled(rect, 0.0, tile_color(index));
        let label = if index == EMPTY_TILE {
            "x".to_string()
        } else {
            index.to_string()
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::monospace(14.0),
            egui::Color32::WHITE,
        );

        let outline = if index == active {
            egui::Stroke::new(3.0, ACTIVE_OUTLINE)
        } else if removing && index != EMPTY_TILE {
            egui::Stroke::new(2.0, REMOVE_OUTLINE)
        } else {
            egui::Stroke::new(1.0, GRID_LINE)
        };
        painter.rect_stroke(rect, 0.0, outline, egui::StrokeKind::Inside);
    }
}
