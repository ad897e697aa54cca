//! Brush engine: paint and erase strokes, flood fill
//!
//! The engine works on cell coordinates. Mapping pointer positions to cells
//! is done by [`crate::RasterLayout`]; every entry point here re-checks
//! bounds before touching the grid.

use serde::{Deserialize, Serialize};

use crate::edit::{EditBatch, TileEdit};
use crate::grid::{TileGrid, EMPTY_TILE};
use crate::history::EditHistory;
use crate::palette::TilePalette;

/// Available brush modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushMode {
    #[default]
    Paint,
    Fill,
    Erase,
}

impl BrushMode {
    pub fn label(&self) -> &'static str {
        match self {
            BrushMode::Paint => "Paint",
            BrushMode::Fill => "Fill",
            BrushMode::Erase => "Erase",
        }
    }

    pub const ALL: [BrushMode; 3] = [BrushMode::Paint, BrushMode::Fill, BrushMode::Erase];
}

/// A selectable brush: palette index plus the image it was picked with
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Swatch {
    pub index: u32,
    /// Image source at selection time; empty for the eraser
    pub source: String,
}

impl Swatch {
    /// The reserved empty swatch
    pub fn eraser() -> Self {
        Self::default()
    }

    /// Pick a swatch from the palette. Returns `None` for slots not in use.
    pub fn from_palette(palette: &TilePalette, index: u32) -> Option<Self> {
        palette.contains(index).then(|| Self {
            index,
            source: palette.source(index).unwrap_or_default().to_string(),
        })
    }

    pub fn is_eraser(&self) -> bool {
        self.index == EMPTY_TILE
    }
}

/// Pointer events fed to the brush engine, one or more per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button went down this frame
    Down,
    /// Primary button is still held
    Held,
    /// Primary button was released this frame
    Up,
}

/// Result of feeding one event to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrushOutcome {
    /// Cells whose value changed
    pub changed: usize,
    /// Whether a record was pushed to the history
    pub recorded: bool,
}

/// Write `value` into a cell if it is in bounds and differs from the current value
pub fn paint_cell(grid: &mut TileGrid, cell: (i32, i32), value: u32) -> Option<TileEdit> {
    if !TileGrid::contains(cell.0, cell.1) {
        return None;
    }
    TileEdit::apply(grid, cell.0 as u32, cell.1 as u32, value)
}

/// Read the palette index under a cell, if in bounds
pub fn inspect(grid: &TileGrid, cell: (i32, i32)) -> Option<u32> {
    TileGrid::contains(cell.0, cell.1).then(|| grid.get(cell.0 as u32, cell.1 as u32))
}

/// Flood-fill the 4-connected region sharing the seed's value.
///
/// Returns `None` when the seed is out of bounds or already holds `value`.
/// The fill runs layer by layer: each frontier cell is overwritten before its
/// neighbors are evaluated, so overwritten cells stop matching and the fill
/// terminates without a visited set. A frontier cell that no longer matches
/// was queued twice and already written; it is skipped.
pub fn flood_fill(grid: &mut TileGrid, seed: (i32, i32), value: u32) -> Option<EditBatch> {
    let target = inspect(grid, seed)?;
    if target == value {
        return None;
    }

    let mut batch = EditBatch::new(BrushMode::Fill.label());
    let mut frontier = vec![seed];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for (x, y) in frontier {
            if grid.get(x as u32, y as u32) != target {
                continue;
            }
            if let Some(edit) = TileEdit::apply(grid, x as u32, y as u32, value) {
                batch.push(edit);
            }

            for (dx, dy) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
                let neighbor = (x + dx, y + dy);
                if inspect(grid, neighbor) == Some(target) {
                    next.push(neighbor);
                }
            }
        }
        frontier = next;
    }

    Some(batch)
}

/// Turns pointer events into grid edits and history records
#[derive(Debug, Default)]
pub struct BrushEngine {
    mode: BrushMode,
    active: Swatch,
    /// Open paint/erase stroke, between `Down` and `Up`
    stroke: Option<EditBatch>,
}

impl BrushEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.mode = mode;
    }

    pub fn active_swatch(&self) -> &Swatch {
        &self.active
    }

    pub fn set_swatch(&mut self, swatch: Swatch) {
        self.active = swatch;
    }

    /// Value written by the current mode
    pub fn brush_value(&self) -> u32 {
        match self.mode {
            BrushMode::Erase => EMPTY_TILE,
            BrushMode::Paint | BrushMode::Fill => self.active.index,
        }
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Drop the open stroke without recording it.
    ///
    /// Call whenever the grid is replaced; the stroke's edits belong to the
    /// old grid. Returns true if a stroke was open.
    pub fn cancel_stroke(&mut self) -> bool {
        self.stroke.take().is_some()
    }

    /// Feed one pointer event sampled at `cell`
    pub fn handle(
        &mut self,
        event: PointerEvent,
        cell: (i32, i32),
        grid: &mut TileGrid,
        history: &mut EditHistory,
    ) -> BrushOutcome {
        match event {
            PointerEvent::Down => self.pointer_down(cell, grid, history),
            PointerEvent::Held => BrushOutcome {
                changed: self.pointer_held(cell, grid),
                recorded: false,
            },
            PointerEvent::Up => BrushOutcome {
                changed: 0,
                recorded: self.pointer_up(history),
            },
        }
    }

    /// Fill immediately, or open a stroke and paint the first sample
    pub fn pointer_down(
        &mut self,
        cell: (i32, i32),
        grid: &mut TileGrid,
        history: &mut EditHistory,
    ) -> BrushOutcome {
        if self.mode == BrushMode::Fill {
            let Some(batch) = flood_fill(grid, cell, self.brush_value()) else {
                return BrushOutcome::default();
            };
            if batch.is_empty() {
                return BrushOutcome::default();
            }
            let changed = batch.len();
            history.record(batch);
            return BrushOutcome {
                changed,
                recorded: true,
            };
        }

        self.stroke = Some(EditBatch::new(self.mode.label()));
        BrushOutcome {
            changed: self.pointer_held(cell, grid),
            recorded: false,
        }
    }

    /// Paint one sample into the open stroke. Returns the number of changed cells.
    pub fn pointer_held(&mut self, cell: (i32, i32), grid: &mut TileGrid) -> usize {
        let value = self.brush_value();
        let Some(stroke) = self.stroke.as_mut() else {
            return 0;
        };
        match paint_cell(grid, cell, value) {
            Some(edit) => {
                stroke.push(edit);
                1
            }
            None => 0,
        }
    }

    /// Close the open stroke, recording it unless nothing changed
    pub fn pointer_up(&mut self, history: &mut EditHistory) -> bool {
        match self.stroke.take() {
            Some(stroke) if !stroke.is_empty() => {
                history.record(stroke);
                true
            }
            _ => false,
        }
    }
}
