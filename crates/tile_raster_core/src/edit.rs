//! Invertible edit records for undo/redo
//!
//! An [`EditRecord`] is either a single cell change or an ordered batch of
//! records that undo and redo as one unit. Records hold grid coordinates, not
//! references into the grid, so they are re-resolved against whatever grid
//! is passed to `undo` / `redo`.

use crate::grid::TileGrid;

/// A single cell change: `(x, y)` went from `before` to `after`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileEdit {
    pub x: u32,
    pub y: u32,
    pub before: u32,
    pub after: u32,
}

impl TileEdit {
    /// Write `value` into the grid and return the edit, or `None` if the cell already holds it.
    pub fn apply(grid: &mut TileGrid, x: u32, y: u32, value: u32) -> Option<Self> {
        let before = grid.get(x, y);
        if before == value {
            return None;
        }
        grid.set(x, y, value);
        Some(Self {
            x,
            y,
            before,
            after: value,
        })
    }

    pub fn undo(&self, grid: &mut TileGrid) {
        grid.set(self.x, self.y, self.before);
    }

    pub fn redo(&self, grid: &mut TileGrid) {
        grid.set(self.x, self.y, self.after);
    }
}

/// An ordered group of records undone/redone as a single step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    label: String,
    records: Vec<EditRecord>,
}

impl EditBatch {
    /// Create an empty batch. `label` is the undo label shown in the Edit controls.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            records: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Append a record; it becomes the first one undone
    pub fn push(&mut self, record: impl Into<EditRecord>) {
        self.records.push(record.into());
    }

    /// Returns true if the batch holds no records and can be discarded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[EditRecord] {
        &self.records
    }

    /// Undo children in reverse insertion order
    pub fn undo(&self, grid: &mut TileGrid) {
        for record in self.records.iter().rev() {
            record.undo(grid);
        }
    }

    /// Redo children in insertion order, replaying the gesture's intermediate states
    pub fn redo(&self, grid: &mut TileGrid) {
        for record in &self.records {
            record.redo(grid);
        }
    }
}

/// An invertible edit: a single cell change or a nested batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditRecord {
    Atomic(TileEdit),
    Composite(EditBatch),
}

impl EditRecord {
    /// Restore the state from before this edit. Only valid while the edit is applied.
    pub fn undo(&self, grid: &mut TileGrid) {
        match self {
            EditRecord::Atomic(edit) => edit.undo(grid),
            EditRecord::Composite(batch) => batch.undo(grid),
        }
    }

    /// Re-apply this edit. Only valid while the edit is undone.
    pub fn redo(&self, grid: &mut TileGrid) {
        match self {
            EditRecord::Atomic(edit) => edit.redo(grid),
            EditRecord::Composite(batch) => batch.redo(grid),
        }
    }

    /// Label for the Edit controls
    pub fn label(&self) -> &str {
        match self {
            EditRecord::Atomic(_) => "Paint Tile",
            EditRecord::Composite(batch) => batch.label(),
        }
    }

    /// Returns true for a composite with no children
    pub fn is_empty(&self) -> bool {
        match self {
            EditRecord::Atomic(_) => false,
            EditRecord::Composite(batch) => batch.is_empty(),
        }
    }

    /// Number of cell changes, counting through nested batches
    pub fn cell_count(&self) -> usize {
        match self {
            EditRecord::Atomic(_) => 1,
            EditRecord::Composite(batch) => batch.records.iter().map(|r| r.cell_count()).sum(),
        }
    }

    /// Every cell change in insertion order, flattened through nested batches
    pub fn tile_edits(&self) -> Vec<TileEdit> {
        let mut edits = Vec::new();
        self.collect_edits(&mut edits);
        edits
    }

    fn collect_edits(&self, out: &mut Vec<TileEdit>) {
        match self {
            EditRecord::Atomic(edit) => out.push(*edit),
            EditRecord::Composite(batch) => {
                for record in &batch.records {
                    record.collect_edits(out);
                }
            }
        }
    }
}

impl From<TileEdit> for EditRecord {
    fn from(edit: TileEdit) -> Self {
        EditRecord::Atomic(edit)
    }
}

impl From<EditBatch> for EditRecord {
    fn from(batch: EditBatch) -> Self {
        EditRecord::Composite(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_skips_noop() {
        let mut grid = TileGrid::new();
        assert!(TileEdit::apply(&mut grid, 1, 1, 0).is_none());

        let edit = TileEdit::apply(&mut grid, 1, 1, 4).unwrap();
        assert_eq!(
            edit,
            TileEdit {
                x: 1,
                y: 1,
                before: 0,
                after: 4
            }
        );
        assert_eq!(grid.get(1, 1), 4);
    }

    #[test]
    fn test_atomic_round_trip() {
        let mut grid = TileGrid::new();
        let record = EditRecord::from(TileEdit::apply(&mut grid, 5, 6, 9).unwrap());

        record.undo(&mut grid);
        assert_eq!(grid.get(5, 6), 0);

        record.redo(&mut grid);
        assert_eq!(grid.get(5, 6), 9);
    }

    #[test]
    fn test_batch_undo_restores_intermediate_states() {
        // Same cell written twice within one gesture: 0 -> 3 -> 7
        let mut grid = TileGrid::new();
        let mut batch = EditBatch::new("Paint");
        batch.push(TileEdit::apply(&mut grid, 0, 0, 3).unwrap());
        batch.push(TileEdit::apply(&mut grid, 0, 0, 7).unwrap());

        batch.undo(&mut grid);
        assert_eq!(grid.get(0, 0), 0);

        batch.redo(&mut grid);
        assert_eq!(grid.get(0, 0), 7);
    }

    #[test]
    fn test_nested_batches() {
        let mut grid = TileGrid::new();
        let mut inner = EditBatch::new("inner");
        inner.push(TileEdit::apply(&mut grid, 1, 0, 2).unwrap());
        inner.push(TileEdit::apply(&mut grid, 2, 0, 2).unwrap());

        let mut outer = EditBatch::new("outer");
        outer.push(TileEdit::apply(&mut grid, 0, 0, 1).unwrap());
        outer.push(inner);

        let record = EditRecord::from(outer);
        assert_eq!(record.cell_count(), 3);
        assert_eq!(record.tile_edits().len(), 3);
        assert_eq!(record.label(), "outer");

        record.undo(&mut grid);
        assert_eq!(grid, TileGrid::new());

        record.redo(&mut grid);
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(1, 0), 2);
        assert_eq!(grid.get(2, 0), 2);
    }

    #[test]
    fn test_empty_batch() {
        let batch = EditBatch::new("Fill");
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert!(EditRecord::from(batch).is_empty());
    }
}
