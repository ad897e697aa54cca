//! Linear undo/redo history

use crate::edit::EditRecord;
use crate::grid::TileGrid;

/// Undo/redo stacks of top-level edit records.
///
/// Records are pushed after their changes are already on the grid, so
/// [`EditHistory::record`] never touches the grid. Recording clears the redo
/// stack; there is no branching history.
#[derive(Debug, Default)]
pub struct EditHistory {
    /// Records that are currently applied
    done: Vec<EditRecord>,
    /// Records that have been undone
    undone: Vec<EditRecord>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an already-applied record and drop the redo lineage
    pub fn record(&mut self, record: impl Into<EditRecord>) {
        self.done.push(record.into());
        self.undone.clear();
    }

    /// Undo the last record. Returns false if there was nothing to undo.
    pub fn undo(&mut self, grid: &mut TileGrid) -> bool {
        let Some(record) = self.done.pop() else {
            return false;
        };
        record.undo(grid);
        self.undone.push(record);
        true
    }

    /// Redo the last undone record. Returns false if there was nothing to redo.
    pub fn redo(&mut self, grid: &mut TileGrid) -> bool {
        let Some(record) = self.undone.pop() else {
            return false;
        };
        record.redo(grid);
        self.done.push(record);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Label of the record that would be undone next
    pub fn undo_label(&self) -> Option<&str> {
        self.done.last().map(|r| r.label())
    }

    /// Label of the record that would be redone next
    pub fn redo_label(&self) -> Option<&str> {
        self.undone.last().map(|r| r.label())
    }

    /// Most recently applied record
    pub fn last(&self) -> Option<&EditRecord> {
        self.done.last()
    }

    /// Number of applied records available for undo
    pub fn undo_len(&self) -> usize {
        self.done.len()
    }

    /// True when neither undo nor redo has a record
    pub fn is_empty(&self) -> bool {
        self.done.is_empty() && self.undone.is_empty()
    }

    /// Number of undone records available for redo
    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }

    /// Drop both stacks (new document)
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}
