use bevy::prelude::*;
use tile_raster_core::{EditHistory, EditRecord};

use crate::document::RasterDocument;

/// Session undo/redo history for the open document
#[derive(Resource, Default)]
pub struct CommandHistory {
    edits: EditHistory,
}

impl CommandHistory {
    /// History handed to the brush engine, which records into it directly
    pub fn edits_mut(&mut self) -> &mut EditHistory {
        &mut self.edits
    }

    /// Add an already-applied record
    pub fn record(&mut self, record: impl Into<EditRecord>) {
        self.edits.record(record);
    }

    /// Undo the last record
    pub fn undo(&mut self, document: &mut RasterDocument) -> bool {
        let label = self.edits.undo_label().map(str::to_string);
        if !self.edits.undo(&mut document.grid) {
            return false;
        }
        document.mark_dirty();
        info!("Undo {}", label.unwrap_or_default());
        true
    }

    /// Redo the last undone record
    pub fn redo(&mut self, document: &mut RasterDocument) -> bool {
        let label = self.edits.redo_label().map(str::to_string);
        if !self.edits.redo(&mut document.grid) {
            return false;
        }
        document.mark_dirty();
        info!("Redo {}", label.unwrap_or_default());
        true
    }

    pub fn can_undo(&self) -> bool {
        self.edits.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.edits.can_redo()
    }

    /// Get description of record to undo
    pub fn undo_description(&self) -> Option<&str> {
        self.edits.undo_label()
    }

    /// Get description of record to redo
    pub fn redo_description(&self) -> Option<&str> {
        self.edits.redo_label()
    }

    /// Clear all history (e.g., when opening a new document)
    pub fn clear(&mut self) {
        self.edits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile_raster_core::{EditBatch, TileEdit};

    #[test]
    fn test_undo_marks_dirty() {
        let mut document = RasterDocument::new();
        let mut history = CommandHistory::default();

        let mut batch = EditBatch::new("Paint");
        batch.push(TileEdit::apply(&mut document.grid, 3, 3, 4).unwrap());
        history.record(batch);
        assert_eq!(history.undo_description(), Some("Paint"));
        assert!(!document.is_dirty());

        assert!(history.undo(&mut document));
        assert!(document.is_dirty());
        assert_eq!(document.grid.get(3, 3), 0);
        assert_eq!(history.redo_description(), Some("Paint"));

        assert!(history.redo(&mut document));
        assert_eq!(document.grid.get(3, 3), 4);
    }

    #[test]
    fn test_empty_history_keeps_document_clean() {
        let mut document = RasterDocument::new();
        let mut history = CommandHistory::default();

        assert!(!history.undo(&mut document));
        assert!(!history.redo(&mut document));
        assert!(!document.is_dirty());
    }

    #[test]
    fn test_clear() {
        let mut document = RasterDocument::new();
        let mut history = CommandHistory::default();
        history.record(TileEdit::apply(&mut document.grid, 0, 0, 1).unwrap());
        assert!(history.can_undo());

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
