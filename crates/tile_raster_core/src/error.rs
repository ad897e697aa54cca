//! Error types for palette editing and file persistence

use thiserror::Error;

/// Errors that can occur when loading or saving tilemap and palette files
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialize error: {0}")]
    Serialize(String),
    /// The file parsed but its contents break a grid or palette invariant
    #[error("Invalid data: {0}")]
    Invalid(String),
}

/// Errors from palette slot operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Palette is full ({0} slots)")]
    Full(u32),
    #[error("Slot 0 is the eraser and cannot be removed")]
    ReservedSlot,
    #[error("Slot {0} is empty")]
    EmptySlot(u32),
    #[error("Slot {0} is out of range")]
    OutOfRange(u32),
    #[error("Tile source path is empty")]
    EmptyPath,
}
