//! Undo/redo history and keyboard shortcuts

mod history;
mod shortcuts;

pub use history::CommandHistory;
pub use shortcuts::{handle_keyboard_shortcuts, shortcut_action};
