//! Input result type

use serde::Serialize;
use crate::item::ItemId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// A double click opened a folder window
    FolderOpened {
        /// Folder whose window is now open
        folder_id: ItemId,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::FolderOpened { .. })
    }
}
