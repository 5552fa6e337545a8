//! Folder window module
//!
//! Open folders are shown as fixed-size floating windows. Windows keep the
//! order they were opened in; there is no focus or raise.

mod folder;
mod manager;

pub use folder::FolderWindow;
pub use manager::WindowManager;
