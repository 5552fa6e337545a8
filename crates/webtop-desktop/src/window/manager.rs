//! Folder window manager: open order and lookup

use tracing::debug;
use crate::config::DesktopConfig;
use crate::item::{Item, ItemId};
use crate::math::Vec2;
use super::FolderWindow;

/// Window manager handling folder window lifecycle and stacking
#[derive(Debug)]
pub struct WindowManager {
    /// Open windows, back to front
    windows: Vec<FolderWindow>,
    /// Next z-order value
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_z: 1,
        }
    }

    /// Open a window for `folder`, or return the one already open
    pub fn open(&mut self, folder: &Item, icon_screen_pos: Vec2, config: &DesktopConfig) -> &FolderWindow {
        let index = match self.windows.iter().position(|w| w.folder_id == folder.id) {
            Some(index) => index,
            None => {
                let window = FolderWindow::new(folder, icon_screen_pos, self.next_z, config);
                self.next_z += 1;
                debug!(folder = %folder.id, x = window.rect.x, y = window.rect.y, "folder window opened");
                self.windows.push(window);
                self.windows.len() - 1
            }
        };
        &self.windows[index]
    }

    /// Close a window
    pub fn close(&mut self, folder_id: &ItemId) -> Option<FolderWindow> {
        let index = self.windows.iter().position(|w| &w.folder_id == folder_id)?;
        Some(self.windows.remove(index))
    }

    /// Re-anchor a window on its folder icon's screen position
    ///
    /// Returns the window if its frame moved.
    pub fn reanchor(&mut self, folder_id: &ItemId, icon_screen_pos: Vec2, config: &DesktopConfig) -> Option<&FolderWindow> {
        let window = self.windows.iter_mut().find(|w| &w.folder_id == folder_id)?;
        if !window.anchor_to(icon_screen_pos, config) {
            return None;
        }
        debug!(folder = %folder_id, x = window.rect.x, y = window.rect.y, "folder window moved");
        Some(&*window)
    }

    /// Get a window by folder ID
    pub fn get(&self, folder_id: &ItemId) -> Option<&FolderWindow> {
        self.windows.iter().find(|w| &w.folder_id == folder_id)
    }

    /// Windows back to front
    #[inline]
    pub fn windows_by_z(&self) -> &[FolderWindow] {
        &self.windows
    }

    /// Get the number of windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}
