//! Snapshot of engine state for painting

use crate::container::ContainerId;
use crate::view::{DesktopView, FolderWindowView, GridInfo, IconView};
use crate::window::FolderWindow;
use super::DesktopEngine;

impl DesktopEngine {
    /// Build the read model for the current frame
    pub fn view(&self) -> DesktopView {
        let grid = self.desktop_grid();
        let dragging = self.input.drag_state().item_id();

        let overlay = if self.show_grid {
            grid.dims.cells().map(|cell| grid.cell_rect(cell)).collect()
        } else {
            Vec::new()
        };

        let icons = self
            .store
            .desktop_items()
            .iter()
            .map(|item| IconView::new(item, Some(&grid), dragging))
            .collect();

        let windows = self
            .windows
            .windows_by_z()
            .iter()
            .map(|w| self.window_view(w))
            .collect();

        DesktopView {
            screen: self.screen_size(),
            grid: GridInfo::new(&grid, self.zoom.percent(), self.show_grid),
            overlay,
            icons,
            windows,
            dragging: dragging.cloned(),
        }
    }

    fn window_view(&self, window: &FolderWindow) -> FolderWindowView {
        let container = ContainerId::Folder(window.folder_id.clone());
        let geometry = self.geometry.get(&container);
        let grid = geometry.and_then(|g| g.grid());
        let dragging = self.input.drag_state().item_id();

        let icons: Vec<IconView> = self
            .store
            .items(&container)
            .unwrap_or_default()
            .iter()
            .map(|item| IconView::new(item, grid, dragging))
            .collect();

        FolderWindowView {
            folder_id: window.folder_id.clone(),
            title: window.title.clone(),
            icon: window.icon.clone(),
            kind: window.kind,
            rect: window.rect,
            content_origin: window.content_origin(&self.config),
            z_order: window.z_order,
            grid_mode: grid.is_some(),
            item_count: icons.len(),
            icons,
        }
    }
}
