//! Folder window frame

use serde::Serialize;
use crate::config::DesktopConfig;
use crate::container::{ContainerGeometry, Layout};
use crate::grid::GridSpec;
use crate::item::{Item, ItemId, ItemKind};
use crate::math::{Rect, Vec2};

/// A floating window showing one open folder
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderWindow {
    pub folder_id: ItemId,
    pub title: String,
    pub icon: String,
    pub kind: ItemKind,
    /// Frame in screen space, title bar included
    pub rect: Rect,
    /// Static stacking position, later windows paint on top
    pub z_order: u32,
}

impl FolderWindow {
    /// Frame a window for `folder`, whose icon sits at `icon_screen_pos`
    pub fn new(folder: &Item, icon_screen_pos: Vec2, z_order: u32, config: &DesktopConfig) -> Self {
        Self {
            folder_id: folder.id.clone(),
            title: folder.name.clone(),
            icon: folder.icon.clone(),
            kind: folder.kind,
            rect: Rect::from_pos_size(icon_screen_pos + config.folder_window_offset, config.folder_window),
            z_order,
        }
    }

    /// Move the frame so it sits offset from the folder icon at `icon_screen_pos`
    ///
    /// Returns `true` if the frame moved.
    pub fn anchor_to(&mut self, icon_screen_pos: Vec2, config: &DesktopConfig) -> bool {
        let rect = Rect::from_pos_size(icon_screen_pos + config.folder_window_offset, config.folder_window);
        let moved = rect != self.rect;
        self.rect = rect;
        moved
    }

    /// Check if items move freely inside this window
    #[inline]
    pub fn is_free(&self) -> bool {
        self.kind == ItemKind::FreeFolder
    }

    /// Screen position of the content area's top-left corner
    #[inline]
    pub fn content_origin(&self, config: &DesktopConfig) -> Vec2 {
        self.rect.position() + Vec2::new(0.0, config.title_bar_height)
    }

    /// Geometry this window publishes for its content
    pub fn geometry(&self, config: &DesktopConfig) -> ContainerGeometry {
        let layout = if self.is_free() {
            Layout::Free {
                cell: config.folder_cell,
            }
        } else {
            Layout::Grid(GridSpec::new(config.folder_grid_dims(), config.folder_cell, config.padding))
        };
        ContainerGeometry {
            origin: self.content_origin(config),
            bounds: config.folder_content_size(),
            layout,
        }
    }
}
