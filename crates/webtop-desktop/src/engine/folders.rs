//! Folder window lifecycle

use tracing::debug;
use crate::container::ContainerId;
use crate::error::{DesktopError, Result};
use crate::item::ItemId;
use crate::math::Vec2;
use super::DesktopEngine;

impl DesktopEngine {
    /// Open the folder `folder_id` shown in `container`
    ///
    /// The window is framed relative to the folder icon's screen position.
    /// Returns `Ok(false)` for a folder without a content list, and
    /// `Ok(true)` without side effects if it is already open.
    pub fn open_folder(&mut self, container: &ContainerId, folder_id: &ItemId) -> Result<bool> {
        let origin = self
            .geometry
            .get(container)
            .ok_or_else(|| DesktopError::UnknownContainer(container.clone()))?
            .origin;
        let icon = self.store.item(container, folder_id)?;
        if !icon.kind.is_container() {
            return Err(DesktopError::NotAFolder(folder_id.clone()));
        }
        let icon_screen_pos = origin + icon.position;

        if self.store.is_open(folder_id) {
            return Ok(true);
        }

        // Content comes from the persistent tree, the view may be stale for nested folders
        let folder = match self.store.find(folder_id) {
            Some(folder) if folder.is_openable() => folder.clone(),
            _ => {
                debug!(folder = %folder_id, "folder has no content list, not opened");
                return Ok(false);
            }
        };

        let geometry = self.windows.open(&folder, icon_screen_pos, &self.config).geometry(&self.config);
        self.geometry.publish(ContainerId::Folder(folder_id.clone()), geometry);
        Ok(self.store.open_folder(&folder).is_some())
    }

    /// Close a folder window
    ///
    /// A drag inside the folder is cancelled. Positions already committed
    /// through the folder stay in its content.
    pub fn close_folder(&mut self, folder_id: &ItemId) -> bool {
        let container = ContainerId::Folder(folder_id.clone());
        if self.input.drag_state().container() == Some(&container) {
            self.input.end_drag();
        }

        let closed = self.windows.close(folder_id).is_some();
        self.geometry.withdraw(&container);
        self.store.close_folder(folder_id) || closed
    }

    /// Move open folder windows back onto their icons after a drop
    ///
    /// Windows are visited in open order, so a nested window follows a
    /// parent window moved earlier in the same pass.
    pub(crate) fn reanchor_windows(&mut self) {
        let open: Vec<ItemId> = self.windows.windows_by_z().iter().map(|w| w.folder_id.clone()).collect();
        for folder_id in &open {
            let Some((container, position)) = self.icon_location(folder_id) else {
                continue;
            };
            let Some(origin) = self.geometry.get(&container).map(|g| g.origin) else {
                continue;
            };
            if let Some(window) = self.windows.reanchor(folder_id, origin + position, &self.config) {
                let geometry = window.geometry(&self.config);
                self.geometry.publish(ContainerId::Folder(folder_id.clone()), geometry);
            }
        }
    }

    /// Container showing the folder icon `folder_id`, and the icon's position
    fn icon_location(&self, folder_id: &ItemId) -> Option<(ContainerId, Vec2)> {
        if let Some(item) = self.store.desktop_items().iter().find(|i| &i.id == folder_id) {
            return Some((ContainerId::Desktop, item.position));
        }
        self.store.open_folder_ids().find_map(|parent| {
            let container = ContainerId::Folder(parent.clone());
            let position = self.store.item(&container, folder_id).ok()?.position;
            Some((container, position))
        })
    }
}
