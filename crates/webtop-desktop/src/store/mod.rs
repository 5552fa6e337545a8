//! Spatial store: the authoritative item positions
//!
//! The desktop's items are the persistent tree. Opening a folder copies its
//! content into a transient view; position updates made through the view
//! are mirrored into the owning folder's content so they survive a close
//! and reopen.

use tracing::{debug, trace};
use crate::container::ContainerId;
use crate::error::{DesktopError, Result};
use crate::item::{self, Item, ItemId};
use crate::math::Vec2;

/// Transient view over an open folder's content
#[derive(Clone, Debug)]
struct FolderView {
    folder_id: ItemId,
    items: Vec<Item>,
}

/// In-memory item positions, scoped per container
#[derive(Clone, Debug)]
pub struct SpatialStore {
    /// Persistent tree rooted at the desktop
    desktop: Vec<Item>,
    /// Open folder views in the order they were opened
    open: Vec<FolderView>,
}

impl Default for SpatialStore {
    fn default() -> Self {
        Self::new(item::initial_items())
    }
}

impl SpatialStore {
    /// Create a store holding `items` on the desktop
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            desktop: items,
            open: Vec::new(),
        }
    }

    /// Top-level desktop items
    #[inline]
    pub fn desktop_items(&self) -> &[Item] {
        &self.desktop
    }

    /// Items of a container, `None` if the folder is not open
    pub fn items(&self, container: &ContainerId) -> Option<&[Item]> {
        match container {
            ContainerId::Desktop => Some(&self.desktop),
            ContainerId::Folder(id) => self.view(id).map(|v| v.items.as_slice()),
        }
    }

    /// Look up an item within a container
    pub fn item(&self, container: &ContainerId, id: &ItemId) -> Result<&Item> {
        let items = self
            .items(container)
            .ok_or_else(|| DesktopError::UnknownContainer(container.clone()))?;
        items
            .iter()
            .find(|i| &i.id == id)
            .ok_or_else(|| DesktopError::UnknownItem(id.clone()))
    }

    /// Look up an item anywhere in the persistent tree
    #[inline]
    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        item::find(&self.desktop, id)
    }

    /// Move an item within a container
    ///
    /// Updates through a folder view are mirrored into the folder's own
    /// content list. Returns `false` (and changes nothing) if the container
    /// is not open or does not hold the item.
    pub fn update_item_position(&mut self, id: &ItemId, position: Vec2, container: &ContainerId) -> bool {
        let folder_id = match container {
            ContainerId::Desktop => {
                return match self.desktop.iter_mut().find(|i| &i.id == id) {
                    Some(item) => {
                        item.position = position;
                        trace!(item = %id, x = position.x, y = position.y, "desktop position updated");
                        true
                    }
                    None => false,
                };
            }
            ContainerId::Folder(folder_id) => folder_id,
        };

        let Some(view) = self.open.iter_mut().find(|v| &v.folder_id == folder_id) else {
            trace!(item = %id, folder = %folder_id, "position update for closed folder ignored");
            return false;
        };
        let Some(entry) = view.items.iter_mut().find(|i| &i.id == id) else {
            return false;
        };
        entry.position = position;

        let owner = item::find_mut(&mut self.desktop, folder_id)
            .and_then(|folder| folder.children.as_mut())
            .and_then(|children| children.iter_mut().find(|i| &i.id == id));
        let mirrored = match owner {
            Some(child) => {
                child.position = position;
                true
            }
            None => false,
        };
        trace!(item = %id, folder = %folder_id, mirrored, "folder position updated");
        true
    }

    /// Open a folder view over `folder`'s content
    ///
    /// Items without a content list are not opened and `None` is returned.
    /// Opening an already open folder keeps the existing view.
    pub fn open_folder(&mut self, folder: &Item) -> Option<&[Item]> {
        let children = folder.children.as_ref()?;
        let index = match self.open.iter().position(|v| v.folder_id == folder.id) {
            Some(index) => index,
            None => {
                debug!(folder = %folder.id, items = children.len(), "folder opened");
                self.open.push(FolderView {
                    folder_id: folder.id.clone(),
                    items: children.clone(),
                });
                self.open.len() - 1
            }
        };
        Some(&self.open[index].items)
    }

    /// Discard a folder view; the folder's content is untouched
    pub fn close_folder(&mut self, folder_id: &ItemId) -> bool {
        let before = self.open.len();
        self.open.retain(|v| &v.folder_id != folder_id);
        let closed = self.open.len() != before;
        if closed {
            debug!(folder = %folder_id, "folder closed");
        }
        closed
    }

    /// Check if a folder view is open
    #[inline]
    pub fn is_open(&self, folder_id: &ItemId) -> bool {
        self.view(folder_id).is_some()
    }

    /// Open folder ids in opening order
    pub fn open_folder_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.open.iter().map(|v| &v.folder_id)
    }

    fn view(&self, folder_id: &ItemId) -> Option<&FolderView> {
        self.open.iter().find(|v| &v.folder_id == folder_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(store: &SpatialStore, id: &str) -> Item {
        store.find(&id.into()).cloned().unwrap()
    }

    #[test]
    fn test_update_desktop_position() {
        let mut store = SpatialStore::default();
        assert!(store.update_item_position(&"4".into(), Vec2::new(336.0, 16.0), &ContainerId::Desktop));
        let item = store.item(&ContainerId::Desktop, &"4".into()).unwrap();
        assert_eq!(item.position, Vec2::new(336.0, 16.0));
    }

    #[test]
    fn test_update_unknown_item_is_noop() {
        let mut store = SpatialStore::default();
        assert!(!store.update_item_position(&"99".into(), Vec2::ZERO, &ContainerId::Desktop));
    }

    #[test]
    fn test_update_in_closed_folder_is_noop() {
        let mut store = SpatialStore::default();
        let container = ContainerId::Folder("3".into());
        assert!(!store.update_item_position(&"3-1".into(), Vec2::ZERO, &container));
        assert_eq!(folder(&store, "3-1").position, Vec2::new(80.0, 60.0));
    }

    #[test]
    fn test_open_folder_snapshots_children() {
        let mut store = SpatialStore::default();
        let photos = folder(&store, "3");
        let view = store.open_folder(&photos).unwrap();
        assert_eq!(view.len(), 3);
        assert!(store.is_open(&"3".into()));
        assert_eq!(store.open_folder_ids().count(), 1);
    }

    #[test]
    fn test_open_folder_without_children_is_noop() {
        let mut store = SpatialStore::default();
        let file = folder(&store, "4");
        assert!(store.open_folder(&file).is_none());
        let sound = folder(&store, "1-4");
        assert!(store.open_folder(&sound).is_none());
        assert_eq!(store.open_folder_ids().count(), 0);
    }

    #[test]
    fn test_open_twice_is_idempotent() {
        let mut store = SpatialStore::default();
        let game = folder(&store, "1");
        let first = store.open_folder(&game).unwrap().to_vec();
        let second = store.open_folder(&game).unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(store.open_folder_ids().count(), 1);
    }

    #[test]
    fn test_folder_update_is_mirrored_and_survives_reopen() {
        let mut store = SpatialStore::default();
        let container = ContainerId::Folder("1".into());
        let game = folder(&store, "1");
        store.open_folder(&game);

        assert!(store.update_item_position(&"1-2".into(), Vec2::new(10.0, 20.0), &container));
        assert_eq!(store.item(&container, &"1-2".into()).unwrap().position, Vec2::new(10.0, 20.0));
        assert_eq!(folder(&store, "1-2").position, Vec2::new(10.0, 20.0));

        assert!(store.close_folder(&"1".into()));
        assert!(store.items(&container).is_none());
        assert!(!store.close_folder(&"1".into()));

        let game = folder(&store, "1");
        let view = store.open_folder(&game).unwrap();
        let moved = view.iter().find(|i| i.id.as_str() == "1-2").unwrap();
        assert_eq!(moved.position, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_folder_update_does_not_touch_other_containers() {
        let mut store = SpatialStore::default();
        let game = folder(&store, "1");
        store.open_folder(&game);
        // Desktop item id inside a folder container is unknown there
        assert!(!store.update_item_position(&"4".into(), Vec2::ZERO, &ContainerId::Folder("1".into())));
        assert_eq!(folder(&store, "4").position, Vec2::new(96.0, 176.0));
    }

    #[test]
    fn test_item_lookup_errors() {
        let store = SpatialStore::default();
        assert!(matches!(
            store.item(&ContainerId::Folder("2".into()), &"x".into()),
            Err(DesktopError::UnknownContainer(_))
        ));
        assert!(matches!(
            store.item(&ContainerId::Desktop, &"1-1".into()),
            Err(DesktopError::UnknownItem(_))
        ));
    }
}
