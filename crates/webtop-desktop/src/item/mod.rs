//! Desktop items: files, folders and freefolders
//!
//! Items are labels with an emoji icon and a pixel position. Folders own
//! their content list; an open folder window is only a view over it.

mod seed;

pub use seed::initial_items;

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::math::Vec2;

/// Unique, immutable item identifier (`"1"`, `"1-3"`, ...)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What an item is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Plain file, never has children
    File,
    /// Folder whose window snaps content to a grid
    Folder,
    /// Folder whose window places content freely, overlap allowed
    FreeFolder,
}

impl ItemKind {
    /// Check if this kind can hold children
    #[inline]
    pub fn is_container(self) -> bool {
        matches!(self, ItemKind::Folder | ItemKind::FreeFolder)
    }
}

/// An icon on the desktop or inside a folder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    /// Opaque label painted by the presentation layer (an emoji)
    pub icon: String,
    /// Top-left corner in the owning container's content space
    pub position: Vec2,
    /// Content list; `None` means the item cannot be opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Item>>,
}

impl Item {
    /// Create a file
    pub fn file(id: &str, name: &str, icon: &str, position: Vec2) -> Self {
        Self {
            id: ItemId::from(id),
            name: name.to_string(),
            kind: ItemKind::File,
            icon: icon.to_string(),
            position,
            children: None,
        }
    }

    /// Create a folder or freefolder with the given content
    pub fn folder(id: &str, name: &str, kind: ItemKind, icon: &str, position: Vec2, children: Vec<Item>) -> Self {
        Self {
            id: ItemId::from(id),
            name: name.to_string(),
            kind,
            icon: icon.to_string(),
            position,
            children: Some(children),
        }
    }

    /// Check if this item can be opened as a folder window
    #[inline]
    pub fn is_openable(&self) -> bool {
        self.kind.is_container() && self.children.is_some()
    }
}

/// Find an item anywhere in a tree of items
pub fn find<'a>(items: &'a [Item], id: &ItemId) -> Option<&'a Item> {
    for item in items {
        if &item.id == id {
            return Some(item);
        }
        if let Some(found) = item.children.as_deref().and_then(|c| find(c, id)) {
            return Some(found);
        }
    }
    None
}

/// Find an item anywhere in a tree of items, mutably
pub fn find_mut<'a>(items: &'a mut [Item], id: &ItemId) -> Option<&'a mut Item> {
    for item in items.iter_mut() {
        if &item.id == id {
            return Some(item);
        }
        if let Some(found) = item.children.as_deref_mut().and_then(|c| find_mut(c, id)) {
            return Some(found);
        }
    }
    None
}
