//! Read model handed to the presentation layer
//!
//! Everything here is a snapshot. The presentation layer paints it and
//! reports pointer events back to the engine; it never mutates positions.

use serde::Serialize;
use crate::grid::{Cell, GridSpec};
use crate::item::{Item, ItemId, ItemKind};
use crate::math::{Rect, Size, Vec2};

/// One frame of desktop state
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopView {
    pub screen: Size,
    pub grid: GridInfo,
    /// Cell rectangles of the debug overlay, empty while it is hidden
    pub overlay: Vec<Rect>,
    pub icons: Vec<IconView>,
    /// Open folder windows, back to front
    pub windows: Vec<FolderWindowView>,
    /// Item being dragged, if any
    pub dragging: Option<ItemId>,
}

/// Desktop lattice summary for the overlay label
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridInfo {
    pub cols: u32,
    pub rows: u32,
    pub cell: Size,
    pub origin: f32,
    pub zoom_percent: u32,
    pub show_grid: bool,
}

impl GridInfo {
    pub fn new(spec: &GridSpec, zoom_percent: u32, show_grid: bool) -> Self {
        Self {
            cols: spec.dims.cols,
            rows: spec.dims.rows,
            cell: spec.cell,
            origin: spec.origin,
            zoom_percent,
            show_grid,
        }
    }
}

/// An icon as painted
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconView {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub icon: String,
    /// Content-space position inside the owning container
    pub position: Vec2,
    /// Lattice cell, `None` in free-placement containers
    pub cell: Option<Cell>,
    pub dragging: bool,
}

impl IconView {
    pub fn new(item: &Item, grid: Option<&GridSpec>, dragging: Option<&ItemId>) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind,
            icon: item.icon.clone(),
            position: item.position,
            cell: grid.map(|g| g.to_cell(item.position)),
            dragging: dragging == Some(&item.id),
        }
    }
}

/// An open folder window as painted
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderWindowView {
    pub folder_id: ItemId,
    pub title: String,
    pub icon: String,
    pub kind: ItemKind,
    /// Frame in screen space, title bar included
    pub rect: Rect,
    /// Screen position of the content area
    pub content_origin: Vec2,
    pub z_order: u32,
    pub grid_mode: bool,
    pub item_count: usize,
    pub icons: Vec<IconView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridDims;

    #[test]
    fn test_icon_view_cell_only_in_grid() {
        let item = Item::file("4", "müzik.mp3", "🎵", Vec2::new(96.0, 176.0));
        let spec = GridSpec::new(GridDims::new(16, 9), Size::new(80.0, 80.0), 16.0);

        let snapped = IconView::new(&item, Some(&spec), None);
        assert_eq!(snapped.cell, Some(Cell::new(1, 2)));
        assert!(!snapped.dragging);

        let free = IconView::new(&item, None, Some(&"4".into()));
        assert!(free.cell.is_none());
        assert!(free.dragging);
    }

    #[test]
    fn test_grid_info_serializes_camel_case() {
        let spec = GridSpec::new(GridDims::new(16, 9), Size::new(80.0, 80.0), 16.0);
        let json = serde_json::to_value(GridInfo::new(&spec, 100, true)).unwrap();
        assert_eq!(json["zoomPercent"], 100);
        assert_eq!(json["showGrid"], true);
        assert_eq!(json["cols"], 16);
    }
}
