//! Drag state for icon moves

use crate::container::ContainerId;
use crate::item::ItemId;
use crate::math::Vec2;

/// Current drag gesture
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    /// No icon is being dragged
    #[default]
    Idle,
    /// Moving an icon
    Dragging {
        /// Icon being moved
        item_id: ItemId,
        /// Container the icon lives in
        container: ContainerId,
        /// Pointer offset from the icon's top-left corner
        offset: Vec2,
    },
}

impl DragState {
    /// Check if an icon is being dragged
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Get the dragged item ID
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            DragState::Dragging { item_id, .. } => Some(item_id),
            DragState::Idle => None,
        }
    }

    /// Get the container of the dragged item
    pub fn container(&self) -> Option<&ContainerId> {
        match self {
            DragState::Dragging { container, .. } => Some(container),
            DragState::Idle => None,
        }
    }
}
