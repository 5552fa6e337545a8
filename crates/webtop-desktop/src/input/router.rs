//! Input router state machine

use tracing::debug;
use crate::container::ContainerId;
use crate::item::ItemId;
use crate::math::Vec2;
use super::DragState;

/// Input router managing drag state
///
/// At most one drag is active; a second pointer-down while dragging is
/// rejected until the first drag ends.
#[derive(Debug, Default)]
pub struct InputRouter {
    /// Current drag state
    drag: DragState,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Start dragging an icon; returns `false` if a drag is already active
    pub fn start_drag(&mut self, item_id: ItemId, container: ContainerId, offset: Vec2) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        debug!(item = %item_id, %container, "drag started");
        self.drag = DragState::Dragging {
            item_id,
            container,
            offset,
        };
        true
    }

    /// End current drag, returning the item that was dragged
    pub fn end_drag(&mut self) -> Option<ItemId> {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging { item_id, .. } => {
                debug!(item = %item_id, "drag ended");
                Some(item_id)
            }
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_router_drag_cycle() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());

        assert!(router.start_drag("4".into(), ContainerId::Desktop, Vec2::new(10.0, 10.0)));
        assert!(router.is_dragging());

        if let DragState::Dragging { item_id, container, .. } = router.drag_state() {
            assert_eq!(item_id.as_str(), "4");
            assert_eq!(*container, ContainerId::Desktop);
        } else {
            panic!("Expected Dragging state");
        }

        assert_eq!(router.end_drag(), Some(ItemId::from("4")));
        assert!(!router.is_dragging());
        assert!(!router.drag_state().is_dragging());
    }

    #[test]
    fn test_only_one_drag_at_a_time() {
        let mut router = InputRouter::new();
        assert!(router.start_drag("4".into(), ContainerId::Desktop, Vec2::ZERO));
        assert!(!router.start_drag("5".into(), ContainerId::Desktop, Vec2::ZERO));
        assert_eq!(router.drag_state().item_id(), Some(&ItemId::from("4")));
    }

    #[test]
    fn test_end_drag_when_idle() {
        let mut router = InputRouter::new();
        assert!(router.end_drag().is_none());
    }
}
