//! Input handling for pointer events and drag operations

use serde::Serialize;
use tracing::{debug, trace, warn};
use crate::container::{ContainerId, Layout};
use crate::error::{DesktopError, Result};
use crate::input::{is_double_click, DragState, InputResult};
use crate::item::ItemId;
use crate::math::Vec2;
use crate::placement::{resolve, Occupancy, Resolution};
use super::DesktopEngine;

/// Where a dropped item ended up
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Placement {
    /// Final content-space position of the dropped item
    pub position: Vec2,
    /// Grid resolution, `None` in free-placement containers
    pub resolution: Option<Resolution>,
}

impl DesktopEngine {
    /// Start dragging an icon grabbed at screen point `pointer`
    ///
    /// Returns `Ok(false)` if another drag is already active.
    pub fn start_drag(&mut self, container: &ContainerId, item_id: &ItemId, pointer: Vec2) -> Result<bool> {
        let geometry = self
            .geometry
            .get(container)
            .ok_or_else(|| DesktopError::UnknownContainer(container.clone()))?;
        let item = self.store.item(container, item_id)?;
        let offset = geometry.to_local(pointer) - item.position;
        Ok(self.input.start_drag(item_id.clone(), container.clone(), offset))
    }

    /// Drop `item_id` at content-space position `target`
    ///
    /// Grid-mode containers snap to the nearest cell and chain-displace its
    /// occupants; free containers only clamp to the bounds. Every resulting
    /// position is committed to the store.
    pub fn drop_item(&mut self, container: &ContainerId, item_id: &ItemId, target: Vec2) -> Result<Placement> {
        let geometry = *self
            .geometry
            .get(container)
            .ok_or_else(|| DesktopError::UnknownContainer(container.clone()))?;

        let spec = match geometry.layout {
            Layout::Free { .. } => {
                // Verify membership before clamping
                self.store.item(container, item_id)?;
                let position = geometry.clamp_position(target);
                self.store.update_item_position(item_id, position, container);
                self.reanchor_windows();
                return Ok(Placement {
                    position,
                    resolution: None,
                });
            }
            Layout::Grid(spec) => spec,
        };

        let from = spec.to_cell(self.store.item(container, item_id)?.position);
        let target_cell = spec.to_cell(target);
        let resolution = {
            let items = self
                .store
                .items(container)
                .ok_or_else(|| DesktopError::UnknownContainer(container.clone()))?;
            let occupancy = Occupancy::from_items(items, &spec, Some(item_id));
            resolve(&occupancy, spec.dims, item_id, from, target_cell)
        };

        for displacement in &resolution.displacements {
            self.store
                .update_item_position(&displacement.item, spec.to_position(displacement.to), container);
        }
        if resolution.overwrite {
            warn!(
                item = %item_id,
                %container,
                cell = %resolution.target,
                "displacement chain hit the grid edge, cell shared"
            );
        }
        if resolution.has_displacements() {
            debug!(
                item = %item_id,
                %container,
                cell = %resolution.target,
                displaced = resolution.displacements.len(),
                "drop resolved with displacement"
            );
        }

        let position = spec.to_position(resolution.target);
        self.store.update_item_position(item_id, position, container);
        self.reanchor_windows();
        Ok(Placement {
            position,
            resolution: Some(resolution),
        })
    }

    /// Handle pointer down on an icon
    ///
    /// The second press of a double click opens folders; any other press
    /// starts a drag.
    pub fn handle_pointer_down(
        &mut self,
        container: &ContainerId,
        item_id: &ItemId,
        x: f32,
        y: f32,
        click_count: u32,
    ) -> InputResult {
        if is_double_click(click_count) {
            return match self.open_folder(container, item_id) {
                Ok(true) => InputResult::FolderOpened {
                    folder_id: item_id.clone(),
                },
                Ok(false) => InputResult::Unhandled,
                Err(e) => {
                    debug!(item = %item_id, error = %e, "double click ignored");
                    InputResult::Unhandled
                }
            };
        }

        match self.start_drag(container, item_id, Vec2::new(x, y)) {
            Ok(true) => InputResult::Handled,
            Ok(false) => InputResult::Unhandled,
            Err(e) => {
                debug!(item = %item_id, error = %e, "pointer down ignored");
                InputResult::Unhandled
            }
        }
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let (item_id, container, offset) = match self.input.drag_state() {
            DragState::Dragging {
                item_id,
                container,
                offset,
            } => (item_id.clone(), container.clone(), *offset),
            DragState::Idle => return InputResult::Unhandled,
        };

        let origin = match self.geometry.get(&container) {
            Some(geometry) => geometry.origin,
            None => {
                // Container closed under the pointer
                self.input.end_drag();
                return InputResult::Unhandled;
            }
        };

        let target = Vec2::new(x, y) - origin - offset;
        match self.drop_item(&container, &item_id, target) {
            Ok(placement) => {
                trace!(item = %item_id, x = placement.position.x, y = placement.position.y, "drag move");
                InputResult::Handled
            }
            Err(e) => {
                warn!(item = %item_id, error = %e, "drag move failed, ending drag");
                self.input.end_drag();
                InputResult::Unhandled
            }
        }
    }

    /// Handle pointer up: the last committed position stays
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end_drag() {
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// Handle wheel event; zooms the desktop grid when `ctrl` is held
    pub fn handle_wheel(&mut self, dy: f32, ctrl: bool) -> InputResult {
        if !ctrl {
            return InputResult::Unhandled;
        }
        if self.zoom.apply_wheel(dy) {
            debug!(cols = self.zoom.cols(), rows = self.zoom.rows(), "desktop zoom changed");
            self.publish_desktop_geometry();
        }
        InputResult::Handled
    }

    /// Handle key down; the configured key toggles the grid overlay
    pub fn handle_key_down(&mut self, code: &str) -> InputResult {
        if code == self.config.grid_toggle_key {
            self.toggle_grid();
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn create_test_engine() -> DesktopEngine {
        // 1312x800 gives 80x80 desktop cells at 16x9
        let mut engine = DesktopEngine::new();
        engine.init(1312.0, 800.0);
        engine
    }

    fn desktop_cell(engine: &DesktopEngine, id: &str) -> Cell {
        let item = engine.store.item(&ContainerId::Desktop, &id.into()).unwrap();
        engine.desktop_grid().to_cell(item.position)
    }

    #[test]
    fn test_pointer_down_starts_drag_with_offset() {
        let mut engine = create_test_engine();

        let result = engine.handle_pointer_down(&ContainerId::Desktop, &"4".into(), 106.0, 196.0, 1);

        assert_eq!(result, InputResult::Handled);
        match engine.input.drag_state() {
            DragState::Dragging { item_id, offset, .. } => {
                assert_eq!(item_id.as_str(), "4");
                assert_eq!(*offset, Vec2::new(10.0, 20.0));
            }
            DragState::Idle => panic!("Expected Dragging state"),
        }
    }

    #[test]
    fn test_pointer_down_unknown_item_unhandled() {
        let mut engine = create_test_engine();
        let result = engine.handle_pointer_down(&ContainerId::Desktop, &"42".into(), 0.0, 0.0, 1);
        assert_eq!(result, InputResult::Unhandled);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_pointer_move_without_drag_unhandled() {
        let mut engine = create_test_engine();
        assert_eq!(engine.handle_pointer_move(500.0, 500.0), InputResult::Unhandled);
    }

    #[test]
    fn test_drag_snaps_to_grid() {
        let mut engine = create_test_engine();
        engine.handle_pointer_down(&ContainerId::Desktop, &"4".into(), 106.0, 196.0, 1);

        // Pointer lands icon origin at (500, 420): nearest cell (6, 5)
        let result = engine.handle_pointer_move(510.0, 440.0);
        assert_eq!(result, InputResult::Handled);
        assert_eq!(desktop_cell(&engine, "4"), Cell::new(6, 5));

        let item = engine.store.item(&ContainerId::Desktop, &"4".into()).unwrap();
        assert_eq!(item.position, Vec2::new(496.0, 416.0));
    }

    #[test]
    fn test_pointer_up_ends_drag_and_keeps_position() {
        let mut engine = create_test_engine();
        engine.handle_pointer_down(&ContainerId::Desktop, &"5".into(), 180.0, 180.0, 1);
        engine.handle_pointer_move(660.0, 180.0);

        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
        assert!(!engine.input.is_dragging());
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);

        // Moves after release do nothing
        engine.handle_pointer_move(100.0, 100.0);
        assert_eq!(desktop_cell(&engine, "5"), Cell::new(8, 2));
    }

    #[test]
    fn test_drop_on_occupied_cell_pushes_occupant() {
        let mut engine = create_test_engine();
        // "1" at (1,1), "2" at (2,1), "3" at (3,1)
        let placement = engine
            .drop_item(&ContainerId::Desktop, &"1".into(), Vec2::new(176.0, 96.0))
            .unwrap();

        assert_eq!(placement.position, Vec2::new(176.0, 96.0));
        let resolution = placement.resolution.unwrap();
        assert_eq!(resolution.displacements.len(), 2);
        assert_eq!(desktop_cell(&engine, "1"), Cell::new(2, 1));
        assert_eq!(desktop_cell(&engine, "2"), Cell::new(3, 1));
        assert_eq!(desktop_cell(&engine, "3"), Cell::new(4, 1));
    }

    #[test]
    fn test_drop_in_unknown_container_fails() {
        let mut engine = create_test_engine();
        let err = engine
            .drop_item(&ContainerId::Folder("2".into()), &"x".into(), Vec2::ZERO)
            .unwrap_err();
        assert!(matches!(err, DesktopError::UnknownContainer(_)));
    }

    #[test]
    fn test_drop_unknown_item_fails() {
        let mut engine = create_test_engine();
        let err = engine
            .drop_item(&ContainerId::Desktop, &"1-1".into(), Vec2::ZERO)
            .unwrap_err();
        assert!(matches!(err, DesktopError::UnknownItem(_)));
    }

    #[test]
    fn test_wheel_with_ctrl_zooms() {
        let mut engine = create_test_engine();

        assert_eq!(engine.handle_wheel(100.0, true), InputResult::Handled);
        assert_eq!(engine.zoom.cols(), 15);
        assert_eq!(engine.desktop_grid().dims.cols, 15);

        assert_eq!(engine.handle_wheel(-100.0, true), InputResult::Handled);
        assert_eq!(engine.zoom.cols(), 16);
    }

    #[test]
    fn test_wheel_without_ctrl_unhandled() {
        let mut engine = create_test_engine();
        assert_eq!(engine.handle_wheel(-100.0, false), InputResult::Unhandled);
        assert_eq!(engine.zoom.cols(), 16);
    }

    #[test]
    fn test_grid_toggle_key() {
        let mut engine = create_test_engine();
        assert_eq!(engine.handle_key_down("F2"), InputResult::Handled);
        assert!(engine.show_grid);
        assert_eq!(engine.handle_key_down("F3"), InputResult::Unhandled);
        assert!(engine.show_grid);
        engine.handle_key_down("F2");
        assert!(!engine.show_grid);
    }
}
