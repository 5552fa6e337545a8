//! Containers and their published geometry
//!
//! A container is the desktop or an open folder window. Each container
//! publishes its content origin, bounds and layout to the
//! [`GeometryRegistry`] when it opens or resizes; drag handling reads
//! geometry from there instead of querying the presentation tree.

mod registry;

pub use registry::GeometryRegistry;

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::grid::GridSpec;
use crate::item::ItemId;
use crate::math::{Size, Vec2};

/// Identifies the container an item lives in
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum ContainerId {
    /// The always-open desktop root
    Desktop,
    /// An open folder window, keyed by the folder item's id
    Folder(ItemId),
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerId::Desktop => f.write_str("desktop"),
            ContainerId::Folder(id) => write!(f, "folder:{}", id),
        }
    }
}

/// How items are placed inside a container
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Layout {
    /// Items snap to a lattice and never share a cell
    Grid(GridSpec),
    /// Items sit at raw pixel positions and may overlap
    Free {
        /// Icon footprint, used to keep icons inside the bounds
        cell: Size,
    },
}

/// Geometry a container publishes to the registry
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerGeometry {
    /// Screen position of the container's content origin
    pub origin: Vec2,
    /// Size of the content area
    pub bounds: Size,
    pub layout: Layout,
}

impl ContainerGeometry {
    /// Check if the container snaps items to a grid
    #[inline]
    pub fn is_grid_mode(&self) -> bool {
        matches!(self.layout, Layout::Grid(_))
    }

    /// Grid spec if the container is grid-mode
    #[inline]
    pub fn grid(&self) -> Option<&GridSpec> {
        match &self.layout {
            Layout::Grid(spec) => Some(spec),
            Layout::Free { .. } => None,
        }
    }

    /// Convert a screen point to content-space
    #[inline]
    pub fn to_local(&self, screen: Vec2) -> Vec2 {
        screen - self.origin
    }

    /// Clamp a content-space position so an icon stays inside the bounds
    pub fn clamp_position(&self, pos: Vec2) -> Vec2 {
        let cell = match &self.layout {
            Layout::Grid(spec) => spec.cell,
            Layout::Free { cell } => *cell,
        };
        let max = self.bounds.as_vec2() - cell.as_vec2();
        pos.clamp(Vec2::ZERO, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridDims;

    fn free_geometry() -> ContainerGeometry {
        ContainerGeometry {
            origin: Vec2::new(146.0, 186.0),
            bounds: Size::new(568.0, 328.0),
            layout: Layout::Free { cell: Size::new(80.0, 80.0) },
        }
    }

    #[test]
    fn test_container_id_display() {
        assert_eq!(ContainerId::Desktop.to_string(), "desktop");
        assert_eq!(ContainerId::Folder("3".into()).to_string(), "folder:3");
    }

    #[test]
    fn test_grid_mode() {
        let grid = ContainerGeometry {
            origin: Vec2::ZERO,
            bounds: Size::new(1312.0, 752.0),
            layout: Layout::Grid(GridSpec::new(GridDims::new(16, 9), Size::new(80.0, 80.0), 16.0)),
        };
        assert!(grid.is_grid_mode());
        assert!(grid.grid().is_some());
        assert!(!free_geometry().is_grid_mode());
        assert!(free_geometry().grid().is_none());
    }

    #[test]
    fn test_to_local() {
        let local = free_geometry().to_local(Vec2::new(200.0, 200.0));
        assert_eq!(local, Vec2::new(54.0, 14.0));
    }

    #[test]
    fn test_clamp_position_keeps_icon_inside() {
        let geometry = free_geometry();
        assert_eq!(geometry.clamp_position(Vec2::new(-20.0, 50.0)), Vec2::new(0.0, 50.0));
        assert_eq!(geometry.clamp_position(Vec2::new(1000.0, 1000.0)), Vec2::new(488.0, 248.0));
    }
}
