//! Registry of published container geometry

use std::collections::HashMap;
use tracing::trace;
use super::{ContainerGeometry, ContainerId};

/// Container geometry keyed by container id
#[derive(Clone, Debug, Default)]
pub struct GeometryRegistry {
    entries: HashMap<ContainerId, ContainerGeometry>,
}

impl GeometryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish (or republish) a container's geometry
    pub fn publish(&mut self, container: ContainerId, geometry: ContainerGeometry) {
        trace!(%container, ?geometry, "publish container geometry");
        self.entries.insert(container, geometry);
    }

    /// Drop a container's geometry
    pub fn withdraw(&mut self, container: &ContainerId) -> Option<ContainerGeometry> {
        self.entries.remove(container)
    }

    /// Look up a container's geometry
    #[inline]
    pub fn get(&self, container: &ContainerId) -> Option<&ContainerGeometry> {
        self.entries.get(container)
    }

    /// Number of registered containers
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Layout;
    use crate::math::{Size, Vec2};

    fn geometry(x: f32) -> ContainerGeometry {
        ContainerGeometry {
            origin: Vec2::new(x, 0.0),
            bounds: Size::new(100.0, 100.0),
            layout: Layout::Free { cell: Size::new(10.0, 10.0) },
        }
    }

    #[test]
    fn test_publish_and_withdraw() {
        let mut registry = GeometryRegistry::new();
        assert!(registry.is_empty());

        registry.publish(ContainerId::Desktop, geometry(0.0));
        registry.publish(ContainerId::Folder("1".into()), geometry(50.0));
        assert_eq!(registry.len(), 2);

        // Republishing replaces
        registry.publish(ContainerId::Desktop, geometry(5.0));
        assert_eq!(registry.len(), 2);
        assert!((registry.get(&ContainerId::Desktop).unwrap().origin.x - 5.0).abs() < 0.001);

        assert!(registry.withdraw(&ContainerId::Folder("1".into())).is_some());
        assert!(registry.get(&ContainerId::Folder("1".into())).is_none());
        assert!(registry.withdraw(&ContainerId::Folder("1".into())).is_none());
    }
}
