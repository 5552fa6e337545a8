//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer, wheel and key handling, drag and drop resolution
//! - `folders`: Folder window open/close
//! - `rendering`: Read model for the presentation layer

mod input;
mod folders;
mod rendering;

pub use input::Placement;

use tracing::debug;
use crate::config::DesktopConfig;
use crate::container::{ContainerGeometry, ContainerId, GeometryRegistry, Layout};
use crate::error::Result;
use crate::grid::{GridSpec, GridZoom};
use crate::input::InputRouter;
use crate::item::{Item, ItemId};
use crate::math::{Size, Vec2};
use crate::store::SpatialStore;
use crate::window::WindowManager;

/// Screen size assumed until the host calls `init`
const DEFAULT_SCREEN: Size = Size::new(1920.0, 1080.0);

/// Desktop engine coordinating all desktop components
///
/// The engine is the only writer of the spatial store. It owns:
/// - Spatial store (item positions, open folder views)
/// - Geometry registry (where each container is and how it lays items out)
/// - Window manager (open folder windows, static stacking)
/// - Input router (drag state machine)
/// - Grid zoom and the debug overlay flag
pub struct DesktopEngine {
    /// Layout constants
    pub config: DesktopConfig,
    /// Item positions
    pub store: SpatialStore,
    /// Published container geometry
    pub geometry: GeometryRegistry,
    /// Folder windows
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    /// Desktop zoom level
    pub zoom: GridZoom,
    /// Debug grid overlay visibility
    pub show_grid: bool,
    /// Screen size in pixels
    screen_size: Size,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with the default config and the seed items
    pub fn new() -> Self {
        Self::build(DesktopConfig::default(), SpatialStore::default())
    }

    /// Create an engine with a custom config and the seed items
    pub fn with_config(config: DesktopConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, SpatialStore::default()))
    }

    /// Create an engine over a custom item set
    pub fn with_items(config: DesktopConfig, items: Vec<Item>) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, SpatialStore::new(items)))
    }

    fn build(config: DesktopConfig, store: SpatialStore) -> Self {
        let mut engine = Self {
            zoom: config.zoom(),
            config,
            store,
            geometry: GeometryRegistry::new(),
            windows: WindowManager::new(),
            input: InputRouter::new(),
            show_grid: false,
            screen_size: DEFAULT_SCREEN,
        };
        engine.publish_desktop_geometry();
        engine
    }

    /// Replace the config; open folder windows are closed, items keep their positions
    pub fn set_config(&mut self, config: DesktopConfig) -> Result<()> {
        config.validate()?;
        let open: Vec<ItemId> = self.windows.windows_by_z().iter().map(|w| w.folder_id.clone()).collect();
        for folder_id in &open {
            self.close_folder(folder_id);
        }
        self.zoom = config.zoom();
        self.config = config;
        self.publish_desktop_geometry();
        Ok(())
    }

    /// Initialize the desktop with screen dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.resize(width, height);
    }

    /// Resize the screen; the desktop grid is refitted
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width.max(0.0), height.max(0.0));
        self.publish_desktop_geometry();
    }

    /// Current screen size
    #[inline]
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// Desktop lattice for the current screen size and zoom
    pub fn desktop_grid(&self) -> GridSpec {
        GridSpec::fit(
            self.config.desktop_bounds(self.screen_size),
            self.zoom.dims(),
            self.config.padding,
        )
    }

    /// Change the desktop column count by `delta`, clamped to the zoom bounds
    pub fn zoom_by(&mut self, delta: i32) -> bool {
        if !self.zoom.adjust(delta) {
            return false;
        }
        debug!(cols = self.zoom.cols(), rows = self.zoom.rows(), "desktop zoom changed");
        self.publish_desktop_geometry();
        true
    }

    /// Show or hide the debug grid overlay
    pub fn toggle_grid(&mut self) -> bool {
        self.show_grid = !self.show_grid;
        debug!(show_grid = self.show_grid, "grid overlay toggled");
        self.show_grid
    }

    /// Republish the desktop's geometry after a resize or zoom
    pub(crate) fn publish_desktop_geometry(&mut self) {
        let geometry = ContainerGeometry {
            origin: Vec2::ZERO,
            bounds: self.config.desktop_bounds(self.screen_size),
            layout: Layout::Grid(self.desktop_grid()),
        };
        self.geometry.publish(ContainerId::Desktop, geometry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridDims;

    #[test]
    fn test_desktop_engine_init() {
        let mut engine = DesktopEngine::new();
        engine.init(1312.0, 800.0);

        assert!((engine.screen_size().width - 1312.0).abs() < 0.001);
        let grid = engine.desktop_grid();
        assert_eq!(grid.dims, GridDims::new(16, 9));
        assert!((grid.cell.width - 80.0).abs() < 0.001);
        assert!((grid.cell.height - 80.0).abs() < 0.001);
        assert!(engine.geometry.get(&ContainerId::Desktop).unwrap().is_grid_mode());
    }

    #[test]
    fn test_new_publishes_desktop_geometry() {
        let engine = DesktopEngine::new();
        assert_eq!(engine.geometry.len(), 1);
        assert_eq!(engine.store.desktop_items().len(), 5);
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = DesktopConfig::default();
        config.default_cols = 99;
        assert!(DesktopEngine::with_config(config).is_err());
    }

    #[test]
    fn test_zoom_refits_desktop_grid() {
        let mut engine = DesktopEngine::new();
        engine.init(1312.0, 800.0);

        assert!(engine.zoom_by(16));
        let geometry = engine.geometry.get(&ContainerId::Desktop).unwrap();
        let grid = geometry.grid().unwrap();
        assert_eq!(grid.dims, GridDims::new(32, 18));
        assert!((grid.cell.width - 40.0).abs() < 0.001);

        assert!(!engine.zoom_by(1));
    }

    #[test]
    fn test_set_config_closes_folders() {
        let mut engine = DesktopEngine::new();
        engine.init(1312.0, 800.0);
        engine.open_folder(&ContainerId::Desktop, &"3".into()).unwrap();

        let mut config = DesktopConfig::default();
        config.default_cols = 8;
        engine.set_config(config).unwrap();

        assert_eq!(engine.windows.count(), 0);
        assert_eq!(engine.geometry.len(), 1);
        assert_eq!(engine.desktop_grid().dims, GridDims::new(8, 5));
    }

    #[test]
    fn test_toggle_grid() {
        let mut engine = DesktopEngine::new();
        assert!(engine.toggle_grid());
        assert!(!engine.toggle_grid());
    }
}
