//! Desktop configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::error::{DesktopError, Result};
use crate::grid::{GridDims, GridZoom};
use crate::math::{Size, Vec2};

/// Layout constants for the desktop and its folder windows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Desktop columns at startup (zoom 100%)
    pub default_cols: u32,
    /// Fewest columns the zoom allows
    pub min_cols: u32,
    /// Most columns the zoom allows
    pub max_cols: u32,
    /// Rows per `aspect_cols` columns
    pub aspect_rows: u32,
    pub aspect_cols: u32,
    /// Inset around every container's content; also the grid origin
    pub padding: f32,
    /// Screen height reserved for the taskbar below the desktop
    pub taskbar_height: f32,
    /// Size of a folder window including its title bar
    pub folder_window: Size,
    /// Folder window offset from the folder icon's position
    pub folder_window_offset: Vec2,
    /// Height of the folder window chrome above the content
    pub title_bar_height: f32,
    /// Icon cell size inside folder windows
    pub folder_cell: Size,
    /// Key code toggling the debug grid overlay
    pub grid_toggle_key: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            default_cols: 16,
            min_cols: 8,
            max_cols: 32,
            aspect_rows: 9,
            aspect_cols: 16,
            padding: 16.0,
            taskbar_height: 48.0,
            folder_window: Size::new(600.0, 400.0),
            folder_window_offset: Vec2::new(50.0, 50.0),
            title_bar_height: 40.0,
            folder_cell: Size::new(80.0, 80.0),
            grid_toggle_key: "F2".to_string(),
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "desktop config loaded");
        Ok(config)
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<()> {
        if self.min_cols == 0 {
            return Err(DesktopError::InvalidConfig("minCols must be at least 1".into()));
        }
        if !(self.min_cols..=self.max_cols).contains(&self.default_cols) {
            return Err(DesktopError::InvalidConfig(format!(
                "defaultCols {} outside [{}, {}]",
                self.default_cols, self.min_cols, self.max_cols
            )));
        }
        if self.aspect_rows == 0 || self.aspect_cols == 0 {
            return Err(DesktopError::InvalidConfig("aspect must be positive".into()));
        }
        if !(self.padding >= 0.0 && self.taskbar_height >= 0.0 && self.title_bar_height >= 0.0) {
            return Err(DesktopError::InvalidConfig("insets must be non-negative".into()));
        }
        if self.folder_window.is_empty() || self.folder_cell.is_empty() {
            return Err(DesktopError::InvalidConfig("folder window and cell sizes must be positive".into()));
        }
        if self.folder_content_size().is_empty() {
            return Err(DesktopError::InvalidConfig("title bar leaves no folder content area".into()));
        }
        Ok(())
    }

    /// Zoom state at startup
    pub fn zoom(&self) -> GridZoom {
        GridZoom::new(self.default_cols, self.min_cols, self.max_cols, self.aspect_rows, self.aspect_cols)
    }

    /// Desktop content area for a given screen size
    pub fn desktop_bounds(&self, screen: Size) -> Size {
        Size::new(screen.width, (screen.height - self.taskbar_height).max(0.0))
    }

    /// Content area of a folder window, below its title bar
    pub fn folder_content_size(&self) -> Size {
        Size::new(
            self.folder_window.width,
            (self.folder_window.height - self.title_bar_height).max(0.0),
        )
    }

    /// Lattice of a plain folder window: as many whole cells as fit
    pub fn folder_grid_dims(&self) -> GridDims {
        let inner = self.folder_content_size().inset(self.padding);
        GridDims::new(
            (inner.width / self.folder_cell.width).floor() as u32,
            (inner.height / self.folder_cell.height).floor() as u32,
        )
    }
}
