//! Desktop grid zoom level

use serde::{Deserialize, Serialize};
use super::GridDims;

/// Column count of the desktop grid, bounded and aspect-locked
///
/// Rows follow the columns as `round(cols * aspect_rows / aspect_cols)` so
/// the lattice keeps its visual aspect ratio while zooming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridZoom {
    cols: u32,
    base_cols: u32,
    min_cols: u32,
    max_cols: u32,
    aspect_rows: u32,
    aspect_cols: u32,
}

impl Default for GridZoom {
    fn default() -> Self {
        Self::new(16, 8, 32, 9, 16)
    }
}

impl GridZoom {
    /// Create a zoom level starting at `base_cols`
    pub fn new(base_cols: u32, min_cols: u32, max_cols: u32, aspect_rows: u32, aspect_cols: u32) -> Self {
        let min_cols = min_cols.max(1);
        let max_cols = max_cols.max(min_cols);
        let base_cols = base_cols.clamp(min_cols, max_cols);
        Self {
            cols: base_cols,
            base_cols,
            min_cols,
            max_cols,
            aspect_rows: aspect_rows.max(1),
            aspect_cols: aspect_cols.max(1),
        }
    }

    /// Current column count
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Row count derived from the columns
    pub fn rows(&self) -> u32 {
        let rows = (f64::from(self.cols) * f64::from(self.aspect_rows) / f64::from(self.aspect_cols)).round();
        (rows as u32).max(1)
    }

    /// Current lattice dimensions
    #[inline]
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.cols, self.rows())
    }

    /// Add `delta` columns, clamped to the zoom bounds
    ///
    /// Returns `true` if the column count changed.
    pub fn adjust(&mut self, delta: i32) -> bool {
        let next = (i64::from(self.cols) + i64::from(delta))
            .clamp(i64::from(self.min_cols), i64::from(self.max_cols)) as u32;
        let changed = next != self.cols;
        self.cols = next;
        changed
    }

    /// Apply a wheel step: scrolling down zooms out (one column fewer)
    pub fn apply_wheel(&mut self, dy: f32) -> bool {
        if dy > 0.0 {
            self.adjust(-1)
        } else if dy < 0.0 {
            self.adjust(1)
        } else {
            false
        }
    }

    /// Zoom relative to the starting column count, in percent
    pub fn percent(&self) -> u32 {
        (f64::from(self.base_cols) / f64::from(self.cols) * 100.0).round() as u32
    }
}
