//! Pixel position <-> grid cell conversion

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};
use super::{Cell, GridDims};

/// Geometry of a grid-mode container's lattice
///
/// `origin` is the inset from the container's content edge to the top-left
/// corner of cell `(0, 0)`. The same value is applied on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub dims: GridDims,
    pub cell: Size,
    pub origin: f32,
}

impl GridSpec {
    /// Create a grid spec from explicit cell size
    pub fn new(dims: GridDims, cell: Size, origin: f32) -> Self {
        Self { dims, cell, origin }
    }

    /// Spread `dims` evenly over `area`, leaving `padding` on every side
    pub fn fit(area: Size, dims: GridDims, padding: f32) -> Self {
        let inner = area.inset(padding);
        let cell = Size::new(
            (inner.width / dims.cols as f32).max(1.0),
            (inner.height / dims.rows as f32).max(1.0),
        );
        Self::new(dims, cell, padding)
    }

    /// Cell containing a pixel position (nearest lattice point, clamped)
    pub fn to_cell(&self, pos: Vec2) -> Cell {
        let col = ((pos.x - self.origin) / self.cell.width).round();
        let row = ((pos.y - self.origin) / self.cell.height).round();
        self.dims.clamp(saturate(col), saturate(row))
    }

    /// Pixel position of a cell's top-left corner
    pub fn to_position(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            cell.col as f32 * self.cell.width + self.origin,
            cell.row as f32 * self.cell.height + self.origin,
        )
    }

    /// Snap a pixel position onto the lattice
    #[inline]
    pub fn snap(&self, pos: Vec2) -> Vec2 {
        self.to_position(self.to_cell(pos))
    }

    /// Pixel rectangle covered by a cell
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::from_pos_size(self.to_position(cell), self.cell)
    }
}

/// Float lattice coordinate to i64 without wrapping on NaN or huge values
fn saturate(v: f32) -> i64 {
    if v.is_nan() {
        0
    } else {
        v.clamp(i64::MIN as f32, i64::MAX as f32) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_grid() -> GridSpec {
        GridSpec::new(GridDims::new(16, 9), Size::new(80.0, 80.0), 16.0)
    }

    #[test]
    fn test_to_position_is_affine() {
        let grid = desktop_grid();
        let pos = grid.to_position(Cell::new(2, 1));
        assert!((pos.x - 176.0).abs() < 0.001);
        assert!((pos.y - 96.0).abs() < 0.001);
    }

    #[test]
    fn test_to_cell_rounds_to_nearest() {
        let grid = desktop_grid();
        // 39px right of cell 1 still belongs to cell 1
        assert_eq!(grid.to_cell(Vec2::new(96.0 + 39.0, 96.0)), Cell::new(1, 1));
        // 41px right of cell 1 rounds to cell 2
        assert_eq!(grid.to_cell(Vec2::new(96.0 + 41.0, 96.0)), Cell::new(2, 1));
    }

    #[test]
    fn test_to_cell_clamps_out_of_bounds() {
        let grid = desktop_grid();
        assert_eq!(grid.to_cell(Vec2::new(-500.0, -500.0)), Cell::new(0, 0));
        assert_eq!(grid.to_cell(Vec2::new(10_000.0, 10_000.0)), Cell::new(15, 8));
        assert_eq!(grid.to_cell(Vec2::new(f32::NAN, 96.0)), Cell::new(0, 1));
    }

    #[test]
    fn test_round_trip_on_every_cell() {
        let grid = GridSpec::fit(Size::new(1366.0, 768.0), GridDims::new(16, 9), 16.0);
        for cell in grid.dims.cells() {
            assert_eq!(grid.to_cell(grid.to_position(cell)), cell);
        }
    }

    #[test]
    fn test_fit_divides_inner_area() {
        let grid = GridSpec::fit(Size::new(1312.0, 752.0), GridDims::new(16, 9), 16.0);
        assert!((grid.cell.width - 80.0).abs() < 0.001);
        assert!((grid.cell.height - 80.0).abs() < 0.001);
        assert!((grid.origin - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_snap_and_cell_rect() {
        let grid = desktop_grid();
        let snapped = grid.snap(Vec2::new(180.0, 90.0));
        assert_eq!(snapped, Vec2::new(176.0, 96.0));

        let rect = grid.cell_rect(Cell::new(0, 0));
        assert_eq!(rect, Rect::new(16.0, 16.0, 80.0, 80.0));
    }
}
