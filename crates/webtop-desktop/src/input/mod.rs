//! Input routing module
//!
//! Provides the drag state machine: `Idle -> Dragging` on a single-click
//! pointer-down over an icon, `Dragging -> Idle` on pointer-up.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;

/// Click count the browser reports for the second press of a double click
pub const DOUBLE_CLICK: u32 = 2;

/// Check if a pointer-down is the second press of a double click
#[inline]
pub fn is_double_click(click_count: u32) -> bool {
    click_count == DOUBLE_CLICK
}
