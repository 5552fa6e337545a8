//! Core geometry types for the desktop
//!
//! Pixel-space value types shared by the grid mapper, the store and the
//! read model handed to the presentation layer.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
