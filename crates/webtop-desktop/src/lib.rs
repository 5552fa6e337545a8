//! Icon placement engine for a browser desktop
//!
//! This crate holds the state and rules behind a desktop of icons:
//! - Grid snapping of icons to a viewport-fitted lattice
//! - Chain displacement when an icon is dropped on an occupied cell
//! - Folder windows with grid or free placement
//! - Drag state machine driven by pointer events
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Size`)
//! - [`grid`]: Lattice types, the coordinate/grid mapper and zoom
//! - [`item`]: Items, the item tree and the seed fixture
//! - [`container`]: Container ids and the geometry registry
//! - [`placement`]: Occupancy and the chain displacement resolver
//! - [`store`]: Authoritative item positions per container
//! - [`window`]: Folder window frames and their stacking order
//! - [`input`]: Drag state machine and input results
//! - [`view`]: Read model for the presentation layer
//!
//! ## Example
//!
//! ```rust
//! use webtop_desktop::{ContainerId, DesktopEngine, Vec2};
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(1312.0, 800.0);
//!
//! // Drop "Oyun Projem" onto "Belgelerim"; the occupant is pushed right
//! let placement = engine
//!     .drop_item(&ContainerId::Desktop, &"1".into(), Vec2::new(176.0, 96.0))
//!     .unwrap();
//! assert_eq!(placement.position, Vec2::new(176.0, 96.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All placement logic is testable without a browser
//! 2. **Single Writer**: Only the engine mutates item positions
//! 3. **Published Geometry**: Containers publish their geometry; nothing queries the page

pub mod math;
pub mod grid;
pub mod item;
pub mod container;
pub mod placement;
pub mod store;
pub mod window;
pub mod input;
pub mod view;
pub mod config;
pub mod error;
pub mod logging;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use grid::{Cell, Direction, GridDims, GridSpec, GridZoom};
pub use item::{Item, ItemId, ItemKind};
pub use container::{ContainerGeometry, ContainerId, GeometryRegistry, Layout};
pub use placement::{resolve, Displacement, Occupancy, Resolution};
pub use store::SpatialStore;
pub use window::{FolderWindow, WindowManager};
pub use input::{DragState, InputResult, InputRouter};
pub use view::{DesktopView, FolderWindowView, GridInfo, IconView};
pub use config::DesktopConfig;
pub use error::{DesktopError, Result};

pub use engine::{DesktopEngine, Placement};
