//! Placement resolution for grid-mode containers
//!
//! Decides where a dropped item lands and which occupants get pushed out of
//! the way. The resolver is pure: it reads an [`Occupancy`] snapshot and
//! returns the moves; committing them to the store is the caller's job.

mod occupancy;
mod resolver;

pub use occupancy::Occupancy;
pub use resolver::{resolve, Displacement, Resolution};
