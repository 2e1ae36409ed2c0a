//! Demo worlds for Castaway.
//!
//! Each function builds a fresh [`World`](castaway_world::World) registry:
//! - [`town_square`] - A well, a river, a bucket, and a sword at the bottom of the well
//! - [`starship`] - A damaged ship to get flying again
//!
//! Entity kinds come from [`castaway_engine::kinds`] so the standard
//! services pick them up.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ship;
pub mod town;

pub use ship::starship;
pub use town::town_square;
