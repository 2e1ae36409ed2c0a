//! Entities, environments, the player, and the world registry for Castaway.
//!
//! This crate provides:
//! - [`Entity`] - Tagged entity record with optional capabilities
//! - [`EntityKind`] and [`EntityTypes`] - Exact type tags and family type-sets
//! - [`State`] - Per-family state enums driven by the service layer
//! - [`Environment`] and [`Player`]
//! - [`World`] - The single registry that owns everything

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod environment;
pub mod kind;
pub mod player;
pub mod state;
pub mod world;

pub use entity::{Entity, Equipable, Family, Passage};
pub use environment::Environment;
pub use kind::{EntityKind, EntityTypes};
pub use player::Player;
pub use state::{Contents, DeviceState, FillLevel, Hatch, Integrity, State};
pub use world::{World, WorldBuilder};
