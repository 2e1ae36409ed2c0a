//! Closed vocabularies, identifiers, effects, and errors for Castaway.
//!
//! This crate provides:
//! - [`Action`] and [`Preposition`] - The closed command vocabulary
//! - [`EquipSlot`] - Body slots equipment occupies
//! - [`EntityId`] and [`EnvironmentId`] - Registry handles
//! - [`Effect`] - Named status tags applied to the player
//! - [`Error`] - Validation and shell errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod effect;
pub mod entity;
pub mod error;
pub mod vocab;

pub use effect::Effect;
pub use entity::{EntityId, EnvironmentId};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use vocab::{Action, EquipSlot, Preposition};
