//! Interaction dispatch for Castaway.
//!
//! This crate applies validated commands to the world. Each entity kind
//! gets a [`Service`]: a table mapping every action to a handler, built
//! from a base table that refuses everything and overridden where the kind
//! does something.
//!
//! # Example
//!
//! ```text
//! EMPTY BUCKET INTO WELL
//!   → bucket service: forward with targets swapped
//!   → well service: EMPTY WELL WITH BUCKET
//!   → "You fill the well with water."
//! ```
//!
//! # Modules
//!
//! - [`service`] - Replies, interactions, handler tables, base handlers
//! - [`registry`] - Kind to service table and selection order
//! - [`dispatch`] - Entry point from resolved commands
//! - [`services`] - The standard state machines
//! - [`kinds`] - Kind tags and effect names the services look for

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dispatch;
pub mod kinds;
pub mod registry;
pub mod service;
pub mod services;

pub use dispatch::Dispatcher;
pub use registry::ServiceRegistry;
pub use service::{Ctx, Handler, Interaction, Reply, Service};
