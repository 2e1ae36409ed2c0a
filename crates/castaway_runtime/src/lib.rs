//! Game session, REPL, and command-line front end for Castaway.
//!
//! This crate provides:
//! - [`Session`] - One running game: world, parser, and dispatcher
//! - [`Repl`] - Interactive read-execute-print loop over a [`LineEditor`]
//! - [`GameConfig`] - Settings layered from defaults, environment, and flags

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;
pub mod session;

pub use config::{GameConfig, Invocation, WorldChoice, parse_args};
pub use editor::{KeywordCompleter, LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::{Session, Turn};
