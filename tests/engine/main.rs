//! Integration tests for the castaway_engine crate.
//!
//! Tests for interaction dispatch over the bundled worlds:
//! - Service selection and the allowed-actions gate
//! - Town services (well, river, bucket)
//! - Ship state machines (doors, airlock, engine, hull)

mod dispatch_tests;
mod ship_tests;
mod town_tests;

use castaway_engine::{Dispatcher, Reply};
use castaway_parser::CommandParser;
use castaway_world::World;

/// Parses a line against the world and dispatches it.
///
/// Panics if the line fails validation.
pub fn play(world: &mut World, line: &str) -> Reply {
    let command = CommandParser::default()
        .parse(line, world)
        .unwrap_or_else(|e| panic!("{line}: {e}"))
        .unwrap_or_else(|| panic!("{line}: empty command"));
    Dispatcher::default()
        .dispatch(world, &command)
        .unwrap_or_else(|| panic!("{line}: no reply"))
}

/// Plays a line and returns its narrative text.
pub fn say(world: &mut World, line: &str) -> String {
    let reply = play(world, line);
    assert!(!reply.is_end(), "{line}: unexpected ending: {reply}");
    reply.text().to_string()
}
