//! Cross-layer integration tests for Castaway
//!
//! Tests that play whole games through the runtime session, from typed
//! lines down to world state.

mod endings;
mod transcripts;

use castaway_runtime::{Session, Turn, WorldChoice};

/// Starts a fresh session.
pub fn session(world: WorldChoice) -> Session {
    Session::new(world.build().unwrap())
}

/// Plays lines in order and returns every turn, stopping at the first
/// rejected line.
pub fn play(session: &mut Session, lines: &[&str]) -> Vec<Turn> {
    lines
        .iter()
        .map(|line| {
            session
                .execute(line)
                .unwrap_or_else(|e| panic!("{line}: {e}"))
        })
        .collect()
}
