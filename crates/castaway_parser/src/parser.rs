//! Main parser pipeline.
//!
//! Orchestrates the full flow from raw input to a resolved command:
//! tokenize, split, validate, resolve.

use castaway_foundation::Result;
use castaway_world::World;
use tracing::debug;

use crate::command::{Command, CommandSplitter};
use crate::grammar::UsageGrammar;
use crate::resolve::CommandObjectResolver;
use crate::tokenizer::InputTokenizer;
use crate::validator::CommandValidator;

/// Turns input lines into validated, resolved commands.
#[derive(Clone, Debug, Default)]
pub struct CommandParser {
    grammar: UsageGrammar,
}

impl CommandParser {
    /// Creates a parser over a grammar.
    #[must_use]
    pub const fn new(grammar: UsageGrammar) -> Self {
        Self { grammar }
    }

    /// The grammar commands are checked against.
    #[must_use]
    pub const fn grammar(&self) -> &UsageGrammar {
        &self.grammar
    }

    /// Splits an input line without validating it.
    #[must_use]
    pub fn split(input: &str) -> Command {
        CommandSplitter::split(&InputTokenizer::tokenize(input))
    }

    /// Parses one input line against the current world.
    ///
    /// Returns `Ok(None)` when nothing was entered.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn parse(&self, input: &str, world: &World) -> Result<Option<Command>> {
        let mut command = Self::split(input);
        if CommandValidator::new(&self.grammar, world)
            .validate(&command)?
            .is_none()
        {
            return Ok(None);
        }

        CommandObjectResolver::new(world).resolve_command(&mut command);
        debug!(?command, "parsed command");
        Ok(Some(command))
    }
}
