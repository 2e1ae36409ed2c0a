//! Game session state.
//!
//! A [`Session`] owns one world together with the parser and dispatcher
//! that act on it. Each line of input becomes one [`Turn`].

use std::fmt;

use castaway_engine::{Dispatcher, Reply};
use castaway_foundation::{Action, Error, ErrorKind, Preposition, Result};
use castaway_parser::{CommandParser, Target};
use castaway_world::World;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::config::GameConfig;

/// The outcome of one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Nothing was entered.
    Idle,
    /// Narrative to show the player.
    Narrate(String),
    /// Help text.
    Help(String),
    /// The player asked to stop.
    Quit,
    /// A final passage; the game is over.
    GameOver(String),
}

impl Turn {
    /// Returns true if the session accepts no more input after this turn.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Quit | Self::GameOver(_))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle | Self::Quit => Ok(()),
            Self::Narrate(text) | Self::Help(text) | Self::GameOver(text) => f.write_str(text),
        }
    }
}

/// One running game.
#[derive(Clone, Debug)]
pub struct Session {
    world: World,
    parser: CommandParser,
    dispatcher: Dispatcher,
    turns: u64,
    over: bool,
}

impl Session {
    /// Starts a session on a world with the standard grammar and services.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            world,
            parser: CommandParser::default(),
            dispatcher: Dispatcher::default(),
            turns: 0,
            over: false,
        }
    }

    /// Starts a session on the configured world.
    ///
    /// # Errors
    ///
    /// Returns an error if the world fails to build.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        info!(world = %config.world, "starting session");
        Ok(Self::new(config.world.build()?))
    }

    /// Replaces the dispatcher.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// The world being played.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Number of commands executed so far, excluding empty lines and errors.
    #[must_use]
    pub const fn turns(&self) -> u64 {
        self.turns
    }

    /// Returns true once the player quit or reached an ending.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Describes the player's surroundings.
    #[must_use]
    pub fn look(&self) -> String {
        self.world.describe_environment(self.world.player().environment)
    }

    /// Words worth completing at the prompt: actions, prepositions, the
    /// player words, and every entity name and alias.
    #[must_use]
    pub fn keywords(&self) -> Vec<String> {
        let mut words: Vec<String> = Action::iter()
            .map(|a| a.to_string())
            .chain(Preposition::iter().map(|p| p.to_string()))
            .chain(Target::PLAYER_WORDS.iter().map(ToString::to_string))
            .collect();
        for (_, entity) in self.world.items().chain(self.world.objects()) {
            words.push(entity.name.to_uppercase());
            words.extend(entity.aliases.iter().map(|a| a.to_uppercase()));
        }
        words.sort();
        words.dedup();
        words
    }

    /// Executes one line of input.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the line is rejected; the world is
    /// unchanged. Returns an internal error if the game is already over.
    pub fn execute(&mut self, line: &str) -> Result<Turn> {
        if self.over {
            return Err(Error::new(ErrorKind::Internal(
                "the game is over".to_string(),
            )));
        }
        let Some(command) = self.parser.parse(line, &self.world)? else {
            return Ok(Turn::Idle);
        };
        self.turns += 1;

        let turn = match command.action {
            Some(Action::Quit) => Turn::Quit,
            Some(Action::Help) => Turn::Help(self.help(command.object)),
            _ => match self.dispatcher.dispatch(&mut self.world, &command) {
                None => Turn::Idle,
                Some(Reply::Say(text)) => Turn::Narrate(text),
                Some(Reply::End(text)) => Turn::GameOver(text),
            },
        };
        if turn.is_final() {
            self.over = true;
        }
        debug!(turn = self.turns, ?turn, "executed");
        Ok(turn)
    }

    fn help(&self, target: Option<Target>) -> String {
        match target {
            Some(Target::Entity(id)) => {
                let entity = self.world.entity(id);
                let actions: Vec<String> =
                    entity.allowed_actions.iter().map(ToString::to_string).collect();
                if actions.is_empty() {
                    format!("There is nothing you can do with the {}.", entity.name)
                } else {
                    format!("You can do the following with the {}: {}.", entity.name, actions.join(", "))
                }
            }
            Some(Target::Player) | None => format!(
                "Commands: ACTION [OBJECT] [PREPOSITION OBJECT]\n{}",
                self.parser.grammar().help_text()
            ),
        }
    }
}
