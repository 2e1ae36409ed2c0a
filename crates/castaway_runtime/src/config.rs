//! Game configuration.
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. [`GameConfig::default`]
//! 2. environment variables (`CASTAWAY_WORLD`, `CASTAWAY_PROMPT`, `CASTAWAY_LOG`)
//! 3. command-line flags, see [`parse_args`]
//!
//! Environment values that fail to parse are ignored; bad flags are errors.

use std::env;
use std::str::FromStr;

use castaway_foundation::{Error, ErrorKind, Result};
use castaway_world::World;

/// Environment variable selecting the world.
pub const WORLD_VAR: &str = "CASTAWAY_WORLD";
/// Environment variable overriding the prompt.
pub const PROMPT_VAR: &str = "CASTAWAY_PROMPT";
/// Environment variable holding a tracing filter.
pub const LOG_VAR: &str = "CASTAWAY_LOG";

/// Prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "> ";

/// Which registry to play.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WorldChoice {
    /// The damaged starship.
    #[default]
    Ship,
    /// The town square with the well.
    Town,
}

impl WorldChoice {
    /// Builds a fresh world.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry fails to build.
    pub fn build(self) -> Result<World> {
        match self {
            Self::Ship => castaway_content::starship(),
            Self::Town => castaway_content::town_square(),
        }
    }
}

/// Everything needed to start a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// World to load.
    pub world: WorldChoice,
    /// Prompt string.
    pub prompt: String,
    /// Print the welcome banner and the starting room.
    pub show_banner: bool,
    /// Explicit tracing filter, overriding `RUST_LOG`.
    pub log_filter: Option<String>,
    /// Log at debug level when no filter is given.
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world: WorldChoice::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            log_filter: None,
            verbose: false,
        }
    }
}

impl GameConfig {
    /// Reads overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads overrides through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(world) = read_var(&lookup, WORLD_VAR) {
            config.world = world;
        }
        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }
        config.log_filter = lookup(LOG_VAR).filter(|f| !f.trim().is_empty());
        config
    }

    /// The tracing directive used when neither `CASTAWAY_LOG` nor `RUST_LOG` is set.
    #[must_use]
    pub const fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

fn read_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key)?.trim().parse().ok()
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Play with this configuration.
    Play(GameConfig),
    /// Print usage and exit.
    Help,
    /// Print the version and exit.
    Version,
}

/// Applies command-line flags on top of `config`.
///
/// `args` excludes the program name.
///
/// # Errors
///
/// Returns a configuration error for unknown options, missing values, and
/// unknown world names.
pub fn parse_args(args: &[String], mut config: GameConfig) -> Result<Invocation> {
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => return Ok(Invocation::Help),
            "-V" | "--version" => return Ok(Invocation::Version),
            "-w" | "--world" => {
                i += 1;
                let name = value(args, i, arg)?;
                config.world = name.parse().map_err(|_| {
                    config_error(format!("unknown world: {name} (expected ship or town)"))
                })?;
            }
            "--prompt" => {
                i += 1;
                config.prompt = value(args, i, arg)?.to_string();
            }
            "--no-banner" => config.show_banner = false,
            "-v" | "--verbose" => config.verbose = true,
            _ => return Err(config_error(format!("unknown option: {arg}"))),
        }
        i += 1;
    }
    Ok(Invocation::Play(config))
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| config_error(format!("{flag} requires a value")))
}

fn config_error(message: String) -> Error {
    Error::new(ErrorKind::Config(message))
}
