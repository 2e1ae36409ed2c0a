//! Parsed commands.
//!
//! A [`Command`] starts out as four raw phrases cut from the token list by
//! [`CommandSplitter`]. Validation reads the raw phrases; resolution then
//! fills in the typed fields.

use std::fmt;

use castaway_foundation::{Action, EntityId, Preposition};

/// What a command phrase refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// A registered object or item.
    Entity(EntityId),
    /// The player, written SELF or PLAYER.
    Player,
}

impl Target {
    /// The words that refer to the player.
    pub const PLAYER_WORDS: [&'static str; 2] = ["SELF", "PLAYER"];

    /// Returns true if the phrase refers to the player.
    #[must_use]
    pub fn names_player(phrase: &str) -> bool {
        Self::PLAYER_WORDS
            .iter()
            .any(|w| w.eq_ignore_ascii_case(phrase))
    }

    /// The entity handle, unless this is the player.
    #[must_use]
    pub const fn entity(self) -> Option<EntityId> {
        match self {
            Self::Entity(id) => Some(id),
            Self::Player => None,
        }
    }
}

/// One line of player input, split and optionally resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    /// First token, empty when nothing was entered.
    pub action_str: String,
    /// Words between the action and the preposition.
    pub object_str: Option<String>,
    /// The first preposition keyword after the action.
    pub preposition_str: Option<String>,
    /// Words after the preposition.
    pub preposition_object_str: Option<String>,

    /// Resolved action.
    pub action: Option<Action>,
    /// Resolved object.
    pub object: Option<Target>,
    /// Resolved preposition.
    pub preposition: Option<Preposition>,
    /// Resolved preposition object.
    pub preposition_object: Option<Target>,
}

impl Command {
    /// Returns true if no command was entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.action_str.is_empty()
    }

    /// Number of object phrases present (0, 1, or 2).
    #[must_use]
    pub fn arg_count(&self) -> usize {
        usize::from(self.object_str.is_some()) + usize::from(self.preposition_object_str.is_some())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action_str)?;
        for part in [
            &self.object_str,
            &self.preposition_str,
            &self.preposition_object_str,
        ]
        .into_iter()
        .flatten()
        {
            write!(f, " {part}")?;
        }
        Ok(())
    }
}

/// Splits a token list into action and phrases.
pub struct CommandSplitter;

impl CommandSplitter {
    /// Partitions tokens around the first preposition after the action.
    ///
    /// - The first token is the action
    /// - Without a preposition, everything after the action is the object phrase
    /// - Otherwise the first preposition splits the rest; later prepositions
    ///   belong to the preposition-object phrase
    ///
    /// Empty phrases come back as `None`. Splitting never fails.
    #[must_use]
    pub fn split(tokens: &[String]) -> Command {
        let Some((action, rest)) = tokens.split_first() else {
            return Command::default();
        };

        let (object, preposition, preposition_object) =
            match rest.iter().position(|t| Preposition::is_keyword(t)) {
                Some(at) => (&rest[..at], Some(rest[at].clone()), &rest[at + 1..]),
                None => (rest, None, &rest[rest.len()..]),
            };

        Command {
            action_str: action.clone(),
            object_str: join(object),
            preposition_str: preposition,
            preposition_object_str: join(preposition_object),
            ..Command::default()
        }
    }
}

fn join(words: &[String]) -> Option<String> {
    let phrase = words.join(" ");
    if phrase.is_empty() { None } else { Some(phrase) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn split_with_preposition() {
        let cmd = CommandSplitter::split(&tokens(&["FILL", "BUCKET", "WITH", "RIVER"]));
        assert_eq!(cmd.action_str, "FILL");
        assert_eq!(cmd.object_str.as_deref(), Some("BUCKET"));
        assert_eq!(cmd.preposition_str.as_deref(), Some("WITH"));
        assert_eq!(cmd.preposition_object_str.as_deref(), Some("RIVER"));
        assert_eq!(cmd.arg_count(), 2);
    }

    #[test]
    fn split_without_preposition() {
        let cmd = CommandSplitter::split(&tokens(&["INSPECT", "WATER", "WELL"]));
        assert_eq!(cmd.object_str.as_deref(), Some("WATER WELL"));
        assert_eq!(cmd.preposition_str, None);
        assert_eq!(cmd.preposition_object_str, None);
        assert_eq!(cmd.arg_count(), 1);
    }

    #[test]
    fn first_preposition_wins() {
        let cmd = CommandSplitter::split(&tokens(&["USE", "KIT", "ON", "HULL", "WITH", "CARE"]));
        assert_eq!(cmd.object_str.as_deref(), Some("KIT"));
        assert_eq!(cmd.preposition_str.as_deref(), Some("ON"));
        assert_eq!(cmd.preposition_object_str.as_deref(), Some("HULL WITH CARE"));
    }

    #[test]
    fn dangling_preposition() {
        let cmd = CommandSplitter::split(&tokens(&["FILL", "BUCKET", "WITH"]));
        assert_eq!(cmd.preposition_str.as_deref(), Some("WITH"));
        assert_eq!(cmd.preposition_object_str, None);
        assert_eq!(cmd.arg_count(), 1);
    }

    #[test]
    fn preposition_right_after_action() {
        let cmd = CommandSplitter::split(&tokens(&["FILL", "WITH", "RIVER"]));
        assert_eq!(cmd.object_str, None);
        assert_eq!(cmd.preposition_object_str.as_deref(), Some("RIVER"));
    }

    #[test]
    fn bare_action_and_empty_input() {
        let cmd = CommandSplitter::split(&tokens(&["INSPECT"]));
        assert_eq!(cmd.action_str, "INSPECT");
        assert_eq!(cmd.arg_count(), 0);

        let empty = CommandSplitter::split(&[String::new()]);
        assert!(empty.is_empty());
        assert!(CommandSplitter::split(&[]).is_empty());
    }

    #[test]
    fn display_rejoins_phrases() {
        let cmd = CommandSplitter::split(&tokens(&["EMPTY", "BUCKET", "INTO", "WATER", "WELL"]));
        assert_eq!(cmd.to_string(), "EMPTY BUCKET INTO WATER WELL");
    }

    #[test]
    fn player_words() {
        assert!(Target::names_player("self"));
        assert!(Target::names_player("PLAYER"));
        assert!(!Target::names_player("myself"));
        assert_eq!(Target::Player.entity(), None);
        assert_eq!(Target::Entity(EntityId::new(2)).entity(), Some(EntityId::new(2)));
    }
}
