//! The closed command vocabulary.
//!
//! Actions and prepositions are the only keywords the command language knows.
//! Both parse case-insensitively from a single token and display in uppercase,
//! which is the form every user-facing message uses.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A verb the player can issue.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Leave the game
    Quit,
    /// Show usage help
    Help,
    /// Look at an entity, the player, or the surroundings
    Inspect,
    /// Move an item from the surroundings into the inventory
    Pickup,
    /// Wear or wield an item
    Equip,
    /// Take off a worn item
    Unequip,
    /// Go into or through an object
    Enter,
    /// Fill something with something else
    Fill,
    /// Empty something into something else
    Empty,
    /// Use something, optionally on something else
    Use,
    /// Strike something
    Hit,
    /// Turn something
    Turn,
    /// Press something
    Press,
    /// Open something
    Open,
    /// Close something
    Close,
    /// Repair something with something else
    Repair,
}

impl Action {
    /// Parses a single token into an action, ignoring case.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        Self::from_str(word).ok()
    }

    /// The lowercase verb used in narrative text ("pick up", "fill").
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Help => "help",
            Self::Inspect => "inspect",
            Self::Pickup => "pick up",
            Self::Equip => "equip",
            Self::Unequip => "unequip",
            Self::Enter => "enter",
            Self::Fill => "fill",
            Self::Empty => "empty",
            Self::Use => "use",
            Self::Hit => "hit",
            Self::Turn => "turn",
            Self::Press => "press",
            Self::Open => "open",
            Self::Close => "close",
            Self::Repair => "repair",
        }
    }

    /// Actions handled by the session itself rather than dispatched to an entity.
    #[must_use]
    pub const fn is_meta(self) -> bool {
        matches!(self, Self::Quit | Self::Help)
    }
}

/// A connector linking an action's object to a second object.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Preposition {
    /// "fill bucket WITH river"
    With,
    /// "use kit ON hull"
    On,
    /// "empty bucket INTO well"
    Into,
    /// "fill bucket IN river"
    In,
}

impl Preposition {
    /// Parses a single token into a preposition, ignoring case.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        Self::from_str(word).ok()
    }

    /// Returns true if the token is a preposition keyword.
    #[must_use]
    pub fn is_keyword(word: &str) -> bool {
        Self::parse(word).is_some()
    }
}

/// A body slot an equipable item occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EquipSlot {
    /// Hats, helmets, buckets
    Head,
    /// Suits and armour
    Body,
    /// Trousers
    Legs,
    /// Boots
    Feet,
    /// The main hand
    Hand,
    /// The other hand
    Offhand,
    /// Amulets
    Neck,
    /// Rings
    Finger,
}
