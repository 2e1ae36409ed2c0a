//! Exact type tags and family type-sets.
//!
//! An [`EntityKind`] names the concrete sort of thing an entity is ("well",
//! "bucket"). Services are bound to kinds by exact equality; there is no
//! subtype search. [`EntityTypes`] is the coarse family set the usage
//! grammar constrains arguments with.

use std::fmt;

use bitflags::bitflags;

/// Exact type tag of an entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKind(&'static str);

impl EntityKind {
    /// Creates a kind tag.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the tag name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

bitflags! {
    /// Set of entity families a usage slot accepts.
    ///
    /// An entity is an instance of every family whose bit it carries:
    /// equipable items carry both `ITEM` and `EQUIPABLE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EntityTypes: u8 {
        /// Fixed objects (wells, doors, engines)
        const OBJECT = 1;
        /// Portable items
        const ITEM = 1 << 1;
        /// Items that can be worn or wielded
        const EQUIPABLE = 1 << 2;
        /// The player, referenced as SELF or PLAYER
        const PLAYER = 1 << 3;
    }
}

impl EntityTypes {
    /// Returns true if something carrying `types` is an instance of any family in this set.
    #[must_use]
    pub const fn admits(self, types: Self) -> bool {
        self.intersects(types)
    }
}
