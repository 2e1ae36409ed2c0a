//! Entity resolution.
//!
//! Maps a phrase or a type to a registered entity. Resolution scans a
//! registry in registration order and returns the first match; it does not
//! look at where the entity is. Reachability is the validator's job.
//!
//! Phrase matching compares the registry key, the display name, and every
//! alias, ignoring case.

use castaway_foundation::{Action, EntityId, Preposition};
use castaway_world::{Entity, EntityKind, EntityTypes, World};

use crate::command::{Command, Target};

/// What to look an entity up by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Query<'a> {
    /// Registry key, name, or alias.
    Phrase(&'a str),
    /// First entity of exactly this kind.
    Kind(EntityKind),
    /// First entity belonging to any of these families.
    Family(EntityTypes),
}

impl Query<'_> {
    fn matches(&self, entity: &Entity) -> bool {
        match *self {
            Self::Phrase(phrase) => !phrase.is_empty() && entity.references(phrase),
            Self::Kind(kind) => entity.kind == kind,
            Self::Family(types) => types.admits(entity.types()),
        }
    }
}

impl<'a> From<&'a str> for Query<'a> {
    fn from(phrase: &'a str) -> Self {
        Self::Phrase(phrase)
    }
}

impl From<EntityKind> for Query<'_> {
    fn from(kind: EntityKind) -> Self {
        Self::Kind(kind)
    }
}

/// Looks up entities in one registry.
pub trait Resolver {
    /// Returns the first entity matching the query.
    fn resolve(&self, query: Query<'_>) -> Option<EntityId>;
}

/// Resolves over the object registry.
#[derive(Copy, Clone, Debug)]
pub struct ObjectResolver<'w> {
    world: &'w World,
}

impl<'w> ObjectResolver<'w> {
    /// Creates a resolver over the world's objects.
    #[must_use]
    pub const fn new(world: &'w World) -> Self {
        Self { world }
    }
}

impl Resolver for ObjectResolver<'_> {
    fn resolve(&self, query: Query<'_>) -> Option<EntityId> {
        self.world
            .objects()
            .find(|(_, e)| query.matches(e))
            .map(|(id, _)| id)
    }
}

/// Resolves over the item registry.
#[derive(Copy, Clone, Debug)]
pub struct ItemResolver<'w> {
    world: &'w World,
}

impl<'w> ItemResolver<'w> {
    /// Creates a resolver over the world's items.
    #[must_use]
    pub const fn new(world: &'w World) -> Self {
        Self { world }
    }
}

impl Resolver for ItemResolver<'_> {
    fn resolve(&self, query: Query<'_>) -> Option<EntityId> {
        self.world
            .items()
            .find(|(_, e)| query.matches(e))
            .map(|(id, _)| id)
    }
}

/// Resolves command phrases: items first, then objects.
#[derive(Copy, Clone, Debug)]
pub struct CommandObjectResolver<'w> {
    items: ItemResolver<'w>,
    objects: ObjectResolver<'w>,
}

impl<'w> CommandObjectResolver<'w> {
    /// Creates a resolver over both registries of the world.
    #[must_use]
    pub const fn new(world: &'w World) -> Self {
        Self {
            items: ItemResolver::new(world),
            objects: ObjectResolver::new(world),
        }
    }

    /// Resolves a phrase to a target. SELF and PLAYER name the player.
    #[must_use]
    pub fn resolve_target(&self, phrase: &str) -> Option<Target> {
        if Target::names_player(phrase) {
            return Some(Target::Player);
        }
        self.resolve(Query::Phrase(phrase)).map(Target::Entity)
    }

    /// Fills in the typed fields of a split command.
    pub fn resolve_command(&self, command: &mut Command) {
        command.action = Action::parse(&command.action_str);
        command.preposition = command.preposition_str.as_deref().and_then(Preposition::parse);
        command.object = command
            .object_str
            .as_deref()
            .and_then(|p| self.resolve_target(p));
        command.preposition_object = command
            .preposition_object_str
            .as_deref()
            .and_then(|p| self.resolve_target(p));
    }
}

impl Resolver for CommandObjectResolver<'_> {
    fn resolve(&self, query: Query<'_>) -> Option<EntityId> {
        self.items
            .resolve(query)
            .or_else(|| self.objects.resolve(query))
    }
}
