//! Services: per-kind interaction handlers.
//!
//! A [`Service`] is a table mapping every action to a handler. Services are
//! built from [`Service::base`], which refuses every action with
//! "You can't <verb> that." and answers INSPECT with a description, and
//! then override the actions their kind supports.
//!
//! Handlers receive a [`Ctx`] holding the world and the service registry,
//! so a handler can forward an interaction to another entity's service.

use std::collections::BTreeMap;
use std::fmt;

use castaway_foundation::{Action, EntityId};
use castaway_parser::{Command, Target};
use castaway_world::{Entity, World};
use strum::IntoEnumIterator;

use crate::registry::ServiceRegistry;

// =============================================================================
// Reply
// =============================================================================

/// Outcome of an interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Narrative text; play continues.
    Say(String),
    /// Final narrative passage; the run is over.
    End(String),
}

impl Reply {
    /// Narrative text that keeps the game going.
    #[must_use]
    pub fn say(text: impl Into<String>) -> Self {
        Self::Say(text.into())
    }

    /// A passage that ends the game.
    #[must_use]
    pub fn end(text: impl Into<String>) -> Self {
        Self::End(text.into())
    }

    /// The narrative text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Say(text) | Self::End(text) => text,
        }
    }

    /// Returns true if the game ended.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End(_))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

// =============================================================================
// Interaction
// =============================================================================

/// An action applied to resolved targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interaction {
    /// What to do
    pub action: Action,
    /// Primary target, absent for bare actions.
    pub object: Option<Target>,
    /// Target after the preposition.
    pub preposition_object: Option<Target>,
}

impl Interaction {
    /// Creates an interaction.
    #[must_use]
    pub const fn new(
        action: Action,
        object: Option<Target>,
        preposition_object: Option<Target>,
    ) -> Self {
        Self {
            action,
            object,
            preposition_object,
        }
    }

    /// An action on a single entity.
    #[must_use]
    pub const fn on(action: Action, id: EntityId) -> Self {
        Self::new(action, Some(Target::Entity(id)), None)
    }

    /// An action on an entity using another.
    #[must_use]
    pub const fn linking(action: Action, object: EntityId, preposition_object: EntityId) -> Self {
        Self::new(
            action,
            Some(Target::Entity(object)),
            Some(Target::Entity(preposition_object)),
        )
    }

    /// Builds an interaction from a resolved command.
    ///
    /// Returns `None` if the command has no resolved action.
    #[must_use]
    pub fn from_command(command: &Command) -> Option<Self> {
        command
            .action
            .map(|action| Self::new(action, command.object, command.preposition_object))
    }

    /// The same action with the two targets exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self::new(self.action, self.preposition_object, self.object)
    }

    /// The same targets under another action.
    #[must_use]
    pub const fn with_action(self, action: Action) -> Self {
        Self::new(action, self.object, self.preposition_object)
    }

    /// The primary target, if it is an entity.
    #[must_use]
    pub fn object_id(&self) -> Option<EntityId> {
        self.object.and_then(Target::entity)
    }

    /// The preposition target, if it is an entity.
    #[must_use]
    pub fn preposition_object_id(&self) -> Option<EntityId> {
        self.preposition_object.and_then(Target::entity)
    }
}

// =============================================================================
// Context
// =============================================================================

/// What a handler can reach: the world and the other services.
pub struct Ctx<'a> {
    /// The world being played.
    pub world: &'a mut World,
    services: &'a ServiceRegistry,
}

impl<'a> Ctx<'a> {
    /// Creates a context.
    pub fn new(world: &'a mut World, services: &'a ServiceRegistry) -> Self {
        Self { world, services }
    }

    /// Routes an interaction to the service of its primary target.
    pub fn interact(&mut self, interaction: Interaction) -> Reply {
        let services = self.services;
        services.interact(self, interaction)
    }

    /// Shorthand for `self.world.entity(id)`.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> &Entity {
        self.world.entity(id)
    }
}

// =============================================================================
// Service
// =============================================================================

/// Handles one action for one kind of entity.
pub type Handler = fn(&mut Ctx<'_>, Interaction) -> Reply;

/// Action table for one kind of entity.
#[derive(Clone)]
pub struct Service {
    name: &'static str,
    handlers: BTreeMap<Action, Handler>,
}

impl Service {
    /// A service that refuses everything and describes on INSPECT.
    #[must_use]
    pub fn base(name: &'static str) -> Self {
        let mut handlers: BTreeMap<Action, Handler> =
            Action::iter().map(|action| (action, refuse as Handler)).collect();
        handlers.insert(Action::Inspect, inspect);
        Self { name, handlers }
    }

    /// A service with no handlers at all.
    ///
    /// Only useful for building tables by hand; see [`Service::interact`].
    #[must_use]
    pub const fn empty(name: &'static str) -> Self {
        Self {
            name,
            handlers: BTreeMap::new(),
        }
    }

    /// Overrides the handler for one action.
    #[must_use]
    pub fn with(mut self, action: Action, handler: Handler) -> Self {
        self.handlers.insert(action, handler);
        self
    }

    /// Name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if the table has an entry for the action.
    #[must_use]
    pub fn handles(&self, action: Action) -> bool {
        self.handlers.contains_key(&action)
    }

    /// Runs the handler for the interaction's action.
    ///
    /// # Panics
    ///
    /// Panics if the table has no entry for the action. Tables built from
    /// [`Service::base`] cover every action.
    pub fn interact(&self, ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
        let Some(handler) = self.handlers.get(&interaction.action) else {
            panic!(
                "service {} has no handler for {}",
                self.name, interaction.action
            );
        };
        handler(ctx, interaction)
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("name", &self.name)
            .field("actions", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

// =============================================================================
// Base Handlers
// =============================================================================

/// The generic refusal for an action.
#[must_use]
pub fn refusal(action: Action) -> Reply {
    match action {
        Action::Pickup => Reply::say("You can't pick that up."),
        _ => Reply::say(format!("You can't {} that.", action.verb())),
    }
}

/// Refuses the interaction.
pub fn refuse(_ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    refusal(interaction.action)
}

/// Describes the environment, the player, or an entity.
pub fn inspect(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let world = &*ctx.world;
    match interaction.object {
        None => Reply::say(world.describe_environment(world.player().environment)),
        Some(Target::Player) => Reply::say(world.describe_player()),
        Some(Target::Entity(id)) => Reply::say(world.entity(id).description.clone()),
    }
}
