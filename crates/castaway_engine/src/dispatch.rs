//! Command dispatch.
//!
//! The dispatcher is the only thing that changes the world during play.
//! Each validated command is handled to completion before the next one is
//! read:
//! 1. Build an [`Interaction`] from the resolved command
//! 2. Refuse it if the target does not allow the action
//! 3. Select the target's service and run its handler

use castaway_parser::Command;
use castaway_world::World;
use tracing::{debug, info};

use crate::registry::ServiceRegistry;
use crate::service::{Ctx, Interaction, Reply};

/// Routes resolved commands to services.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    services: ServiceRegistry,
}

impl Dispatcher {
    /// Creates a dispatcher over a service registry.
    #[must_use]
    pub const fn new(services: ServiceRegistry) -> Self {
        Self { services }
    }

    /// The services this dispatcher routes to.
    #[must_use]
    pub const fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    /// Applies a validated and resolved command to the world.
    ///
    /// Returns `None` for a command without an action, which does nothing,
    /// and for QUIT and HELP, which the session answers itself.
    pub fn dispatch(&self, world: &mut World, command: &Command) -> Option<Reply> {
        let interaction = Interaction::from_command(command)?;
        if interaction.action.is_meta() {
            return None;
        }
        debug!(%command, "dispatching command");
        Some(self.interact(world, interaction))
    }

    /// Runs a single interaction.
    pub fn interact(&self, world: &mut World, interaction: Interaction) -> Reply {
        let reply = Ctx::new(world, &self.services).interact(interaction);
        if reply.is_end() {
            info!(action = %interaction.action, "game over");
        }
        reply
    }
}
