//! Service registry and selection.
//!
//! Selection for a primary target runs in this order:
//!
//! 1. the service registered for the entity's exact kind
//! 2. the item service, if the entity is an item
//! 3. the generic service
//!
//! The player and "no object" always get the generic service.

use std::collections::HashMap;

use castaway_parser::Target;
use castaway_world::{EntityKind, World};
use tracing::debug;

use crate::kinds;
use crate::service::{Ctx, Interaction, Reply, Service, refusal};
use crate::services;

/// Maps entity kinds to services.
#[derive(Clone, Debug)]
pub struct ServiceRegistry {
    by_kind: HashMap<EntityKind, Service>,
    item: Service,
    generic: Service,
}

impl ServiceRegistry {
    /// A registry with only the item and generic services.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_kind: HashMap::new(),
            item: services::item::service(),
            generic: Service::base("generic"),
        }
    }

    /// Every service the demo worlds use.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(kinds::WELL, services::town::well());
        registry.register(kinds::RIVER, services::town::river());
        registry.register(kinds::BUCKET, services::town::vessel("bucket"));
        registry.register(kinds::FUEL_CAN, services::town::vessel("fuel can"));
        registry.register(kinds::HEAVY_DOOR, services::airlock::heavy_door());
        registry.register(kinds::HEAVY_DOOR_WHEEL, services::airlock::wheel());
        registry.register(kinds::DOOR, services::doors::door());
        registry.register(kinds::STUCK_DOOR, services::doors::stuck_door());
        registry.register(kinds::GLASS_CASE, services::ship::glass_case());
        registry.register(kinds::HULL, services::ship::hull());
        registry.register(kinds::REPAIR_KIT, services::ship::repair_kit());
        registry.register(kinds::URINAL, services::ship::urinal());
        registry.register(kinds::RED_BUTTON, services::ship::red_button());
        registry.register(kinds::ENGINE, services::device::engine());
        registry.register(kinds::CONTROL_PANEL, services::device::control_panel());
        registry
    }

    /// Binds a service to an exact kind, replacing any earlier binding.
    pub fn register(&mut self, kind: EntityKind, service: Service) {
        self.by_kind.insert(kind, service);
    }

    /// The service bound to exactly this kind.
    #[must_use]
    pub fn resolve(&self, kind: EntityKind) -> Option<&Service> {
        self.by_kind.get(&kind)
    }

    /// Picks the service for a primary target.
    #[must_use]
    pub fn select(&self, world: &World, target: Option<Target>) -> &Service {
        let Some(Target::Entity(id)) = target else {
            return &self.generic;
        };
        let entity = world.entity(id);
        if let Some(service) = self.resolve(entity.kind) {
            return service;
        }
        if entity.is_item() {
            &self.item
        } else {
            &self.generic
        }
    }

    /// Runs an interaction against its target's service.
    ///
    /// A target that does not allow the action is refused before any
    /// handler runs.
    pub fn interact(&self, ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
        let refused = interaction
            .object_id()
            .filter(|&id| !ctx.world.entity(id).allows(interaction.action));
        if let Some(id) = refused {
            debug!(action = %interaction.action, target = %id, "action not allowed");
            return refusal(interaction.action);
        }
        let service = self.select(ctx.world, interaction.object);
        debug!(action = %interaction.action, service = service.name(), "dispatching");
        service.interact(ctx, interaction)
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
