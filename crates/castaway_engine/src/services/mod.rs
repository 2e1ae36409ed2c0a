//! The standard services, grouped by where their entities live.
//!
//! - [`item`] - Pick up, equip, and unequip for any portable item
//! - [`town`] - The well, the river, and liquid vessels
//! - [`airlock`] - The heavy door and its locking wheel
//! - [`doors`] - Doors between rooms
//! - [`ship`] - Glass case, hull, repair kit, urinal, red button
//! - [`device`] - The engine and the control panel

pub mod airlock;
pub mod device;
pub mod doors;
pub mod item;
pub mod ship;
pub mod town;

use castaway_foundation::EntityId;
use castaway_world::{EntityKind, State};

use crate::service::Ctx;

/// Returns true if the entity has exactly this kind.
fn is_kind(ctx: &Ctx<'_>, id: EntityId, kind: EntityKind) -> bool {
    ctx.entity(id).kind == kind
}

/// Replaces an entity's state.
fn set_state(ctx: &mut Ctx<'_>, id: EntityId, state: State) {
    ctx.world.entity_mut(id).state = Some(state);
}

/// Appends a suffix sentence to an entity's base description.
fn describe(ctx: &Ctx<'_>, id: EntityId, suffix: &str) -> String {
    let description = &ctx.entity(id).description;
    if suffix.is_empty() {
        description.clone()
    } else {
        format!("{description} {suffix}")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Dispatch helpers shared by the service tests.

    use castaway_foundation::{Action, EntityId};
    use castaway_world::World;

    use crate::registry::ServiceRegistry;
    use crate::service::{Ctx, Interaction, Reply};

    pub fn run(world: &mut World, interaction: Interaction) -> Reply {
        let registry = ServiceRegistry::standard();
        Ctx::new(world, &registry).interact(interaction)
    }

    pub fn on(world: &mut World, action: Action, id: EntityId) -> String {
        run(world, Interaction::on(action, id)).text().to_string()
    }

    pub fn with(world: &mut World, action: Action, object: EntityId, other: EntityId) -> String {
        run(world, Interaction::linking(action, object, other))
            .text()
            .to_string()
    }
}
