//! The item service: picking up and wearing portable things.

use castaway_foundation::Action;

use crate::service::{Ctx, Interaction, Reply, Service, refusal};

/// The service every item without its own gets.
#[must_use]
pub fn service() -> Service {
    carry("item")
}

/// A base service with the item actions, for item kinds to extend.
#[must_use]
pub fn carry(name: &'static str) -> Service {
    Service::base(name)
        .with(Action::Pickup, pick_up)
        .with(Action::Equip, equip)
        .with(Action::Unequip, unequip)
}

fn pick_up(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(id) = interaction.object_id() else {
        return refusal(Action::Pickup);
    };
    if ctx.world.player().holds(id) {
        return Reply::say("You already have that.");
    }
    let name = ctx.entity(id).name.clone();
    if ctx.world.pick_up(id) {
        Reply::say(format!("You pick up '{name}'."))
    } else {
        refusal(Action::Pickup)
    }
}

fn equip(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    match interaction.object_id() {
        Some(id) => Reply::say(ctx.world.equip(id)),
        None => refusal(Action::Equip),
    }
}

fn unequip(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    match interaction.object_id() {
        Some(id) if ctx.entity(id).equipable_info().is_some() => {
            Reply::say(ctx.world.unequip(id))
        }
        _ => refusal(Action::Unequip),
    }
}
