//! Doors between rooms.

use castaway_foundation::{Action, EntityId};
use castaway_world::{Hatch, State};

use super::{describe, set_state};
use crate::service::{Ctx, Interaction, Reply, Service, refusal};

/// A door that always opens.
#[must_use]
pub fn door() -> Service {
    Service::base("door").with(Action::Enter, enter)
}

/// A door jammed in its frame until someone hits it.
#[must_use]
pub fn stuck_door() -> Service {
    Service::base("stuck door")
        .with(Action::Enter, enter_stuck)
        .with(Action::Hit, hit_stuck)
        .with(Action::Inspect, inspect_stuck)
}

/// Moves the player through a passage and describes where they end up.
pub(super) fn pass_through(ctx: &mut Ctx<'_>, door: EntityId) -> Reply {
    let here = ctx.world.player().environment;
    let Some(to) = ctx.entity(door).passage().and_then(|p| p.destination(here)) else {
        return refusal(Action::Enter);
    };
    ctx.world.move_player(to);
    Reply::say(format!(
        "You go through the {}. {}",
        ctx.entity(door).name,
        ctx.world.describe_environment(to)
    ))
}

fn enter(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    match interaction.object_id() {
        Some(door) => pass_through(ctx, door),
        None => refusal(interaction.action),
    }
}

fn enter_stuck(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(door) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    if ctx.entity(door).hatch() == Some(Hatch::Stuck) {
        return Reply::say(format!("The {} is stuck.", ctx.entity(door).name));
    }
    pass_through(ctx, door)
}

fn hit_stuck(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(door) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    let name = ctx.entity(door).name.clone();
    if ctx.entity(door).hatch() != Some(Hatch::Stuck) {
        return Reply::say(format!("The {name} is already open."));
    }
    set_state(ctx, door, State::Hatch(Hatch::Open));
    Reply::say(format!(
        "You slam your shoulder into the {name}. It jolts loose and swings open."
    ))
}

fn inspect_stuck(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(door) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    let suffix = if ctx.entity(door).hatch() == Some(Hatch::Stuck) {
        "It seems to be stuck."
    } else {
        ""
    };
    Reply::say(describe(ctx, door, suffix))
}
