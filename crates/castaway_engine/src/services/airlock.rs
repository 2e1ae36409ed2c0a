//! The airlock: a heavy door between the cockpit and the void, locked by
//! a wheel.
//!
//! The door only opens once the wheel is turned to the left. Opening it or
//! stepping through without vacuum resistance ends the game.

use castaway_foundation::{Action, EntityId};
use castaway_world::{Hatch, State};
use tracing::info;

use super::doors::pass_through;
use super::{describe, set_state};
use crate::kinds;
use crate::service::{Ctx, Interaction, Reply, Service, refusal};

const SUCKED_OUT: &str = "You open the heavy door. The air in the cockpit rushes out into the \
     void and drags you along with it. You drift away from the ship, gasping for air that isn't \
     there, until everything goes dark.";

const STEPPED_OUT: &str = "You step out into the void without any protection. The cold takes \
     your breath away, and then everything goes dark.";

/// The heavy door.
#[must_use]
pub fn heavy_door() -> Service {
    Service::base("heavy door")
        .with(Action::Open, open)
        .with(Action::Close, close)
        .with(Action::Enter, enter)
        .with(Action::Inspect, inspect_door)
}

/// The wheel that locks the heavy door.
#[must_use]
pub fn wheel() -> Service {
    Service::base("heavy door wheel")
        .with(Action::Turn, turn)
        .with(Action::Inspect, inspect_wheel)
}

fn wheel_unlocked(ctx: &Ctx<'_>) -> bool {
    ctx.world
        .find_kind(kinds::HEAVY_DOOR_WHEEL)
        .is_none_or(|wheel| ctx.entity(wheel).hatch() == Some(Hatch::Open))
}

fn protected(ctx: &Ctx<'_>) -> bool {
    ctx.world.player().has_effect(kinds::VACUUM_RESISTANCE)
}

fn is_open(ctx: &Ctx<'_>, door: EntityId) -> bool {
    ctx.entity(door).hatch() == Some(Hatch::Open)
}

fn open(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(door) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    if is_open(ctx, door) {
        return Reply::say("The heavy door is already open.");
    }
    if !wheel_unlocked(ctx) {
        return Reply::say("The heavy door won't budge. Something is holding it shut.");
    }
    set_state(ctx, door, State::Hatch(Hatch::Open));
    if !protected(ctx) {
        info!("opened the airlock unprotected");
        return Reply::end(SUCKED_OUT);
    }
    Reply::say(
        "You open the heavy door. The air rushes out into the void, but your suit keeps you alive.",
    )
}

fn close(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(door) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    if !is_open(ctx, door) {
        return Reply::say("The heavy door is already closed.");
    }
    set_state(ctx, door, State::Hatch(Hatch::Closed));
    Reply::say("You pull the heavy door shut.")
}

fn enter(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(door) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    if !is_open(ctx, door) {
        return Reply::say("The heavy door is closed.");
    }
    if !protected(ctx) {
        info!("stepped into the void unprotected");
        return Reply::end(STEPPED_OUT);
    }
    pass_through(ctx, door)
}

fn inspect_door(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(door) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    let suffix = if is_open(ctx, door) {
        "It is open."
    } else {
        "It is closed."
    };
    Reply::say(describe(ctx, door, suffix))
}

fn turn(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(wheel) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    if ctx.entity(wheel).hatch() == Some(Hatch::Open) {
        set_state(ctx, wheel, State::Hatch(Hatch::Closed));
        Reply::say("You turn the wheel to the right. The heavy door locks with a thud.")
    } else {
        set_state(ctx, wheel, State::Hatch(Hatch::Open));
        Reply::say("You turn the wheel to the left. Something inside the heavy door clicks.")
    }
}

fn inspect_wheel(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(wheel) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    let suffix = if ctx.entity(wheel).hatch() == Some(Hatch::Open) {
        "The wheel is turned to the left."
    } else {
        "The wheel is turned to the right."
    };
    Reply::say(describe(ctx, wheel, suffix))
}
