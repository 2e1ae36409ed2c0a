//! Town services: the well, the river, and liquid vessels.
//!
//! Water moves river -> bucket -> well. The bucket is the object of
//! "FILL BUCKET WITH RIVER" and "EMPTY BUCKET INTO WELL", but the river
//! and the well do the work; the vessel service forwards those commands
//! with the two targets swapped.

use castaway_foundation::Action;
use castaway_world::{Contents, FillLevel, State};

use super::{describe, is_kind, set_state};
use crate::kinds;
use crate::service::{Ctx, Interaction, Reply, Service, refusal};
use crate::services::item;

// =============================================================================
// Well
// =============================================================================

/// A well that fills up over several pours and hides something at the bottom.
#[must_use]
pub fn well() -> Service {
    Service::base("well")
        .with(Action::Fill, fill_well)
        .with(Action::Empty, fill_well)
        .with(Action::Inspect, inspect_well)
        .with(Action::Enter, enter_well)
}

fn fill_well(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let (Some(well), Some(bucket)) = (interaction.object_id(), interaction.preposition_object_id())
    else {
        return refusal(interaction.action);
    };
    if !is_kind(ctx, bucket, kinds::BUCKET) {
        return Reply::say(format!(
            "You can't fill the well with '{}'.",
            ctx.entity(bucket).name
        ));
    }
    let player = ctx.world.player();
    if !player.holds(bucket) {
        return Reply::say("You don't have that.");
    }
    if player.is_wearing(bucket) {
        return Reply::say("You can't fill the well with something you have equipped.");
    }
    match ctx.entity(bucket).vessel() {
        Some(Contents::Water) => {}
        Some(Contents::Empty) => return Reply::say("The bucket is empty."),
        Some(Contents::Fuel) | None => {
            return Reply::say("You don't think filling the well with that is a good idea.");
        }
    }

    let remaining = match ctx.entity(well).fill_level() {
        Some(FillLevel::Full) => return Reply::say("The well is already full."),
        Some(FillLevel::Filling { remaining }) => remaining.saturating_sub(1),
        None => 0,
    };
    set_state(ctx, bucket, State::Vessel(Contents::Empty));
    if remaining == 0 {
        set_state(ctx, well, State::Fill(FillLevel::Full));
        Reply::say("The well is full of water.")
    } else {
        set_state(ctx, well, State::Fill(FillLevel::Filling { remaining }));
        Reply::say("You fill the well with water.")
    }
}

fn inspect_well(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(well) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    let suffix = match ctx.entity(well).fill_level() {
        Some(FillLevel::Full) => "The well is full of water.",
        Some(FillLevel::Filling { remaining }) if remaining > 0 => "The well has some water in it.",
        _ => "The well is empty.",
    };
    Reply::say(describe(ctx, well, suffix))
}

fn enter_well(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(well) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    if ctx.entity(well).fill_level() != Some(FillLevel::Full) {
        return Reply::say("Your body refuses to jump in without a way back up.");
    }
    if !ctx.world.player().has_effect(kinds::WATER_BREATHING) {
        return Reply::say(
            "You jump in the well but can't find the glimmer before running out of breath.",
        );
    }
    let Some(&found) = ctx.entity(well).contents().and_then(<[_]>::first) else {
        return Reply::say(
            "You descend to the bottom of the well again, but there is nothing left to find.",
        );
    };
    ctx.world.take_from_container(well, found);
    Reply::say(format!(
        "You firmly grab the bucket over your head and slowly descend into the water. \
         When you are at the bottom, you use one hand to feel around. \
         You swim back up and realise you are holding a {}.",
        ctx.entity(found).name
    ))
}

// =============================================================================
// River
// =============================================================================

/// A source that fills buckets with water.
#[must_use]
pub fn river() -> Service {
    Service::base("river").with(Action::Fill, fill_from_river)
}

fn fill_from_river(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(vessel) = interaction.preposition_object_id() else {
        return refusal(interaction.action);
    };
    if !is_kind(ctx, vessel, kinds::BUCKET) {
        return Reply::say(format!(
            "You can't fill '{}' in the river.",
            ctx.entity(vessel).name
        ));
    }
    let player = ctx.world.player();
    if !player.holds(vessel) {
        return Reply::say("You don't have a bucket.");
    }
    if player.is_wearing(vessel) {
        return Reply::say("You can't fill something you have equipped.");
    }
    if ctx.entity(vessel).vessel() != Some(Contents::Empty) {
        return Reply::say("The bucket is already full.");
    }
    set_state(ctx, vessel, State::Vessel(Contents::Water));
    Reply::say("You fill the bucket with water.")
}

// =============================================================================
// Vessels
// =============================================================================

/// A portable vessel. Filling and emptying it is handled by whatever it is
/// filled from or emptied into.
#[must_use]
pub fn vessel(name: &'static str) -> Service {
    item::carry(name)
        .with(Action::Fill, pour_swapped)
        .with(Action::Empty, pour_swapped)
        .with(Action::Use, use_vessel)
        .with(Action::Inspect, inspect_vessel)
}

fn pour_swapped(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    match interaction.preposition_object_id() {
        Some(other) if !ctx.entity(other).is_item() => ctx.interact(interaction.swapped()),
        _ => refusal(interaction.action),
    }
}

fn use_vessel(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(vessel) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    if interaction.preposition_object_id().is_none() {
        return Reply::say(format!(
            "You need to use the {} on something.",
            ctx.entity(vessel).name
        ));
    }
    pour_swapped(ctx, interaction.with_action(Action::Fill))
}

fn inspect_vessel(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(vessel) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    let suffix = match ctx.entity(vessel).vessel() {
        Some(Contents::Water) => "It is full of water.",
        Some(Contents::Fuel) => "It is full of fuel.",
        Some(Contents::Empty) => "It is empty.",
        None => "",
    };
    Reply::say(describe(ctx, vessel, suffix))
}
