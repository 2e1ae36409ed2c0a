//! Smaller ship fixtures: the glass case, the hull and its repair kit,
//! the urinal, and the red button.

use castaway_foundation::Action;
use castaway_world::{Integrity, State};

use super::{describe, is_kind, set_state};
use crate::kinds;
use crate::service::{Ctx, Interaction, Reply, Service, refusal};
use crate::services::item;

// =============================================================================
// Glass Case
// =============================================================================

/// A case that drops its contents when smashed.
#[must_use]
pub fn glass_case() -> Service {
    Service::base("glass case")
        .with(Action::Hit, smash)
        .with(Action::Inspect, inspect_case)
}

fn smash(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(case) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    if ctx.entity(case).integrity() == Some(Integrity::Broken) {
        return Reply::say("The glass case is already broken.");
    }
    set_state(ctx, case, State::Integrity(Integrity::Broken));
    let released = ctx.world.release_contents(case);
    if released.is_empty() {
        return Reply::say("You smash the glass case. There was nothing inside.");
    }
    let names: Vec<&str> = released
        .iter()
        .map(|&id| ctx.entity(id).name.as_str())
        .collect();
    Reply::say(format!(
        "You smash the glass case. Out falls: {}.",
        names.join(", ")
    ))
}

fn inspect_case(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(case) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    let suffix = if ctx.entity(case).integrity() == Some(Integrity::Broken) {
        "The glass is shattered."
    } else {
        ""
    };
    Reply::say(describe(ctx, case, suffix))
}

// =============================================================================
// Hull and Repair Kit
// =============================================================================

/// The ship's hull, damaged until repaired with the kit.
#[must_use]
pub fn hull() -> Service {
    Service::base("hull")
        .with(Action::Repair, repair)
        .with(Action::Inspect, inspect_hull)
}

/// The repair kit. Using it on something repairs that thing with it.
#[must_use]
pub fn repair_kit() -> Service {
    item::carry("repair kit").with(Action::Use, use_kit)
}

fn repair(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let (Some(hull), Some(tool)) = (interaction.object_id(), interaction.preposition_object_id())
    else {
        return refusal(interaction.action);
    };
    if !is_kind(ctx, tool, kinds::REPAIR_KIT) {
        return Reply::say("You can't repair the hull with that.");
    }
    if !ctx.world.player().holds(tool) {
        return Reply::say("You don't have that.");
    }
    if ctx.entity(hull).integrity() == Some(Integrity::Intact) {
        return Reply::say("The hull is already repaired.");
    }
    set_state(ctx, hull, State::Integrity(Integrity::Intact));
    Reply::say("You patch up the hull with the repair kit. It should hold.")
}

fn inspect_hull(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(hull) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    let suffix = match ctx.entity(hull).integrity() {
        Some(Integrity::Broken) => "It is badly damaged.",
        Some(Integrity::Intact) => "It has been patched up.",
        None => "",
    };
    Reply::say(describe(ctx, hull, suffix))
}

fn use_kit(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    if interaction.preposition_object.is_none() {
        return Reply::say("You need to use the repair kit on something.");
    }
    ctx.interact(interaction.swapped().with_action(Action::Repair))
}

// =============================================================================
// Urinal and Red Button
// =============================================================================

/// Relieves a full bladder.
#[must_use]
pub fn urinal() -> Service {
    Service::base("urinal").with(Action::Use, relieve)
}

fn relieve(ctx: &mut Ctx<'_>, _interaction: Interaction) -> Reply {
    let Some(bladder) = ctx.world.effect(kinds::FULL_BLADDER).cloned() else {
        return Reply::say("You don't need to go right now.");
    };
    let lost = ctx.world.player_mut().remove_effects(&[bladder]);
    if lost.is_empty() {
        Reply::say("You don't need to go right now.")
    } else {
        Reply::say(format!("You relieve yourself. {lost}"))
    }
}

/// The extinguisher button hidden under the control panel.
#[must_use]
pub fn red_button() -> Service {
    Service::base("red button")
        .with(Action::Press, press)
        .with(Action::Hit, press)
        .with(Action::Use, press)
}

fn press(_ctx: &mut Ctx<'_>, _interaction: Interaction) -> Reply {
    Reply::say(
        "You press the red button. Extinguisher foam hisses out of a nozzle above the control \
         panel, then stops.",
    )
}
