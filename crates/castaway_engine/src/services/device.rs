//! The engine and the control panel.
//!
//! The engine moves `Empty -> Fueled -> Working`: fuel from the can fills
//! it, the control panel starts it. Hitting it breaks it for good from any
//! stage. Once the engine runs and the hull holds, the control panel flies
//! the ship home and the game is won.

use castaway_foundation::Action;
use castaway_world::{Contents, DeviceState, Integrity, State};
use tracing::info;

use super::{is_kind, set_state};
use crate::kinds;
use crate::service::{Ctx, Interaction, Reply, Service, refusal};

const FLOWN_HOME: &str = "The control panel lights up green. You set a course for home, and the \
     ship shudders before gliding smoothly into the stars. You made it.";

/// The engine.
#[must_use]
pub fn engine() -> Service {
    Service::base("engine")
        .with(Action::Fill, refuel)
        .with(Action::Empty, refuel)
        .with(Action::Hit, break_engine)
        .with(Action::Inspect, inspect_engine)
}

/// The control panel.
#[must_use]
pub fn control_panel() -> Service {
    Service::base("control panel").with(Action::Use, start)
}

fn refuel(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let (Some(engine), Some(can)) = (interaction.object_id(), interaction.preposition_object_id())
    else {
        return refusal(interaction.action);
    };
    let state = ctx.entity(engine).device();
    if state == Some(DeviceState::Broken) {
        return Reply::say("The engine looks permanently broken.");
    }
    if !is_kind(ctx, can, kinds::FUEL_CAN) {
        return Reply::say("You can't fill the engine with that.");
    }
    if !ctx.world.player().holds(can) {
        return Reply::say("You don't have that.");
    }
    if state != Some(DeviceState::Empty) {
        return Reply::say("The engine is already full.");
    }
    if ctx.entity(can).vessel() != Some(Contents::Fuel) {
        return Reply::say("The fuel can is empty.");
    }
    set_state(ctx, can, State::Vessel(Contents::Empty));
    set_state(ctx, engine, State::Device(DeviceState::Fueled));
    Reply::say("You pour the fuel into the engine until it is filled to the brim.")
}

fn break_engine(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(engine) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    if ctx.entity(engine).device() == Some(DeviceState::Broken) {
        return Reply::say("The engine is already broken.");
    }
    set_state(ctx, engine, State::Device(DeviceState::Broken));
    info!("engine broken");
    Reply::say(
        "You hit the engine as hard as you can. Something cracks inside, and it goes quiet for good.",
    )
}

fn inspect_engine(ctx: &mut Ctx<'_>, interaction: Interaction) -> Reply {
    let Some(engine) = interaction.object_id() else {
        return refusal(interaction.action);
    };
    let text = match ctx.entity(engine).device() {
        Some(DeviceState::Fueled) => "The engine is filled to the brim.",
        Some(DeviceState::Working) => "The engine is roaring with life.",
        Some(DeviceState::Broken) => "The engine looks permanently broken.",
        Some(DeviceState::Empty) | None => "The engine.",
    };
    Reply::say(text)
}

fn start(ctx: &mut Ctx<'_>, _interaction: Interaction) -> Reply {
    let Some(engine) = ctx.world.find_kind(kinds::ENGINE) else {
        return Reply::say("The control panel stays dark.");
    };
    match ctx.entity(engine).device() {
        Some(DeviceState::Broken) => Reply::say("The control panel flashes red: ENGINE FAILURE."),
        Some(DeviceState::Empty) | None => Reply::say("The control panel flashes red: NO FUEL."),
        Some(DeviceState::Fueled) => {
            set_state(ctx, engine, State::Device(DeviceState::Working));
            Reply::say("You run the start sequence. Somewhere behind you the engine roars to life.")
        }
        Some(DeviceState::Working) => {
            let breached = ctx
                .world
                .find_kind(kinds::HULL)
                .is_some_and(|hull| ctx.entity(hull).integrity() == Some(Integrity::Broken));
            if breached {
                return Reply::say("The control panel flashes red: HULL BREACH.");
            }
            info!("ship flown home");
            Reply::end(FLOWN_HOME)
        }
    }
}
