//! The starship.
//!
//! Layout:
//!
//! ```text
//!                 outside (hull)
//!                    │ heavy door
//!                 cockpit (control panel, glass case)
//!                    │ hallway door (stuck)
//!  bedroom ─┐        │        ┌─ bathroom (urinal)
//!  canteen ─┼──── hallway ────┼─ engine room (engine)
//!  storage ─┘                 └─ workshop, armory
//! ```
//!
//! To win: fuel the engine, start it, suit up, patch the hull from
//! outside, and fly home from the control panel.

use castaway_engine::kinds;
use castaway_foundation::{Action, EnvironmentId, EquipSlot, Result};
use castaway_world::{
    Contents, DeviceState, Entity, EntityKind, Hatch, Integrity, State, World, WorldBuilder,
};

/// Builds the starship. The player wakes up in the cockpit needing the toilet.
///
/// # Errors
///
/// Returns an error only if the registry itself is inconsistent.
pub fn starship() -> Result<World> {
    let mut b = WorldBuilder::new();
    let vacuum_resistance = b.effect(kinds::VACUUM_RESISTANCE, "You can enter the void.");
    b.afflict(kinds::FULL_BLADDER, "You need to pee.");

    let cockpit = b.environment("cockpit", "cockpit");
    let hallway = b.environment("hallway", "hallway");
    let engine_room = b.environment("engine_room", "engine room");
    let workshop = b.environment("workshop", "workshop");
    let armory = b.environment("armory", "armory");
    let bathroom = b.environment("bathroom", "bathroom");
    let bedroom = b.environment("bedroom", "bedroom");
    let canteen = b.environment("canteen", "canteen");
    let storage = b.environment("storage", "storage room");
    let outside = b.environment("outside", "void outside the ship");

    // Cockpit
    b.add_to(
        cockpit,
        Entity::object("control_panel", kinds::CONTROL_PANEL, "control panel")
            .described("The control panel.")
            .aliases(&["panel"])
            .allowing(&[Action::Inspect, Action::Use]),
    );
    b.add_to(
        cockpit,
        Entity::object("red_button", kinds::RED_BUTTON, "red button")
            .described("A red button.")
            .aliases(&["button"])
            .allowing(&[Action::Inspect, Action::Hit, Action::Use, Action::Press])
            .hidden(),
    );
    let heavy_door = b.add_to(
        cockpit,
        Entity::object("heavy_door", kinds::HEAVY_DOOR, "heavy door")
            .described("A heavy door.")
            .aliases(&["outside", "void"])
            .allowing(&[Action::Inspect, Action::Open, Action::Close, Action::Enter])
            .with_state(State::Hatch(Hatch::Closed))
            .leading_to(outside, Some(cockpit)),
    );
    b.add_to(
        cockpit,
        Entity::object("wheel", kinds::HEAVY_DOOR_WHEEL, "wheel")
            .described("A solid metal wheel is attached to the door.")
            .aliases(&["heavy door wheel"])
            .allowing(&[Action::Inspect, Action::Turn])
            .with_state(State::Hatch(Hatch::Closed))
            .hidden(),
    );
    let hallway_door = b.add_to(
        cockpit,
        Entity::object("hallway_door", kinds::STUCK_DOOR, "hallway door")
            .described("A door to the hallway.")
            .aliases(&["hallway"])
            .allowing(&[Action::Inspect, Action::Enter, Action::Hit])
            .with_state(State::Hatch(Hatch::Stuck))
            .leading_to(hallway, None),
    );
    let fire_axe = b.add(
        Entity::item("fire_axe", EntityKind::new("fire axe"), "fire axe")
            .described("A fire axe.")
            .aliases(&["axe"])
            .allowing(&[Action::Inspect, Action::Pickup, Action::Equip, Action::Unequip])
            .equipable(EquipSlot::Hand, vec![]),
    );
    b.add_to(
        cockpit,
        Entity::object("glass_case", kinds::GLASS_CASE, "glass case")
            .described("A glass case. It reads: \"Break in case of emergency\".")
            .aliases(&["glass", "case"])
            .allowing(&[Action::Inspect, Action::Hit])
            .with_state(State::Integrity(Integrity::Intact))
            .containing(vec![fire_axe]),
    );

    // Hallway
    room_door(&mut b, hallway, cockpit, "cockpit", "cockpit");
    for (room, name, place) in [
        (engine_room, "engine room", "engine room"),
        (bedroom, "bedroom", "bedroom"),
        (bathroom, "bathroom", "bathroom"),
        (workshop, "workshop", "workshop"),
        (canteen, "canteen", "canteen"),
        (storage, "storage", "storage room"),
        (armory, "armory", "armory"),
    ] {
        room_door(&mut b, hallway, room, name, place);
        b.place(room, hallway_door);
    }

    // Rooms
    b.add_to(
        engine_room,
        Entity::object("engine", kinds::ENGINE, "engine")
            .allowing(&[Action::Inspect, Action::Fill, Action::Empty, Action::Hit])
            .with_state(State::Device(DeviceState::Empty)),
    );
    b.add_to(
        bathroom,
        Entity::object("urinal", kinds::URINAL, "urinal")
            .described("A urinal.")
            .allowing(&[Action::Inspect, Action::Use]),
    );
    b.add_to(
        workshop,
        Entity::item("repair_kit", kinds::REPAIR_KIT, "repair kit")
            .described("A repair kit. You wonder what it's for.")
            .aliases(&["kit"])
            .allowing(&[Action::Inspect, Action::Pickup, Action::Use]),
    );
    b.add_to(
        workshop,
        Entity::item("fuel_can", kinds::FUEL_CAN, "fuel can")
            .described("A fuel can.")
            .aliases(&["can", "fuel"])
            .allowing(&[Action::Inspect, Action::Pickup, Action::Use, Action::Empty])
            .with_state(State::Vessel(Contents::Fuel)),
    );
    b.add_to(
        armory,
        Entity::item("space_suit", EntityKind::new("space suit"), "space suit")
            .described("A space suit.")
            .aliases(&["suit"])
            .allowing(&[Action::Inspect, Action::Pickup, Action::Equip, Action::Unequip])
            .equipable(EquipSlot::Body, vec![vacuum_resistance]),
    );

    // Outside
    b.place(outside, heavy_door);
    b.add_to(
        outside,
        Entity::object("hull", kinds::HULL, "hull")
            .described("A hull plate.")
            .aliases(&["damage"])
            .allowing(&[Action::Inspect, Action::Repair])
            .with_state(State::Integrity(Integrity::Broken)),
    );

    b.build(cockpit)
}

/// Adds a door in `from` leading to `to`, called "`name` door".
fn room_door(b: &mut WorldBuilder, from: EnvironmentId, to: EnvironmentId, name: &str, place: &str) {
    let door = format!("{name} door");
    b.add_to(
        from,
        Entity::object(&door.replace(' ', "_"), kinds::DOOR, &door)
            .described(&format!("A door to the {place}."))
            .aliases(&[name])
            .allowing(&[Action::Inspect, Action::Enter])
            .leading_to(to, None),
    );
}
