//! The town square.

use castaway_engine::kinds;
use castaway_foundation::{Action, EquipSlot, Result};
use castaway_world::{Contents, Entity, EntityKind, FillLevel, State, World, WorldBuilder};

/// Pours needed before the well is full.
pub const WELL_POURS: u32 = 3;

/// Builds the town square.
///
/// The sword lies at the bottom of the well. Getting it takes a full well
/// and a way to breathe under water.
///
/// # Errors
///
/// Returns an error only if the registry itself is inconsistent.
pub fn town_square() -> Result<World> {
    let mut b = WorldBuilder::new();
    let water_breathing = b.effect(kinds::WATER_BREATHING, "You can breathe under water.");
    let square = b.environment("town_square", "town square");

    let sword = b.add(
        Entity::item("sword", EntityKind::new("sword"), "sword")
            .described("A sharp sword.")
            .allowing(&[Action::Inspect, Action::Equip, Action::Unequip])
            .equipable(EquipSlot::Hand, vec![]),
    );
    b.add_to(
        square,
        Entity::object("well", kinds::WELL, "well")
            .described("A deep cobblestone well.")
            .aliases(&["water well"])
            .allowing(&[Action::Inspect, Action::Fill, Action::Empty, Action::Enter])
            .with_state(State::Fill(FillLevel::Filling {
                remaining: WELL_POURS,
            }))
            .containing(vec![sword]),
    );
    b.add_to(
        square,
        Entity::object("river", kinds::RIVER, "river")
            .described("A river.")
            .allowing(&[Action::Inspect, Action::Fill]),
    );
    b.add_to(
        square,
        Entity::item("bucket", kinds::BUCKET, "bucket")
            .described("A bucket.")
            .allowing(&[
                Action::Inspect,
                Action::Pickup,
                Action::Fill,
                Action::Empty,
                Action::Equip,
                Action::Unequip,
            ])
            .with_state(State::Vessel(Contents::Empty))
            .equipable(EquipSlot::Head, vec![water_breathing]),
    );

    b.build(square)
}
