//! Dispatch tests.

use castaway_content::{starship, town_square};
use castaway_engine::{Dispatcher, Interaction, Reply, ServiceRegistry, kinds};
use castaway_foundation::Action;
use castaway_parser::Target;

use crate::say;

#[test]
fn inspect_without_object_describes_the_room() {
    let mut world = town_square().unwrap();
    assert_eq!(
        say(&mut world, "inspect"),
        "You are in the town square. You see these objects: well, river. You see these items: bucket."
    );
}

#[test]
fn inspect_uses_the_description() {
    let mut world = town_square().unwrap();
    assert_eq!(say(&mut world, "inspect river"), "A river.");
    assert_eq!(say(&mut world, "inspect bucket"), "A bucket. It is empty.");
}

#[test]
fn every_ship_kind_has_a_service() {
    let registry = ServiceRegistry::standard();
    for kind in [
        kinds::WELL,
        kinds::RIVER,
        kinds::BUCKET,
        kinds::FUEL_CAN,
        kinds::REPAIR_KIT,
        kinds::HEAVY_DOOR,
        kinds::HEAVY_DOOR_WHEEL,
        kinds::STUCK_DOOR,
        kinds::DOOR,
        kinds::GLASS_CASE,
        kinds::HULL,
        kinds::ENGINE,
        kinds::CONTROL_PANEL,
        kinds::RED_BUTTON,
        kinds::URINAL,
    ] {
        assert!(registry.resolve(kind).is_some(), "{kind} has no service");
    }
}

#[test]
fn disallowed_interactions_are_refused_without_change() {
    let mut world = town_square().unwrap();
    let well = world.find_key("well").unwrap();
    let before = world.describe_environment(world.player().environment);

    let reply = Dispatcher::default().interact(&mut world, Interaction::on(Action::Pickup, well));
    assert_eq!(reply, Reply::say("You can't pick that up."));
    assert_eq!(world.describe_environment(world.player().environment), before);
    assert!(world.player().inventory.is_empty());
}

#[test]
fn generic_items_fall_back_to_the_item_service() {
    let mut world = starship().unwrap();
    say(&mut world, "hit glass case");
    assert_eq!(say(&mut world, "pickup axe"), "You pick up 'fire axe'.");
    assert_eq!(say(&mut world, "pickup axe"), "You already have that.");
    assert!(say(&mut world, "equip fire axe").starts_with("Equipped: FIRE AXE."));
}

#[test]
fn interactions_with_the_player() {
    let mut world = town_square().unwrap();
    let reply = Dispatcher::default().interact(
        &mut world,
        Interaction::new(Action::Inspect, Some(Target::Player), None),
    );
    assert_eq!(reply.text(), "You are not carrying anything.");
}
