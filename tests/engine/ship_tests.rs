//! Ship state machine tests.

use castaway_content::starship;
use castaway_engine::kinds;
use castaway_world::{DeviceState, Hatch, Integrity, World};

use crate::{play, say};

/// Plays lines that must all succeed without ending the game.
fn walk(world: &mut World, lines: &[&str]) {
    for line in lines {
        say(world, line);
    }
}

#[test]
fn the_hallway_door_is_stuck_until_hit() {
    let mut world = starship().unwrap();
    assert_eq!(say(&mut world, "enter hallway door"), "The hallway door is stuck.");
    assert_eq!(
        say(&mut world, "inspect hallway door"),
        "A door to the hallway. It seems to be stuck."
    );
    assert_eq!(
        say(&mut world, "hit hallway door"),
        "You slam your shoulder into the hallway door. It jolts loose and swings open."
    );
    assert_eq!(say(&mut world, "hit hallway"), "The hallway door is already open.");
    let door = world.find_kind(kinds::STUCK_DOOR).unwrap();
    assert_eq!(world.entity(door).hatch(), Some(Hatch::Open));

    let text = say(&mut world, "enter hallway");
    assert!(text.starts_with("You go through the hallway door. You are in the hallway."), "{text}");
}

#[test]
fn shared_doors_lead_back() {
    let mut world = starship().unwrap();
    walk(&mut world, &["hit hallway door", "enter hallway door", "enter workshop"]);
    assert_eq!(world.current_environment().name, "workshop");
    say(&mut world, "enter hallway door");
    assert_eq!(world.current_environment().name, "hallway");
    say(&mut world, "enter cockpit");
    assert_eq!(world.current_environment().name, "cockpit");
}

#[test]
fn the_glass_case_breaks_once() {
    let mut world = starship().unwrap();
    assert_eq!(
        say(&mut world, "hit glass case"),
        "You smash the glass case. Out falls: fire axe."
    );
    assert_eq!(say(&mut world, "hit case"), "The glass case is already broken.");
    let case = world.find_kind(kinds::GLASS_CASE).unwrap();
    assert_eq!(world.entity(case).integrity(), Some(Integrity::Broken));
}

#[test]
fn the_wheel_locks_the_heavy_door() {
    let mut world = starship().unwrap();
    assert_eq!(
        say(&mut world, "open heavy door"),
        "The heavy door won't budge. Something is holding it shut."
    );
    assert_eq!(
        say(&mut world, "turn wheel"),
        "You turn the wheel to the left. Something inside the heavy door clicks."
    );
    let ending = play(&mut world, "open heavy door");
    assert!(ending.is_end());
}

#[test]
fn the_engine_needs_fuel() {
    let mut world = starship().unwrap();
    walk(
        &mut world,
        &["hit hallway door", "enter hallway door", "enter workshop", "pickup repair kit"],
    );
    walk(&mut world, &["enter hallway", "enter engine room"]);
    assert_eq!(say(&mut world, "inspect engine"), "The engine.");
    assert_eq!(
        say(&mut world, "fill engine with repair kit"),
        "You can't fill the engine with that."
    );

    walk(&mut world, &["enter hallway", "enter workshop", "pickup fuel can"]);
    walk(&mut world, &["enter hallway", "enter engine room"]);
    assert_eq!(
        say(&mut world, "empty fuel can into engine"),
        "You pour the fuel into the engine until it is filled to the brim."
    );
    assert_eq!(say(&mut world, "fill engine with can"), "The engine is already full.");
    let engine = world.find_kind(kinds::ENGINE).unwrap();
    assert_eq!(world.entity(engine).device(), Some(DeviceState::Fueled));
}

#[test]
fn a_broken_engine_stays_broken() {
    let mut world = starship().unwrap();
    walk(
        &mut world,
        &["hit hallway door", "enter hallway door", "enter engine room", "hit engine"],
    );
    assert_eq!(say(&mut world, "hit engine"), "The engine is already broken.");
    walk(&mut world, &["enter hallway", "enter cockpit"]);
    assert_eq!(
        say(&mut world, "use control panel"),
        "The control panel flashes red: ENGINE FAILURE."
    );
}

#[test]
fn the_control_panel_reports_problems_in_order() {
    let mut world = starship().unwrap();
    assert_eq!(say(&mut world, "use panel"), "The control panel flashes red: NO FUEL.");

    walk(
        &mut world,
        &[
            "hit hallway door",
            "enter hallway door",
            "enter workshop",
            "pickup fuel can",
            "enter hallway",
            "enter engine room",
            "empty fuel can into engine",
            "enter hallway",
            "enter cockpit",
        ],
    );
    assert_eq!(
        say(&mut world, "use panel"),
        "You run the start sequence. Somewhere behind you the engine roars to life."
    );
    assert_eq!(say(&mut world, "use panel"), "The control panel flashes red: HULL BREACH.");
}

#[test]
fn the_urinal_helps_only_when_needed() {
    let mut world = starship().unwrap();
    walk(&mut world, &["hit hallway door", "enter hallway door", "enter bathroom"]);
    assert!(world.player().has_effect(kinds::FULL_BLADDER));
    assert_eq!(
        say(&mut world, "use urinal"),
        "You relieve yourself. You lose the following effects: FULL BLADDER."
    );
    assert_eq!(say(&mut world, "use urinal"), "You don't need to go right now.");
}

#[test]
fn use_fuel_can_on_engine() {
    let mut world = starship().unwrap();
    walk(
        &mut world,
        &["hit hallway door", "enter hallway door", "enter workshop", "pickup can"],
    );
    assert_eq!(say(&mut world, "use fuel can"), "You need to use the fuel can on something.");
    walk(&mut world, &["enter hallway", "enter engine room"]);
    assert_eq!(
        say(&mut world, "use fuel can on engine"),
        "You pour the fuel into the engine until it is filled to the brim."
    );
}
