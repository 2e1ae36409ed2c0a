//! Validation tests.
//!
//! Checks run in a fixed order, and the first failure decides the message.

use castaway_content::{starship, town_square};
use castaway_foundation::{Action, ErrorKind};
use castaway_parser::{CommandParser, Target};
use castaway_world::World;

fn parse_err(world: &World, input: &str) -> String {
    CommandParser::default()
        .parse(input, world)
        .unwrap_err()
        .to_string()
}

fn holding_bucket() -> World {
    let mut world = town_square().unwrap();
    let bucket = world.find_key("bucket").unwrap();
    assert!(world.pick_up(bucket));
    world
}

#[test]
fn error_messages() {
    let town = town_square().unwrap();
    let held = holding_bucket();
    let cases: &[(&World, &str, &str)] = &[
        (&town, "foo", "Action not recognized: FOO"),
        (&town, "dance with river", "Action not recognized: DANCE"),
        (&town, "pickup", "Action requires object: PICKUP"),
        (&town, "pickup lamp", "Object not found: LAMP"),
        (&town, "enter river", "Cannot perform: ENTER on RIVER"),
        (&held, "fill bucket", "Action requires preposition: FILL"),
        (&held, "fill bucket on river", "Cannot perform: FILL with ON"),
        (&held, "fill bucket with", "Missing object after preposition: WITH"),
        (&held, "fill bucket with lake", "Object not found: LAKE"),
        (&held, "empty well into bucket", "Invalid usage for action EMPTY"),
    ];
    for (world, input, expected) in cases {
        assert_eq!(parse_err(world, input), *expected, "{input}");
    }
}

#[test]
fn object_check_comes_before_preposition_check() {
    let world = town_square().unwrap();
    assert_eq!(parse_err(&world, "fill lamp on river"), "Object not found: LAMP");
}

#[test]
fn objects_in_other_rooms_are_not_found() {
    let world = starship().unwrap();
    assert_eq!(parse_err(&world, "inspect engine"), "Object not found: ENGINE");
    assert_eq!(parse_err(&world, "pickup fuel can"), "Object not found: FUEL CAN");
}

#[test]
fn valid_commands_resolve() {
    let world = holding_bucket();
    let cmd = CommandParser::default()
        .parse("EMPTY bucket INTO water well", &world)
        .unwrap()
        .unwrap();
    assert_eq!(cmd.action, Some(Action::Empty));
    assert_eq!(cmd.object, world.find_key("bucket").map(Target::Entity));
    assert_eq!(cmd.preposition_object, world.find_key("well").map(Target::Entity));
}

#[test]
fn empty_input_is_ok_and_empty() {
    let world = town_square().unwrap();
    assert!(CommandParser::default().parse("", &world).unwrap().is_none());
}

#[test]
fn errors_name_their_stage() {
    let world = town_square().unwrap();
    let err = CommandParser::default().parse("fill", &world).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ObjectRequired(_)));
    assert_eq!(err.context.and_then(|c| c.stage), Some("object"));
}

#[test]
fn validating_twice_gives_the_same_answer() {
    let world = holding_bucket();
    let parser = CommandParser::default();
    for input in ["fill bucket with river", "pickup lamp", "", "help well", "foo"] {
        let first = parser.parse(input, &world).map_err(|e| e.to_string());
        let second = parser.parse(input, &world).map_err(|e| e.to_string());
        assert_eq!(first, second, "{input}");
    }
}
