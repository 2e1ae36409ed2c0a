//! Game endings.

use castaway_runtime::{Turn, WorldChoice};

use crate::{play, session};

const TO_THE_ENGINE: &[&str] = &[
    "hit glass case",
    "hit hallway door",
    "enter hallway door",
    "enter workshop",
    "pickup fuel can",
    "pickup repair kit",
    "enter hallway",
    "enter engine room",
    "empty fuel can into engine",
    "enter hallway",
];

#[test]
fn flying_home() {
    let mut s = session(WorldChoice::Ship);
    play(&mut s, TO_THE_ENGINE);
    let turns = play(
        &mut s,
        &[
            "enter armory",
            "pickup suit",
            "equip space suit",
            "enter hallway",
            "enter cockpit",
            "use control panel",
            "turn wheel",
            "open heavy door",
            "enter heavy door",
            "inspect hull",
            "repair hull with repair kit",
            "inspect damage",
            "enter void",
        ],
    );
    assert!(turns.iter().all(|t| matches!(t, Turn::Narrate(_))), "{turns:?}");
    assert_eq!(s.world().current_environment().name, "cockpit");

    let Turn::GameOver(text) = s.execute("use control panel").unwrap() else {
        panic!("expected an ending");
    };
    assert!(text.ends_with("You made it."));
    assert!(s.is_over());
    assert!(s.execute("inspect").is_err());
}

#[test]
fn opening_the_airlock_without_a_suit() {
    let mut s = session(WorldChoice::Ship);
    let turns = play(&mut s, &["turn wheel", "open heavy door"]);
    assert!(matches!(turns[1], Turn::GameOver(_)));
    assert!(s.is_over());
}

#[test]
fn stepping_out_after_taking_the_suit_off() {
    let mut s = session(WorldChoice::Ship);
    play(
        &mut s,
        &[
            "hit hallway door",
            "enter hallway door",
            "enter armory",
            "pickup space suit",
            "equip suit",
            "enter hallway",
            "enter cockpit",
            "turn wheel",
            "open heavy door",
            "unequip suit",
        ],
    );
    let turn = s.execute("enter heavy door").unwrap();
    let Turn::GameOver(text) = turn else {
        panic!("expected an ending, got {turn:?}");
    };
    assert!(text.starts_with("You step out into the void"));
}

#[test]
fn the_hull_must_be_patched_first() {
    let mut s = session(WorldChoice::Ship);
    play(&mut s, TO_THE_ENGINE);
    let turns = play(&mut s, &["enter cockpit", "use panel", "use panel"]);
    assert_eq!(
        turns[2],
        Turn::Narrate("The control panel flashes red: HULL BREACH.".to_string())
    );
    assert!(!s.is_over());
}

#[test]
fn quitting_is_final() {
    let mut s = session(WorldChoice::Town);
    assert_eq!(play(&mut s, &["quit"]), vec![Turn::Quit]);
    assert!(s.is_over());
}
