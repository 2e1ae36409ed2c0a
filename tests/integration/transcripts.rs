//! Transcript properties.

use castaway_runtime::{Turn, WorldChoice};
use proptest::prelude::*;

use crate::{play, session};

const TOWN_SCRIPT: &[&str] = &[
    "inspect",
    "pickup bucket",
    "fill bucket with river",
    "empty bucket into well",
    "fill bucket with river",
    "fill well with bucket",
    "fill bucket with river",
    "fill well with bucket",
    "equip bucket",
    "enter well",
    "equip sword",
    "inspect self",
];

#[test]
fn town_transcript() {
    let mut s = session(WorldChoice::Town);
    let turns = play(&mut s, TOWN_SCRIPT);
    let text: Vec<String> = turns.iter().map(ToString::to_string).collect();
    assert_eq!(text[1], "You pick up 'bucket'.");
    assert_eq!(text[7], "The well is full of water.");
    assert!(text[9].ends_with("holding a sword."));
    assert!(text[10].starts_with("Equipped: SWORD."));
    assert_eq!(
        text[11],
        "You are carrying: bucket, sword. You have equipped: bucket, sword. \
         You are affected by: WATER BREATHING."
    );
}

#[test]
fn same_lines_same_story() {
    let first = play(&mut session(WorldChoice::Town), TOWN_SCRIPT);
    let second = play(&mut session(WorldChoice::Town), TOWN_SCRIPT);
    assert_eq!(first, second);
}

#[test]
fn help_is_always_available() {
    for world in [WorldChoice::Ship, WorldChoice::Town] {
        let mut s = session(world);
        let Turn::Help(text) = s.execute("HELP").unwrap() else {
            panic!("expected help");
        };
        assert!(text.contains("REPAIR <object|item> WITH <object|item>"));
    }
}

fn line() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "inspect", "pickup", "fill", "empty", "equip", "use", "hit", "enter", "bucket",
        "well", "river", "with", "into", "on", "self", "lamp", "",
    ]);
    prop::collection::vec(words, 0..5).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn rejected_lines_change_nothing(lines in prop::collection::vec(line(), 1..12)) {
        let mut s = session(WorldChoice::Town);
        for line in &lines {
            let before = (s.look(), s.world().describe_player());
            if s.execute(line).is_err() {
                prop_assert_eq!(before, (s.look(), s.world().describe_player()));
            }
        }
    }
}
