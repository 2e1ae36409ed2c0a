//! Town service tests.

use castaway_content::town_square;
use castaway_world::{Contents, FillLevel, World};

use crate::say;

fn holding_bucket() -> World {
    let mut world = town_square().unwrap();
    assert_eq!(say(&mut world, "pickup bucket"), "You pick up 'bucket'.");
    world
}

#[test]
fn filling_the_bucket() {
    let mut world = holding_bucket();
    assert_eq!(say(&mut world, "fill bucket with river"), "You fill the bucket with water.");
    let bucket = world.find_key("bucket").unwrap();
    assert_eq!(world.entity(bucket).vessel(), Some(Contents::Water));
    assert_eq!(say(&mut world, "inspect bucket"), "A bucket. It is full of water.");
}

#[test]
fn the_river_fills_only_buckets() {
    let mut world = holding_bucket();
    assert_eq!(say(&mut world, "fill river with bucket"), "You fill the bucket with water.");
    assert_eq!(
        say(&mut world, "fill river with well"),
        "You can't fill 'well' in the river."
    );
}

#[test]
fn three_pours_fill_the_well() {
    let mut world = holding_bucket();
    let well = world.find_key("well").unwrap();
    let mut replies = Vec::new();
    for _ in 0..4 {
        say(&mut world, "fill bucket with river");
        replies.push(say(&mut world, "fill well with bucket"));
    }
    assert_eq!(
        replies,
        vec![
            "You fill the well with water.",
            "You fill the well with water.",
            "The well is full of water.",
            "The well is already full.",
        ]
    );
    assert_eq!(world.entity(well).fill_level(), Some(FillLevel::Full));
}
