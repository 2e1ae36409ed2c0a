//! Phrase resolution tests.
//!
//! Resolution is by registry key, display name, or alias, ignoring case,
//! with items searched before objects.

use castaway_content::{starship, town_square};
use castaway_engine::kinds;
use castaway_parser::{
    CommandObjectResolver, ItemResolver, ObjectResolver, Query, Resolver, Target,
};
use castaway_world::EntityTypes;

#[test]
fn key_name_and_alias_find_the_same_well() {
    let world = town_square().unwrap();
    let objects = ObjectResolver::new(&world);
    let well = objects.resolve(Query::Kind(kinds::WELL)).unwrap();
    for phrase in ["well", "WELL", "water well", "Water Well"] {
        assert_eq!(objects.resolve(phrase.into()), Some(well), "{phrase}");
    }
}

#[test]
fn registry_keys_resolve() {
    let world = starship().unwrap();
    let objects = ObjectResolver::new(&world);
    let by_key = objects.resolve("heavy_door".into());
    assert!(by_key.is_some());
    assert_eq!(objects.resolve("heavy door".into()), by_key);
    assert_eq!(objects.resolve("void".into()), by_key);
}

#[test]
fn items_and_objects_live_apart() {
    let world = starship().unwrap();
    assert!(ObjectResolver::new(&world).resolve("fuel can".into()).is_none());
    assert!(ItemResolver::new(&world).resolve("fuel can".into()).is_some());
    assert!(ItemResolver::new(&world).resolve("engine".into()).is_none());
}

#[test]
fn family_queries() {
    let world = starship().unwrap();
    let axe = ItemResolver::new(&world)
        .resolve(Query::Family(EntityTypes::EQUIPABLE))
        .unwrap();
    assert_eq!(world.entity(axe).name, "fire axe");
}

#[test]
fn command_resolver_knows_the_player() {
    let world = town_square().unwrap();
    let resolver = CommandObjectResolver::new(&world);
    assert_eq!(resolver.resolve_target("self"), Some(Target::Player));
    assert_eq!(resolver.resolve_target("PLAYER"), Some(Target::Player));
    assert!(matches!(resolver.resolve_target("bucket"), Some(Target::Entity(_))));
    assert_eq!(resolver.resolve_target("lamp"), None);
}
