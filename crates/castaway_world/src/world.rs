//! The world registry.
//!
//! `World` owns every entity, environment, and effect of a run together
//! with the player. Entities are registered once by a [`WorldBuilder`] and
//! never removed; what changes during play is where they are and what
//! state they are in.
//!
//! Every move goes through a method here so that an item always has
//! exactly one owner: an environment, a container, or the player.

use castaway_foundation::{Effect, EntityId, EnvironmentId, Error, ErrorKind, Result};
use tracing::{debug, info};

use crate::entity::Entity;
use crate::environment::Environment;
use crate::kind::EntityKind;
use crate::player::Player;

/// Registry of everything in a run.
#[derive(Clone, Debug)]
pub struct World {
    entities: Vec<Entity>,
    /// Item handles in registration order.
    items: Vec<EntityId>,
    /// Object handles in registration order.
    objects: Vec<EntityId>,
    environments: Vec<Environment>,
    effects: Vec<Effect>,
    player: Player,
}

impl World {
    /// Returns the entity behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this world.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }

    /// Returns the entity behind a handle, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this world.
    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.index()]
    }

    /// Items in registration order.
    pub fn items(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.items.iter().map(|&id| (id, self.entity(id)))
    }

    /// Objects in registration order.
    pub fn objects(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.objects.iter().map(|&id| (id, self.entity(id)))
    }

    /// Number of registered entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// First entity of exactly this kind, items before objects.
    #[must_use]
    pub fn find_kind(&self, kind: EntityKind) -> Option<EntityId> {
        self.items()
            .chain(self.objects())
            .find(|(_, e)| e.kind == kind)
            .map(|(id, _)| id)
    }

    /// Entity registered under `key`.
    #[must_use]
    pub fn find_key(&self, key: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .position(|e| e.key == key)
            .and_then(|i| u32::try_from(i).ok())
            .map(EntityId::new)
    }

    /// Registered effect by name.
    #[must_use]
    pub fn effect(&self, name: &str) -> Option<&Effect> {
        self.effects.iter().find(|e| e.name == name)
    }

    /// Returns an environment.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this world.
    #[must_use]
    pub fn environment(&self, id: EnvironmentId) -> &Environment {
        &self.environments[id.index()]
    }

    /// Environment registered under `key`.
    #[must_use]
    pub fn find_environment(&self, key: &str) -> Option<EnvironmentId> {
        self.environments.iter().find(|e| e.key == key).map(|e| e.id)
    }

    /// The environment the player is in.
    #[must_use]
    pub fn current_environment(&self) -> &Environment {
        self.environment(self.player.environment)
    }

    fn current_environment_mut(&mut self) -> &mut Environment {
        &mut self.environments[self.player.environment.index()]
    }

    /// The player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The player, mutably.
    pub const fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Returns true if the entity is in the player's environment or inventory.
    ///
    /// Items inside containers are out of reach until taken out.
    #[must_use]
    pub fn is_reachable(&self, id: EntityId) -> bool {
        self.current_environment().holds(id) || self.player.holds(id)
    }

    /// Moves a loose item from the current environment into the inventory.
    ///
    /// Returns false, changing nothing, if the item is not lying here.
    pub fn pick_up(&mut self, id: EntityId) -> bool {
        if !self.current_environment_mut().take_item(id) {
            return false;
        }
        self.player.inventory.push(id);
        debug!(item = %id, "picked up");
        true
    }

    /// Moves an item out of a container into the inventory.
    ///
    /// Returns false, changing nothing, if the container does not hold it.
    pub fn take_from_container(&mut self, container: EntityId, item: EntityId) -> bool {
        let Some(contents) = self.entity_mut(container).contents_mut() else {
            return false;
        };
        let Some(pos) = contents.iter().position(|&i| i == item) else {
            return false;
        };
        contents.remove(pos);
        self.player.inventory.push(item);
        debug!(%container, %item, "taken from container");
        true
    }

    /// Empties a container onto the floor of the current environment.
    ///
    /// Returns the released items.
    pub fn release_contents(&mut self, container: EntityId) -> Vec<EntityId> {
        let released = self
            .entity_mut(container)
            .contents_mut()
            .map(std::mem::take)
            .unwrap_or_default();
        self.current_environment_mut()
            .items
            .extend(released.iter().copied());
        debug!(%container, count = released.len(), "released contents");
        released
    }

    /// Moves the player to another environment.
    pub fn move_player(&mut self, to: EnvironmentId) {
        info!(from = %self.player.environment, %to, "player moved");
        self.player.environment = to;
    }

    /// Equips a carried item and applies its effects.
    ///
    /// Returns the narrative line; nothing changes unless it starts with
    /// `"Equipped:"`.
    pub fn equip(&mut self, id: EntityId) -> String {
        let entity = &self.entities[id.index()];
        let Some(info) = entity.equipable_info() else {
            return "You can't equip that.".to_string();
        };
        if !self.player.holds(id) {
            return "You don't have that.".to_string();
        }
        let name = entity.name.to_uppercase();
        if self.player.is_wearing(id) {
            return format!("Already equipped: {name}.");
        }
        let slot_taken = self.player.equipped.iter().any(|&worn| {
            self.entities[worn.index()]
                .equipable_info()
                .is_some_and(|w| w.slot == info.slot)
        });
        if slot_taken {
            return format!("You already have something equipped: {}", info.slot);
        }

        self.player.equipped.push(id);
        let gained = self.player.add_effects(&info.effects);
        debug!(item = %id, slot = %info.slot, "equipped");
        join_sentences(format!("Equipped: {name}."), &gained)
    }

    /// Unequips a worn item and removes its effects.
    pub fn unequip(&mut self, id: EntityId) -> String {
        let entity = &self.entities[id.index()];
        let name = entity.name.to_uppercase();
        let Some(pos) = self.player.equipped.iter().position(|&worn| worn == id) else {
            return format!("You don't have that equipped: {name}");
        };
        self.player.equipped.remove(pos);
        let lost = entity
            .equipable_info()
            .map(|info| self.player.remove_effects(&info.effects))
            .unwrap_or_default();
        debug!(item = %id, "unequipped");
        join_sentences(format!("Unequipped: {name}."), &lost)
    }

    /// Describes an environment: its name, visible objects, and loose items.
    #[must_use]
    pub fn describe_environment(&self, id: EnvironmentId) -> String {
        let env = self.environment(id);
        let mut text = format!("You are in the {}. ", env.name);

        let objects = self.names(env.objects.iter().filter(|&&o| !self.entity(o).hidden));
        if !objects.is_empty() {
            text.push_str(&format!("You see these objects: {}. ", objects.join(", ")));
        }
        let items = self.names(env.items.iter());
        if !items.is_empty() {
            text.push_str(&format!("You see these items: {}. ", items.join(", ")));
        }
        text.trim_end().to_string()
    }

    /// Describes the player's inventory, equipment, and effects.
    #[must_use]
    pub fn describe_player(&self) -> String {
        let carried = self.names(self.player.inventory.iter());
        let mut text = if carried.is_empty() {
            "You are not carrying anything.".to_string()
        } else {
            format!("You are carrying: {}.", carried.join(", "))
        };
        let worn = self.names(self.player.equipped.iter());
        if !worn.is_empty() {
            text.push_str(&format!(" You have equipped: {}.", worn.join(", ")));
        }
        if !self.player.effects.is_empty() {
            let effects: Vec<String> = self.player.effects.iter().map(ToString::to_string).collect();
            text.push_str(&format!(" You are affected by: {}.", effects.join(", ")));
        }
        text
    }

    fn names<'a>(&self, ids: impl Iterator<Item = &'a EntityId>) -> Vec<&str> {
        ids.map(|&id| self.entity(id).name.as_str()).collect()
    }
}

fn join_sentences(mut head: String, tail: &str) -> String {
    if !tail.is_empty() {
        head.push(' ');
        head.push_str(tail);
    }
    head
}

/// Assembles a [`World`].
///
/// Environments are registered first so passages can name them; entities
/// are then registered and placed.
#[derive(Debug, Default)]
pub struct WorldBuilder {
    entities: Vec<Entity>,
    items: Vec<EntityId>,
    objects: Vec<EntityId>,
    environments: Vec<Environment>,
    effects: Vec<Effect>,
    inventory: Vec<EntityId>,
    player_effects: Vec<Effect>,
}

impl WorldBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an effect and returns it for use in equipable items.
    pub fn effect(&mut self, name: &str, description: &str) -> Effect {
        let effect = Effect::new(name, description);
        if !self.effects.contains(&effect) {
            self.effects.push(effect.clone());
        }
        effect
    }

    /// Registers an environment.
    pub fn environment(&mut self, key: &str, name: &str) -> EnvironmentId {
        let id = EnvironmentId::new(to_u32(self.environments.len()));
        self.environments.push(Environment::new(id, key, name));
        id
    }

    /// Registers an entity without placing it anywhere.
    ///
    /// Use this for items that start inside a container.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId::new(to_u32(self.entities.len()));
        if entity.is_item() {
            self.items.push(id);
        } else {
            self.objects.push(id);
        }
        self.entities.push(entity);
        id
    }

    /// Registers an entity and places it in an environment.
    ///
    /// # Panics
    ///
    /// Panics if `env` was not registered with this builder.
    pub fn add_to(&mut self, env: EnvironmentId, entity: Entity) -> EntityId {
        let is_item = entity.is_item();
        let id = self.add(entity);
        let env = &mut self.environments[env.index()];
        if is_item {
            env.items.push(id);
        } else {
            env.objects.push(id);
        }
        id
    }

    /// Places an already registered object in another environment as well.
    ///
    /// A door between two rooms is one object standing in both.
    ///
    /// # Panics
    ///
    /// Panics if `env` was not registered with this builder.
    pub fn place(&mut self, env: EnvironmentId, object: EntityId) {
        let env = &mut self.environments[env.index()];
        if !env.objects.contains(&object) {
            env.objects.push(object);
        }
    }

    /// Registers an item and puts it in the player's starting inventory.
    pub fn give(&mut self, entity: Entity) -> EntityId {
        let id = self.add(entity);
        self.inventory.push(id);
        id
    }

    /// Registers an effect the player starts with.
    pub fn afflict(&mut self, name: &str, description: &str) -> Effect {
        let effect = self.effect(name, description);
        if !self.player_effects.contains(&effect) {
            self.player_effects.push(effect.clone());
        }
        effect
    }

    /// Finishes the world with the player standing in `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` was not registered, or if two entities
    /// share a registry key.
    pub fn build(self, start: EnvironmentId) -> Result<World> {
        if start.index() >= self.environments.len() {
            return Err(Error::new(ErrorKind::Internal(format!(
                "start environment {start} is not registered"
            ))));
        }
        for (i, entity) in self.entities.iter().enumerate() {
            if self.entities[..i].iter().any(|e| e.key == entity.key) {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "duplicate entity key {:?}",
                    entity.key
                ))));
            }
        }

        let mut player = Player::new(start);
        player.inventory = self.inventory;
        player.effects = self.player_effects;

        debug!(
            entities = self.entities.len(),
            environments = self.environments.len(),
            "world built"
        );
        Ok(World {
            entities: self.entities,
            items: self.items,
            objects: self.objects,
            environments: self.environments,
            effects: self.effects,
            player,
        })
    }
}

// Registries are tiny; exceeding u32 is a construction bug.
#[allow(clippy::cast_possible_truncation)]
const fn to_u32(len: usize) -> u32 {
    len as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use castaway_foundation::{Action, EquipSlot};

    const WELL: EntityKind = EntityKind::new("well");
    const BUCKET: EntityKind = EntityKind::new("bucket");
    const SWORD: EntityKind = EntityKind::new("sword");
    const HELMET: EntityKind = EntityKind::new("helmet");

    struct Fixture {
        world: World,
        well: EntityId,
        bucket: EntityId,
        sword: EntityId,
        helmet: EntityId,
    }

    fn setup_world() -> Fixture {
        let mut b = WorldBuilder::new();
        let breathing = b.effect("water breathing", "You can breathe under water.");
        let square = b.environment("town_square", "town square");
        let sword = b.add(Entity::item("sword", SWORD, "sword").equipable(EquipSlot::Hand, vec![]));
        let well = b.add_to(
            square,
            Entity::object("well", WELL, "well")
                .allowing(&[Action::Fill, Action::Enter])
                .containing(vec![sword]),
        );
        let bucket = b.add_to(
            square,
            Entity::item("bucket", BUCKET, "bucket")
                .allowing(&[Action::Pickup, Action::Equip, Action::Unequip])
                .equipable(EquipSlot::Head, vec![breathing]),
        );
        let helmet = b.give(Entity::item("helmet", HELMET, "helmet").equipable(EquipSlot::Head, vec![]));
        Fixture {
            world: b.build(square).unwrap(),
            well,
            bucket,
            sword,
            helmet,
        }
    }

    #[test]
    fn registries_keep_registration_order() {
        let f = setup_world();
        let items: Vec<EntityId> = f.world.items().map(|(id, _)| id).collect();
        let objects: Vec<EntityId> = f.world.objects().map(|(id, _)| id).collect();
        assert_eq!(items, vec![f.sword, f.bucket, f.helmet]);
        assert_eq!(objects, vec![f.well]);
        assert_eq!(f.world.entity_count(), 4);
        assert_eq!(f.world.find_kind(BUCKET), Some(f.bucket));
        assert_eq!(f.world.find_key("well"), Some(f.well));
    }

    #[test]
    fn pick_up_moves_exactly_once() {
        let mut f = setup_world();
        assert!(f.world.is_reachable(f.bucket));
        assert!(f.world.pick_up(f.bucket));
        assert!(f.world.player().holds(f.bucket));
        assert!(!f.world.current_environment().holds(f.bucket));
        assert!(!f.world.pick_up(f.bucket));
        assert_eq!(
            f.world.player().inventory.iter().filter(|&&i| i == f.bucket).count(),
            1
        );
    }

    #[test]
    fn contained_items_are_out_of_reach() {
        let mut f = setup_world();
        assert!(!f.world.is_reachable(f.sword));
        assert!(f.world.take_from_container(f.well, f.sword));
        assert!(f.world.is_reachable(f.sword));
        assert_eq!(f.world.entity(f.well).contents(), Some(&[][..]));
        assert!(!f.world.take_from_container(f.well, f.sword));
    }

    #[test]
    fn release_contents_drops_items_here() {
        let mut f = setup_world();
        let released = f.world.release_contents(f.well);
        assert_eq!(released, vec![f.sword]);
        assert!(f.world.current_environment().items.contains(&f.sword));
        assert!(f.world.release_contents(f.well).is_empty());
    }

    #[test]
    fn equip_applies_effects() {
        let mut f = setup_world();
        f.world.pick_up(f.bucket);
        assert_eq!(
            f.world.equip(f.bucket),
            "Equipped: BUCKET. You gain the following effects: WATER BREATHING."
        );
        assert!(f.world.player().has_effect("water breathing"));
        assert_eq!(f.world.equip(f.bucket), "Already equipped: BUCKET.");
    }

    #[test]
    fn equip_rejects_taken_slot() {
        let mut f = setup_world();
        f.world.pick_up(f.bucket);
        assert_eq!(f.world.equip(f.helmet), "Equipped: HELMET.");
        assert_eq!(
            f.world.equip(f.bucket),
            "You already have something equipped: HEAD"
        );
        assert_eq!(f.world.player().equipped, vec![f.helmet]);
    }

    #[test]
    fn equip_requires_possession() {
        let mut f = setup_world();
        assert_eq!(f.world.equip(f.bucket), "You don't have that.");
        assert!(f.world.player().equipped.is_empty());
    }

    #[test]
    fn unequip_removes_effects() {
        let mut f = setup_world();
        f.world.pick_up(f.bucket);
        f.world.equip(f.bucket);
        assert_eq!(
            f.world.unequip(f.bucket),
            "Unequipped: BUCKET. You lose the following effects: WATER BREATHING."
        );
        assert!(f.world.player().effects.is_empty());
        assert_eq!(
            f.world.unequip(f.bucket),
            "You don't have that equipped: BUCKET"
        );
        // Unequipping keeps the item in the inventory.
        assert!(f.world.player().holds(f.bucket));
    }

    #[test]
    fn environment_description() {
        let mut f = setup_world();
        let here = f.world.player().environment;
        assert_eq!(
            f.world.describe_environment(here),
            "You are in the town square. You see these objects: well. You see these items: bucket."
        );
        f.world.pick_up(f.bucket);
        assert_eq!(
            f.world.describe_environment(here),
            "You are in the town square. You see these objects: well."
        );
    }

    #[test]
    fn hidden_objects_are_not_described() {
        let mut b = WorldBuilder::new();
        let room = b.environment("cockpit", "cockpit");
        b.add_to(room, Entity::object("panel", EntityKind::new("panel"), "control panel"));
        b.add_to(room, Entity::object("button", EntityKind::new("button"), "red button").hidden());
        let world = b.build(room).unwrap();
        assert_eq!(
            world.describe_environment(room),
            "You are in the cockpit. You see these objects: control panel."
        );
    }

    #[test]
    fn player_description() {
        let mut f = setup_world();
        assert_eq!(f.world.describe_player(), "You are carrying: helmet.");
        f.world.pick_up(f.bucket);
        f.world.equip(f.bucket);
        assert_eq!(
            f.world.describe_player(),
            "You are carrying: helmet, bucket. You have equipped: bucket. You are affected by: WATER BREATHING."
        );
    }

    #[test]
    fn build_rejects_unknown_start() {
        let b = WorldBuilder::new();
        assert!(b.build(EnvironmentId::new(0)).is_err());
    }

    #[test]
    fn build_rejects_duplicate_keys() {
        let mut b = WorldBuilder::new();
        let room = b.environment("room", "room");
        b.add_to(room, Entity::object("door", EntityKind::new("door"), "door"));
        b.add_to(room, Entity::object("door", EntityKind::new("door"), "other door"));
        assert!(b.build(room).is_err());
    }

    #[test]
    fn shared_objects_stand_in_both_rooms() {
        let mut b = WorldBuilder::new();
        let a = b.environment("a", "first room");
        let c = b.environment("b", "second room");
        let door = b.add_to(a, Entity::object("door", EntityKind::new("door"), "door"));
        b.place(c, door);
        b.place(c, door);
        let mut world = b.build(a).unwrap();
        assert!(world.is_reachable(door));
        world.move_player(c);
        assert!(world.is_reachable(door));
        assert_eq!(world.current_environment().objects, vec![door]);
    }

    #[test]
    fn moving_the_player() {
        let mut b = WorldBuilder::new();
        let a = b.environment("a", "first room");
        let c = b.environment("b", "second room");
        let mut world = b.build(a).unwrap();
        world.move_player(c);
        assert_eq!(world.current_environment().name, "second room");
        assert_eq!(world.find_environment("a"), Some(a));
    }
}
