//! Entity records.
//!
//! An [`Entity`] is a tagged record: the fields every interactable thing has
//! (name, aliases, allowed actions, optional state) plus a [`Family`] that
//! carries the capabilities specific to objects or items. There is no type
//! hierarchy; "is this a well" is answered by the exact [`EntityKind`] tag
//! and "is this an item" by [`Entity::types`].

use std::collections::BTreeSet;

use castaway_foundation::{Action, Effect, EntityId, EnvironmentId, EquipSlot};

use crate::kind::{EntityKind, EntityTypes};
use crate::state::{Contents, DeviceState, FillLevel, Hatch, Integrity, State};

/// Where an object leads when entered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Passage {
    /// Destination when entered from anywhere but `to`.
    pub to: EnvironmentId,
    /// Destination when entered from `to`, for two-way passages.
    pub back: Option<EnvironmentId>,
}

impl Passage {
    /// Returns the environment this passage leads to from `here`.
    #[must_use]
    pub fn destination(&self, here: EnvironmentId) -> Option<EnvironmentId> {
        if here == self.to { self.back } else { Some(self.to) }
    }
}

/// Slot and effects of a wearable item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equipable {
    /// Body slot the item occupies.
    pub slot: EquipSlot,
    /// Effects granted while equipped.
    pub effects: Vec<Effect>,
}

/// Family-specific capabilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Family {
    /// A fixed object.
    Object {
        /// Items held inside, for containers.
        contents: Option<Vec<EntityId>>,
        /// Where entering the object takes the player.
        passage: Option<Passage>,
    },
    /// A portable item.
    Item {
        /// Present for wearable items.
        equipable: Option<Equipable>,
    },
}

/// An object or item registered in the world.
#[derive(Clone, Debug)]
pub struct Entity {
    /// Registry key, unique across the world.
    pub key: String,
    /// Exact type tag used for service lookup.
    pub kind: EntityKind,
    /// Display name.
    pub name: String,
    /// Base description.
    pub description: String,
    /// Additional names, in registration order without duplicates.
    pub aliases: Vec<String>,
    /// The actions the entity can be the object of.
    pub allowed_actions: BTreeSet<Action>,
    /// Current state, for stateful entities.
    pub state: Option<State>,
    /// Hidden objects are reachable but left out of environment descriptions.
    pub hidden: bool,
    /// Object or item capabilities.
    pub family: Family,
}

impl Entity {
    fn new(key: &str, kind: EntityKind, name: &str, family: Family) -> Self {
        Self {
            key: key.to_string(),
            kind,
            name: name.to_string(),
            description: String::new(),
            aliases: Vec::new(),
            allowed_actions: BTreeSet::new(),
            state: None,
            hidden: false,
            family,
        }
    }

    /// Creates a fixed object.
    #[must_use]
    pub fn object(key: &str, kind: EntityKind, name: &str) -> Self {
        Self::new(
            key,
            kind,
            name,
            Family::Object {
                contents: None,
                passage: None,
            },
        )
    }

    /// Creates a portable item.
    #[must_use]
    pub fn item(key: &str, kind: EntityKind, name: &str) -> Self {
        Self::new(key, kind, name, Family::Item { equipable: None })
    }

    /// Sets the description.
    #[must_use]
    pub fn described(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Adds aliases, skipping any already present.
    #[must_use]
    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        for alias in aliases {
            if !self.aliases.iter().any(|a| a == alias) {
                self.aliases.push((*alias).to_string());
            }
        }
        self
    }

    /// Adds allowed actions.
    #[must_use]
    pub fn allowing(mut self, actions: &[Action]) -> Self {
        self.allowed_actions.extend(actions.iter().copied());
        self
    }

    /// Sets the initial state.
    #[must_use]
    pub const fn with_state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    /// Marks the entity hidden.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Makes an object a container holding `items`. No effect on items.
    #[must_use]
    pub fn containing(mut self, items: Vec<EntityId>) -> Self {
        if let Family::Object { contents, .. } = &mut self.family {
            *contents = Some(items);
        }
        self
    }

    /// Makes an object a passage. No effect on items.
    #[must_use]
    pub fn leading_to(mut self, to: EnvironmentId, back: Option<EnvironmentId>) -> Self {
        if let Family::Object { passage, .. } = &mut self.family {
            *passage = Some(Passage { to, back });
        }
        self
    }

    /// Makes an item wearable. No effect on objects.
    #[must_use]
    pub fn equipable(mut self, slot: EquipSlot, effects: Vec<Effect>) -> Self {
        if let Family::Item { equipable } = &mut self.family {
            *equipable = Some(Equipable { slot, effects });
        }
        self
    }

    /// The families this entity is an instance of.
    #[must_use]
    pub const fn types(&self) -> EntityTypes {
        match &self.family {
            Family::Object { .. } => EntityTypes::OBJECT,
            Family::Item { equipable: None } => EntityTypes::ITEM,
            Family::Item { equipable: Some(_) } => {
                EntityTypes::ITEM.union(EntityTypes::EQUIPABLE)
            }
        }
    }

    /// Returns true for portable items.
    #[must_use]
    pub const fn is_item(&self) -> bool {
        matches!(self.family, Family::Item { .. })
    }

    /// Returns true if `phrase` names this entity by key, name, or alias, ignoring case.
    #[must_use]
    pub fn references(&self, phrase: &str) -> bool {
        self.key.eq_ignore_ascii_case(phrase)
            || self.name.eq_ignore_ascii_case(phrase)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(phrase))
    }

    /// Returns true if the entity can be the object of `action`.
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        self.allowed_actions.contains(&action)
    }

    /// Wear data, for equipable items.
    #[must_use]
    pub const fn equipable_info(&self) -> Option<&Equipable> {
        match &self.family {
            Family::Item { equipable } => equipable.as_ref(),
            Family::Object { .. } => None,
        }
    }

    /// Items held inside, for containers.
    #[must_use]
    pub fn contents(&self) -> Option<&[EntityId]> {
        match &self.family {
            Family::Object { contents, .. } => contents.as_deref(),
            Family::Item { .. } => None,
        }
    }

    /// Mutable access to held items, for containers.
    pub fn contents_mut(&mut self) -> Option<&mut Vec<EntityId>> {
        match &mut self.family {
            Family::Object { contents, .. } => contents.as_mut(),
            Family::Item { .. } => None,
        }
    }

    /// Passage data, for objects that lead somewhere.
    #[must_use]
    pub const fn passage(&self) -> Option<&Passage> {
        match &self.family {
            Family::Object { passage, .. } => passage.as_ref(),
            Family::Item { .. } => None,
        }
    }

    /// Fill level, if this is a fillable container.
    #[must_use]
    pub const fn fill_level(&self) -> Option<FillLevel> {
        match self.state {
            Some(State::Fill(level)) => Some(level),
            _ => None,
        }
    }

    /// Contents, if this is a vessel.
    #[must_use]
    pub const fn vessel(&self) -> Option<Contents> {
        match self.state {
            Some(State::Vessel(contents)) => Some(contents),
            _ => None,
        }
    }

    /// Position, if this opens and closes.
    #[must_use]
    pub const fn hatch(&self) -> Option<Hatch> {
        match self.state {
            Some(State::Hatch(hatch)) => Some(hatch),
            _ => None,
        }
    }

    /// Stage, if this is a device.
    #[must_use]
    pub const fn device(&self) -> Option<DeviceState> {
        match self.state {
            Some(State::Device(device)) => Some(device),
            _ => None,
        }
    }

    /// Integrity, if this can break.
    #[must_use]
    pub const fn integrity(&self) -> Option<Integrity> {
        match self.state {
            Some(State::Integrity(integrity)) => Some(integrity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUCKET: EntityKind = EntityKind::new("bucket");
    const WELL: EntityKind = EntityKind::new("well");

    #[test]
    fn references_match_key_name_and_alias() {
        let axe = Entity::item("fire_axe", EntityKind::new("fire axe"), "fire axe")
            .aliases(&["axe", "fire axe", "axe"]);

        assert!(axe.references("FIRE_AXE"));
        assert!(axe.references("Fire Axe"));
        assert!(axe.references("axe"));
        assert!(!axe.references("hatchet"));
        assert_eq!(axe.aliases, vec!["axe".to_string(), "fire axe".to_string()]);
    }

    #[test]
    fn types_follow_family() {
        let well = Entity::object("well", WELL, "well");
        let bucket = Entity::item("bucket", BUCKET, "bucket");
        let helmet = Entity::item("bucket", BUCKET, "bucket").equipable(EquipSlot::Head, vec![]);

        assert_eq!(well.types(), EntityTypes::OBJECT);
        assert_eq!(bucket.types(), EntityTypes::ITEM);
        assert_eq!(helmet.types(), EntityTypes::ITEM | EntityTypes::EQUIPABLE);
        assert!(bucket.is_item());
        assert!(!well.is_item());
    }

    #[test]
    fn capabilities_stay_in_their_family() {
        let bucket = Entity::item("bucket", BUCKET, "bucket")
            .containing(vec![EntityId::new(1)])
            .leading_to(EnvironmentId::new(1), None);
        assert_eq!(bucket.contents(), None);
        assert_eq!(bucket.passage(), None);

        let well = Entity::object("well", WELL, "well")
            .equipable(EquipSlot::Head, vec![])
            .containing(vec![EntityId::new(3)]);
        assert_eq!(well.equipable_info(), None);
        assert_eq!(well.contents(), Some(&[EntityId::new(3)][..]));
    }

    #[test]
    fn state_accessors() {
        let well = Entity::object("well", WELL, "well")
            .with_state(State::Fill(FillLevel::Filling { remaining: 3 }));
        assert_eq!(well.fill_level(), Some(FillLevel::Filling { remaining: 3 }));
        assert_eq!(well.vessel(), None);

        let bucket = Entity::item("bucket", BUCKET, "bucket").with_state(State::Vessel(Contents::Empty));
        assert_eq!(bucket.vessel(), Some(Contents::Empty));
        assert_eq!(bucket.hatch(), None);
    }

    #[test]
    fn allowed_actions_gate() {
        let river = Entity::object("river", EntityKind::new("river"), "river")
            .allowing(&[Action::Inspect, Action::Fill]);
        assert!(river.allows(Action::Fill));
        assert!(!river.allows(Action::Equip));
    }

    #[test]
    fn two_way_passage() {
        let cockpit = EnvironmentId::new(0);
        let hallway = EnvironmentId::new(1);
        let elsewhere = EnvironmentId::new(2);
        let door = Passage {
            to: hallway,
            back: Some(cockpit),
        };
        assert_eq!(door.destination(cockpit), Some(hallway));
        assert_eq!(door.destination(elsewhere), Some(hallway));
        assert_eq!(door.destination(hallway), Some(cockpit));

        let one_way = Passage {
            to: hallway,
            back: None,
        };
        assert_eq!(one_way.destination(hallway), None);
    }
}
