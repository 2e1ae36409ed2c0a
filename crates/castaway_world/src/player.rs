//! The player record.
//!
//! The player owns the inventory; `equipped` only marks inventory entries
//! and never holds anything the inventory does not.

use castaway_foundation::{Effect, EntityId, EnvironmentId};

/// The single player of a run.
#[derive(Clone, Debug)]
pub struct Player {
    /// Where the player is.
    pub environment: EnvironmentId,
    /// Carried items, in pickup order.
    pub inventory: Vec<EntityId>,
    /// Worn items, a subset of `inventory`.
    pub equipped: Vec<EntityId>,
    /// Active effects, unique by name.
    pub effects: Vec<Effect>,
}

impl Player {
    /// Creates a player standing in `environment` with nothing on them.
    #[must_use]
    pub const fn new(environment: EnvironmentId) -> Self {
        Self {
            environment,
            inventory: Vec::new(),
            equipped: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Returns true if the item is in the inventory.
    #[must_use]
    pub fn holds(&self, id: EntityId) -> bool {
        self.inventory.contains(&id)
    }

    /// Returns true if the item is worn.
    #[must_use]
    pub fn is_wearing(&self, id: EntityId) -> bool {
        self.equipped.contains(&id)
    }

    /// Returns true if an effect with this name is active.
    #[must_use]
    pub fn has_effect(&self, name: &str) -> bool {
        self.effects.iter().any(|e| e.name == name)
    }

    /// Applies effects the player does not already have.
    ///
    /// Returns `"You gain the following effects: A, B."` naming the newly
    /// gained effects, or an empty string if there were none.
    pub fn add_effects(&mut self, effects: &[Effect]) -> String {
        let mut gained: Vec<&Effect> = Vec::new();
        for effect in effects {
            if !self.effects.contains(effect) {
                self.effects.push(effect.clone());
                gained.push(effect);
            }
        }
        effect_list("You gain the following effects", &gained)
    }

    /// Removes effects the player has.
    ///
    /// Returns `"You lose the following effects: A."` naming the removed
    /// effects, or an empty string if there were none.
    pub fn remove_effects(&mut self, effects: &[Effect]) -> String {
        let mut lost: Vec<&Effect> = Vec::new();
        for effect in effects {
            if let Some(pos) = self.effects.iter().position(|e| e == effect) {
                self.effects.remove(pos);
                lost.push(effect);
            }
        }
        effect_list("You lose the following effects", &lost)
    }
}

fn effect_list(lead: &str, effects: &[&Effect]) -> String {
    if effects.is_empty() {
        return String::new();
    }
    let names: Vec<String> = effects.iter().map(ToString::to_string).collect();
    format!("{lead}: {}.", names.join(", "))
}
