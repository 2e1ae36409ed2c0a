//! Places the player can be.

use castaway_foundation::{EntityId, EnvironmentId};

/// A place holding objects and loose items.
#[derive(Clone, Debug)]
pub struct Environment {
    /// Registry handle.
    pub id: EnvironmentId,
    /// Registry key.
    pub key: String,
    /// Name used in descriptions ("town square").
    pub name: String,
    /// Fixed objects, in registration order.
    pub objects: Vec<EntityId>,
    /// Loose items lying around.
    pub items: Vec<EntityId>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new(id: EnvironmentId, key: &str, name: &str) -> Self {
        Self {
            id,
            key: key.to_string(),
            name: name.to_string(),
            objects: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Returns true if the entity is one of this environment's objects or loose items.
    #[must_use]
    pub fn holds(&self, id: EntityId) -> bool {
        self.objects.contains(&id) || self.items.contains(&id)
    }

    /// Removes a loose item. Returns false if it was not here.
    pub fn take_item(&mut self, id: EntityId) -> bool {
        match self.items.iter().position(|&i| i == id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }
}
