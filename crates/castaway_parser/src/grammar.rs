//! The usage grammar.
//!
//! Each action accepts one or more argument shapes. A shape says which
//! entity families may fill the object slot, which preposition joins the
//! second slot, and which families may fill that one.
//!
//! The derived lookups (`valid_arg_counts`, `object_required`, ...) are
//! computed once when the grammar is built.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use castaway_foundation::{Action, Preposition};
use castaway_world::EntityTypes;
use strum::IntoEnumIterator;

/// One acceptable argument shape for an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsageRule {
    /// The action this shape belongs to.
    pub action: Action,
    /// Families allowed as the object, or `None` if the shape takes no object.
    pub object_types: Option<EntityTypes>,
    /// Preposition joining the second slot, if any.
    pub preposition: Option<Preposition>,
    /// Families allowed after the preposition.
    pub preposition_object_types: Option<EntityTypes>,
}

impl UsageRule {
    /// A shape with no arguments.
    #[must_use]
    pub const fn bare(action: Action) -> Self {
        Self {
            action,
            object_types: None,
            preposition: None,
            preposition_object_types: None,
        }
    }

    /// A shape with a single object.
    #[must_use]
    pub const fn object(action: Action, types: EntityTypes) -> Self {
        Self {
            action,
            object_types: Some(types),
            preposition: None,
            preposition_object_types: None,
        }
    }

    /// A shape with an object, a preposition, and a second object.
    #[must_use]
    pub const fn linked(
        action: Action,
        types: EntityTypes,
        preposition: Preposition,
        preposition_types: EntityTypes,
    ) -> Self {
        Self {
            action,
            object_types: Some(types),
            preposition: Some(preposition),
            preposition_object_types: Some(preposition_types),
        }
    }

    /// Number of filled type slots.
    #[must_use]
    pub fn arg_count(&self) -> usize {
        usize::from(self.object_types.is_some())
            + usize::from(self.preposition_object_types.is_some())
    }

    /// Checks resolved argument families against this shape.
    ///
    /// `object` and `preposition_object` are the families of whatever the
    /// phrases resolved to; `arg_count` counts the phrases themselves, so a
    /// phrase that resolved to nothing still counts.
    #[must_use]
    pub fn accepts(
        &self,
        object: Option<EntityTypes>,
        preposition: Option<Preposition>,
        preposition_object: Option<EntityTypes>,
        arg_count: usize,
    ) -> bool {
        if !slot_accepts(self.object_types, object) {
            return false;
        }
        if !slot_accepts(self.preposition_object_types, preposition_object) {
            return false;
        }
        if self.preposition.is_some() && preposition.is_some() && self.preposition != preposition {
            return false;
        }
        self.arg_count() == arg_count
    }
}

fn slot_accepts(slot: Option<EntityTypes>, given: Option<EntityTypes>) -> bool {
    match (slot, given) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(slot), Some(given)) => slot.admits(given),
    }
}

impl fmt::Display for UsageRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;
        if let Some(types) = self.object_types {
            write!(f, " <{}>", TypeList(types))?;
        }
        if let Some(preposition) = self.preposition {
            write!(f, " {preposition}")?;
        }
        if let Some(types) = self.preposition_object_types {
            write!(f, " <{}>", TypeList(types))?;
        }
        Ok(())
    }
}

struct TypeList(EntityTypes);

impl fmt::Display for TypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .0
            .iter_names()
            .map(|(name, _)| name.to_lowercase())
            .collect();
        f.write_str(&names.join("|"))
    }
}

/// Action to usage table with derived lookups.
#[derive(Clone, Debug)]
pub struct UsageGrammar {
    rules: BTreeMap<Action, Vec<UsageRule>>,
    arg_counts: BTreeMap<Action, BTreeSet<usize>>,
}

impl UsageGrammar {
    /// Builds a grammar from rules, keeping declaration order per action.
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = UsageRule>) -> Self {
        let mut table: BTreeMap<Action, Vec<UsageRule>> = BTreeMap::new();
        for rule in rules {
            table.entry(rule.action).or_default().push(rule);
        }
        let arg_counts = table
            .iter()
            .map(|(&action, rules)| (action, rules.iter().map(UsageRule::arg_count).collect()))
            .collect();
        Self {
            rules: table,
            arg_counts,
        }
    }

    /// The standard command language.
    #[must_use]
    pub fn standard() -> Self {
        use Action as A;
        use Preposition as P;

        let object = EntityTypes::OBJECT;
        let item = EntityTypes::ITEM;
        let either = EntityTypes::OBJECT | EntityTypes::ITEM;

        let mut rules = vec![
            UsageRule::bare(A::Quit),
            UsageRule::bare(A::Help),
            UsageRule::object(A::Help, either),
            UsageRule::bare(A::Inspect),
            UsageRule::object(A::Inspect, either | EntityTypes::PLAYER),
            UsageRule::object(A::Pickup, item),
            UsageRule::object(A::Equip, EntityTypes::EQUIPABLE),
            UsageRule::object(A::Unequip, EntityTypes::EQUIPABLE),
            UsageRule::linked(A::Fill, either, P::With, either),
            UsageRule::linked(A::Empty, item, P::Into, either),
            UsageRule::object(A::Use, either),
            UsageRule::linked(A::Use, either, P::On, either),
            UsageRule::linked(A::Repair, either, P::With, either),
        ];
        rules.extend(
            [A::Enter, A::Turn, A::Hit, A::Press, A::Open, A::Close]
                .into_iter()
                .map(|action| UsageRule::object(action, object)),
        );
        Self::new(rules)
    }

    /// Shapes for an action, in declaration order. Empty for unknown actions.
    #[must_use]
    pub fn rules(&self, action: Action) -> &[UsageRule] {
        self.rules.get(&action).map_or(&[][..], Vec::as_slice)
    }

    /// Returns true if the action has at least one shape.
    #[must_use]
    pub fn knows(&self, action: Action) -> bool {
        !self.rules(action).is_empty()
    }

    /// Argument counts the action accepts.
    #[must_use]
    pub fn valid_arg_counts(&self, action: Action) -> BTreeSet<usize> {
        self.arg_counts.get(&action).cloned().unwrap_or_default()
    }

    /// Returns true if no shape of the action takes zero arguments.
    #[must_use]
    pub fn object_required(&self, action: Action) -> bool {
        self.arg_counts
            .get(&action)
            .is_some_and(|counts| !counts.contains(&0))
    }

    /// Returns true if every shape of the action takes two arguments.
    #[must_use]
    pub fn preposition_object_required(&self, action: Action) -> bool {
        self.arg_counts
            .get(&action)
            .is_some_and(|counts| counts.len() == 1 && counts.contains(&2))
    }

    /// Prepositions named by the action's shapes, `None` for shapes without one.
    #[must_use]
    pub fn expected_prepositions(&self, action: Action) -> Vec<Option<Preposition>> {
        self.rules(action).iter().map(|r| r.preposition).collect()
    }

    /// Returns true if every shape of the action names a preposition.
    ///
    /// A mixed action such as USE does not require one; the usage match
    /// decides between its shapes.
    #[must_use]
    pub fn preposition_required(&self, action: Action) -> bool {
        let rules = self.rules(action);
        !rules.is_empty() && rules.iter().all(|r| r.preposition.is_some())
    }

    /// One line per known action listing its shapes.
    #[must_use]
    pub fn help_text(&self) -> String {
        Action::iter()
            .filter(|&action| self.knows(action))
            .map(|action| {
                let name: &'static str = action.into();
                let shapes: Vec<String> = self.rules(action).iter().map(ToString::to_string).collect();
                format!("{name:<8} {}", shapes.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for UsageGrammar {
    fn default() -> Self {
        Self::standard()
    }
}
