//! Command validation.
//!
//! Five checks run in order against a split command; the first failure is
//! returned as a user-facing error:
//!
//! 1. action: the first word is a known action with at least one usage
//! 2. object: present when required, resolvable, reachable, and allowing the action
//! 3. preposition: present when required and expected by the action
//! 4. preposition object: present when required and within reach
//! 5. usage: the resolved arguments match one of the action's shapes
//!
//! Validation reads the world and never changes it, so validating the same
//! command twice gives the same answer.

use castaway_foundation::{Action, EntityId, Error, ErrorContext, Preposition, Result};
use castaway_world::{EntityTypes, World};
use tracing::debug;

use crate::command::{Command, Target};
use crate::grammar::{UsageGrammar, UsageRule};
use crate::resolve::CommandObjectResolver;

/// Checks split commands against the grammar and the world.
#[derive(Copy, Clone, Debug)]
pub struct CommandValidator<'a> {
    grammar: &'a UsageGrammar,
    world: &'a World,
    resolver: CommandObjectResolver<'a>,
}

impl<'a> CommandValidator<'a> {
    /// Creates a validator for the current world state.
    #[must_use]
    pub const fn new(grammar: &'a UsageGrammar, world: &'a World) -> Self {
        Self {
            grammar,
            world,
            resolver: CommandObjectResolver::new(world),
        }
    }

    /// Validates a command.
    ///
    /// Returns the first matching usage, or `None` for an empty command,
    /// which is always valid and does nothing.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first failed check.
    pub fn validate(&self, cmd: &Command) -> Result<Option<&'a UsageRule>> {
        if cmd.is_empty() {
            return Ok(None);
        }
        let context = |stage| ErrorContext::new().with_input(cmd.to_string()).with_stage(stage);

        let action = self
            .check_action(cmd)
            .map_err(|e| e.with_context(context("action")))?;
        debug!(action = %cmd.action_str, "validated action");

        let object = self
            .check_object(cmd, action)
            .map_err(|e| e.with_context(context("object")))?;
        debug!(object = ?cmd.object_str, "validated object");

        let preposition = self
            .check_preposition(cmd, action)
            .map_err(|e| e.with_context(context("preposition")))?;
        debug!(preposition = ?cmd.preposition_str, "validated preposition");

        let preposition_object = self
            .check_preposition_object(cmd, action)
            .map_err(|e| e.with_context(context("preposition object")))?;
        debug!(preposition_object = ?cmd.preposition_object_str, "validated preposition object");

        let usage = self
            .check_usage(cmd, action, object, preposition, preposition_object)
            .map_err(|e| e.with_context(context("usage")))?;
        debug!(%usage, "validated usage");

        Ok(Some(usage))
    }

    fn check_action(&self, cmd: &Command) -> Result<Action> {
        Action::parse(&cmd.action_str)
            .filter(|&action| self.grammar.knows(action))
            .ok_or_else(|| Error::action_not_recognized(&cmd.action_str))
    }

    fn check_object(&self, cmd: &Command, action: Action) -> Result<Option<Target>> {
        let required = self.grammar.object_required(action);
        let Some(phrase) = cmd.object_str.as_deref() else {
            if required {
                return Err(Error::object_required(&cmd.action_str));
            }
            return Ok(None);
        };
        if Target::names_player(phrase) {
            return Ok(Some(Target::Player));
        }

        let id = self
            .resolver
            .resolve_target(phrase)
            .and_then(Target::entity)
            .filter(|&id| self.world.is_reachable(id))
            .ok_or_else(|| Error::object_not_found(phrase))?;

        if !self.world.entity(id).allows(action) {
            return Err(Error::cannot_perform_on(&cmd.action_str, phrase));
        }
        Ok(Some(Target::Entity(id)))
    }

    fn check_preposition(&self, cmd: &Command, action: Action) -> Result<Option<Preposition>> {
        let Some(word) = cmd.preposition_str.as_deref() else {
            if self.grammar.preposition_required(action) {
                return Err(Error::preposition_required(&cmd.action_str));
            }
            return Ok(None);
        };
        let preposition =
            Preposition::parse(word).ok_or_else(|| Error::preposition_not_recognized(word))?;
        if !self
            .grammar
            .expected_prepositions(action)
            .contains(&Some(preposition))
        {
            return Err(Error::cannot_perform_with(&cmd.action_str, word));
        }
        Ok(Some(preposition))
    }

    fn check_preposition_object(&self, cmd: &Command, action: Action) -> Result<Option<EntityId>> {
        let Some(phrase) = cmd.preposition_object_str.as_deref() else {
            if self.grammar.preposition_object_required(action) {
                let word = cmd.preposition_str.as_deref().unwrap_or_default();
                return Err(Error::missing_preposition_object(word));
            }
            return Ok(None);
        };

        // Objects must be here; items must be carried.
        let id = self
            .resolver
            .resolve_target(phrase)
            .and_then(Target::entity)
            .filter(|&id| {
                if self.world.entity(id).is_item() {
                    self.world.player().holds(id)
                } else {
                    self.world.is_reachable(id)
                }
            })
            .ok_or_else(|| Error::object_not_found(phrase))?;
        Ok(Some(id))
    }

    fn check_usage(
        &self,
        cmd: &Command,
        action: Action,
        object: Option<Target>,
        preposition: Option<Preposition>,
        preposition_object: Option<EntityId>,
    ) -> Result<&'a UsageRule> {
        let object_types = object.map(|target| self.types_of(target));
        let preposition_object_types =
            preposition_object.map(|id| self.types_of(Target::Entity(id)));

        self.grammar
            .rules(action)
            .iter()
            .find(|rule| {
                rule.accepts(
                    object_types,
                    preposition,
                    preposition_object_types,
                    cmd.arg_count(),
                )
            })
            .ok_or_else(|| Error::invalid_usage(&cmd.action_str))
    }

    fn types_of(&self, target: Target) -> EntityTypes {
        match target {
            Target::Entity(id) => self.world.entity(id).types(),
            Target::Player => EntityTypes::PLAYER,
        }
    }
}
