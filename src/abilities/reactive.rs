//! Reactive abilities - fire in response to events and other abilities.
//!
//! Each reaction is split into a predicate ("does this fire?") and a
//! handler ("what happens?"), so the host can collect every firing
//! reaction before running any of them.

use tracing::trace;

use crate::core::Entity;
use crate::data::DataMap;
use crate::error::{ensure_non_empty, Result};
use crate::functions::{AbilityPredicateFn, AbilityReactionFn, EventPredicateFn, EventReactionFn};

use super::{Ability, AbilityCore, AbilityKind};

/// An ability that reacts to events and abilities.
pub struct ReactiveAbility {
    core: AbilityCore,
    fires_against_event: EventPredicateFn,
    fires_against_ability: AbilityPredicateFn,
    react_to_event: EventReactionFn,
    react_to_ability: AbilityReactionFn,
}

impl ReactiveAbility {
    pub(crate) fn new(
        core: AbilityCore,
        fires_against_event: EventPredicateFn,
        fires_against_ability: AbilityPredicateFn,
        react_to_event: EventReactionFn,
        react_to_ability: AbilityReactionFn,
    ) -> Self {
        Self {
            core,
            fires_against_event,
            fires_against_ability,
            react_to_event,
            react_to_ability,
        }
    }

    /// Check whether this ability fires against `event`.
    pub fn fires_against_event(&self, event: &str, params: &DataMap) -> Result<bool> {
        ensure_non_empty(event, "event")?;
        Ok((self.fires_against_event)(event, params))
    }

    /// Check whether this ability fires against `ability_id` used by `source`.
    pub fn fires_against_ability(&self, ability_id: &str, source: Entity<'_>) -> Result<bool> {
        ensure_non_empty(ability_id, "ability id")?;
        Ok((self.fires_against_ability)(ability_id, source))
    }

    /// React to `event`.
    pub fn react_to_event(&self, event: &str, params: &DataMap) -> Result<()> {
        ensure_non_empty(event, "event")?;
        trace!(ability = %self.id(), event, "Reacting to event");
        (self.react_to_event)(event, params);
        Ok(())
    }

    /// React to `ability_id` used by `source`.
    pub fn react_to_ability(&self, ability_id: &str, source: Entity<'_>) -> Result<()> {
        ensure_non_empty(ability_id, "ability id")?;
        trace!(ability = %self.id(), against = ability_id, "Reacting to ability");
        (self.react_to_ability)(ability_id, source);
        Ok(())
    }
}

impl Ability for ReactiveAbility {
    fn kind(&self) -> AbilityKind {
        AbilityKind::Reactive
    }

    fn core(&self) -> &AbilityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AbilityCore {
        &mut self.core
    }
}

impl std::fmt::Debug for ReactiveAbility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactiveAbility")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}
