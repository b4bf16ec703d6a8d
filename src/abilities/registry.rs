//! Ability registry for a loaded ruleset.
//!
//! The `AbilityRegistry` stores every ability built from a ruleset. It
//! provides lookup by id, typed access per kind, and iteration.

use rustc_hash::FxHashMap;

use crate::error::{RulesetError, Result};

use super::{Ability, AbilityKind, ActiveAbility, PassiveAbility, ReactiveAbility};

/// An ability of any kind.
#[derive(Debug)]
pub enum LoadedAbility {
    Active(ActiveAbility),
    Passive(PassiveAbility),
    Reactive(ReactiveAbility),
}

impl LoadedAbility {
    /// View as the shared `Ability` interface.
    #[must_use]
    pub fn as_ability(&self) -> &dyn Ability {
        match self {
            LoadedAbility::Active(a) => a,
            LoadedAbility::Passive(a) => a,
            LoadedAbility::Reactive(a) => a,
        }
    }

    /// View as the shared `Ability` interface, mutably.
    pub fn as_ability_mut(&mut self) -> &mut dyn Ability {
        match self {
            LoadedAbility::Active(a) => a,
            LoadedAbility::Passive(a) => a,
            LoadedAbility::Reactive(a) => a,
        }
    }

    #[must_use]
    pub fn kind(&self) -> AbilityKind {
        self.as_ability().kind()
    }

    #[must_use]
    pub fn as_active(&self) -> Option<&ActiveAbility> {
        match self {
            LoadedAbility::Active(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_passive(&self) -> Option<&PassiveAbility> {
        match self {
            LoadedAbility::Passive(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_reactive(&self) -> Option<&ReactiveAbility> {
        match self {
            LoadedAbility::Reactive(a) => Some(a),
            _ => None,
        }
    }
}

impl From<ActiveAbility> for LoadedAbility {
    fn from(a: ActiveAbility) -> Self {
        LoadedAbility::Active(a)
    }
}

impl From<PassiveAbility> for LoadedAbility {
    fn from(a: PassiveAbility) -> Self {
        LoadedAbility::Passive(a)
    }
}

impl From<ReactiveAbility> for LoadedAbility {
    fn from(a: ReactiveAbility) -> Self {
        LoadedAbility::Reactive(a)
    }
}

/// Registry of loaded abilities, keyed by id.
#[derive(Debug, Default)]
pub struct AbilityRegistry {
    abilities: FxHashMap<String, LoadedAbility>,
}

impl AbilityRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ability.
    ///
    /// Fails if an ability with the same id is already registered.
    pub fn register(&mut self, ability: impl Into<LoadedAbility>) -> Result<()> {
        let ability = ability.into();
        let id = ability.as_ability().id().to_string();
        if self.abilities.contains_key(&id) {
            return Err(RulesetError::invalid_argument(format!(
                "ability {id:?} already registered"
            )));
        }
        self.abilities.insert(id, ability);
        Ok(())
    }

    /// Get an ability by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LoadedAbility> {
        self.abilities.get(id)
    }

    /// Get an ability by id, mutably (for renaming).
    pub fn get_mut(&mut self, id: &str) -> Option<&mut LoadedAbility> {
        self.abilities.get_mut(id)
    }

    /// Get an active ability by id.
    #[must_use]
    pub fn active(&self, id: &str) -> Option<&ActiveAbility> {
        self.get(id).and_then(LoadedAbility::as_active)
    }

    /// Get a passive ability by id.
    #[must_use]
    pub fn passive(&self, id: &str) -> Option<&PassiveAbility> {
        self.get(id).and_then(LoadedAbility::as_passive)
    }

    /// Get a reactive ability by id.
    #[must_use]
    pub fn reactive(&self, id: &str) -> Option<&ReactiveAbility> {
        self.get(id).and_then(LoadedAbility::as_reactive)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.abilities.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Iterate over all abilities.
    pub fn iter(&self) -> impl Iterator<Item = &LoadedAbility> {
        self.abilities.values()
    }

    /// Find abilities of one kind.
    pub fn find_by_kind(&self, kind: AbilityKind) -> impl Iterator<Item = &LoadedAbility> {
        self.abilities.values().filter(move |a| a.kind() == kind)
    }
}
