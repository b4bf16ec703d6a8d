//! The ruleset facade.
//!
//! A `Ruleset` wires one `RulesetConfig` and the host's collaborators into
//! a magnitude resolver, an effect composer, and an ability factory, so a
//! host sets up its catalogs and functions once and resolves everything
//! through a single handle.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::abilities::{
    AbilityDefinition, AbilityFactory, AbilityRegistry, ActiveAbility, ActiveAbilityDefinition,
    PassiveAbility, ReactiveAbility, ReactiveAbilityDefinition,
};
use crate::core::{CharacterEventFiring, Element, Lookup, RulesetConfig, StatisticType};
use crate::data::DataCodec;
use crate::effects::{
    EffectComposer, EffectsOnCharacter, EffectsOnCharacterDefinition, RoundEndEffectsOnCharacter,
    RoundEndEffectsOnCharacterDefinition,
};
use crate::error::Result;
use crate::functions::FunctionRegistry;
use crate::magnitudes::{
    MagnitudeResolver, StatisticChangeMagnitude, StatisticChangeMagnitudeDefinition,
};

/// Every ability definition of a ruleset, grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetAbilities {
    pub active: Vec<ActiveAbilityDefinition>,
    pub passive: Vec<AbilityDefinition>,
    pub reactive: Vec<ReactiveAbilityDefinition>,
}

/// Resolves definitions into behavior objects for one ruleset variant.
#[derive(Clone)]
pub struct Ruleset {
    config: RulesetConfig,
    magnitudes: MagnitudeResolver,
    effects: EffectComposer,
    abilities: AbilityFactory,
}

impl Ruleset {
    /// Create a ruleset.
    pub fn new(
        config: RulesetConfig,
        elements: Arc<dyn Lookup<Element>>,
        statistic_types: Arc<dyn Lookup<StatisticType>>,
        functions: Arc<dyn FunctionRegistry>,
        codec: Arc<dyn DataCodec>,
        events: Arc<dyn CharacterEventFiring>,
    ) -> Self {
        let magnitudes = MagnitudeResolver::with_config(elements, statistic_types, &config);
        let effects = EffectComposer::with_config(magnitudes.clone(), Arc::clone(&functions), &config);
        let abilities = AbilityFactory::new(functions, codec, events);
        Self {
            config,
            magnitudes,
            effects,
            abilities,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RulesetConfig {
        &self.config
    }

    /// Resolve a magnitude definition.
    pub fn magnitude(
        &self,
        definition: &StatisticChangeMagnitudeDefinition,
    ) -> Result<StatisticChangeMagnitude> {
        self.magnitudes.resolve(definition)
    }

    /// Resolve a continuous effect definition.
    pub fn effects_on_character(
        &self,
        definition: &EffectsOnCharacterDefinition,
    ) -> Result<EffectsOnCharacter> {
        self.effects.resolve(definition)
    }

    /// Resolve a round-end effect definition.
    pub fn round_end_effects_on_character(
        &self,
        definition: &RoundEndEffectsOnCharacterDefinition,
    ) -> Result<RoundEndEffectsOnCharacter> {
        self.effects.resolve_round_end(definition)
    }

    pub fn active_ability(&self, definition: &ActiveAbilityDefinition) -> Result<ActiveAbility> {
        self.abilities.active(definition)
    }

    pub fn passive_ability(&self, definition: &AbilityDefinition) -> Result<PassiveAbility> {
        self.abilities.passive(definition)
    }

    pub fn reactive_ability(
        &self,
        definition: &ReactiveAbilityDefinition,
    ) -> Result<ReactiveAbility> {
        self.abilities.reactive(definition)
    }

    /// Build every ability of a ruleset into a registry.
    ///
    /// Stops at the first definition that fails to build or whose id is
    /// already taken; no partial registry is returned.
    pub fn load_abilities(&self, definitions: &RulesetAbilities) -> Result<AbilityRegistry> {
        let mut registry = AbilityRegistry::new();
        for definition in &definitions.active {
            registry.register(self.active_ability(definition)?)?;
        }
        for definition in &definitions.passive {
            registry.register(self.passive_ability(definition)?)?;
        }
        for definition in &definitions.reactive {
            registry.register(self.reactive_ability(definition)?)?;
        }

        debug!(abilities = registry.len(), "Loaded ruleset abilities");
        Ok(registry)
    }
}

impl std::fmt::Debug for Ruleset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ruleset")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
