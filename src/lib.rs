//! # rpg-ruleset
//!
//! Resolves declarative RPG ruleset definitions into behavior objects a
//! game engine can call.
//!
//! ## Design Principles
//!
//! 1. **Engine-Agnostic**: No hardcoded statistics, elements, or abilities.
//!    The host supplies catalogs, functions, and characters.
//!
//! 2. **Fail Early**: Every definition is validated when it is resolved.
//!    A resolved object never discovers a bad id later.
//!
//! 3. **Configuration Over Convention**: Which references and callbacks are
//!    mandatory is picked by `RulesetConfig`, not by separate code paths.
//!
//! ## Architecture
//!
//! - **Function Registry**: Definitions name behavior by string id. The
//!   `FunctionRegistry` turns an id into a typed callable.
//!
//! - **Lazy Magnitudes**: Effects resolve their magnitudes on first use,
//!   cache them, and hand out cheap copies via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: Host entity seams, catalogs, configuration, RNG
//! - `data`: Opaque data payloads and their codec
//! - `functions`: Function registry and callable families
//! - `magnitudes`: Statistic change magnitudes and their resolver
//! - `effects`: Effects on characters and the effect composer
//! - `abilities`: Ability factories and registry
//! - `ruleset`: One facade wiring everything for a ruleset variant

pub mod error;
pub mod core;
pub mod data;
pub mod functions;
pub mod magnitudes;
pub mod effects;
pub mod abilities;
pub mod ruleset;

// Re-export commonly used types
pub use crate::error::{Result, RulesetError};

pub use crate::core::{
    Character, CharacterEventFiring, Entity, Item,
    Catalog, CatalogEntry, Element, Lookup, StatisticType,
    Requirement, RulesetConfig,
    GameRng,
};

pub use crate::data::{DataCodec, DataMap, DataValue, JsonDataCodec};

pub use crate::functions::{FunctionRegistry, FunctionTable, UseArgument};

pub use crate::magnitudes::{
    AmountType, EffectType, MagnitudeAmount, MagnitudeRange, MagnitudeRanges,
    MagnitudeResolver, RolledAmount,
    StatisticChangeMagnitude, StatisticChangeMagnitudeDefinition,
};

pub use crate::effects::{
    AffectedCharacter, CharacterEffect, EffectComposer,
    EffectsOnCharacter, EffectsOnCharacterDefinition,
    RoundEndEffectsOnCharacter, RoundEndEffectsOnCharacterDefinition,
    StatisticMagnitudePair,
};

pub use crate::abilities::{
    Ability, AbilityDefinition, AbilityFactory, AbilityKind, AbilityRegistry,
    ActiveAbility, ActiveAbilityDefinition, LoadedAbility,
    PassiveAbility, PassiveAbilityDefinition,
    ReactiveAbility, ReactiveAbilityDefinition,
};

pub use crate::ruleset::{Ruleset, RulesetAbilities};
