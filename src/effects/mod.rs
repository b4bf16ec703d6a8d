//! Effects on characters.
//!
//! An effect bundles statistic changes with callbacks the host engine fires
//! at round and turn boundaries:
//! - `EffectsOnCharacter`: continuous effects with accompany/other callbacks
//! - `RoundEndEffectsOnCharacter`: adds an accompany-all callback that sees
//!   every affected character at once
//! - `EffectComposer`: validates definitions and builds both
//!
//! ## Design Philosophy
//!
//! The composer decides which callback runs, so the engine needs a single
//! dispatch path whether a ruleset notifies per character or per round.

mod definition;
mod character;
mod composer;

pub use definition::{
    EffectsOnCharacterDefinition, RoundEndEffectsOnCharacterDefinition, StatisticMagnitudePair,
};
pub use character::{
    AffectedCharacter, CharacterEffect, EffectsOnCharacter, MagnitudeEntry,
    RoundEndEffectsOnCharacter,
};
pub use composer::EffectComposer;
