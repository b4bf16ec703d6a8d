//! Resolved effects on characters.
//!
//! These are what the host engine holds on to and calls at round and turn
//! boundaries. Magnitudes are resolved lazily, once, and shared by every
//! copy handed out.

use std::sync::Arc;

use im::Vector;
use once_cell::sync::OnceCell;
use tracing::trace;

use crate::core::Character;
use crate::error::{RulesetError, Result};
use crate::functions::{BatchEffectCallbackFn, EffectCallbackFn, RoundEffectCallbackFn};
use crate::magnitudes::{MagnitudeResolver, StatisticChangeMagnitude};

use super::StatisticMagnitudePair;

/// A resolved magnitude keyed by the statistic it applies to.
pub type MagnitudeEntry = (String, Arc<StatisticChangeMagnitude>);

/// One character affected at round end, with the amounts applied to it.
#[derive(Clone, Copy)]
pub struct AffectedCharacter<'a> {
    pub effects: &'a [i32],
    pub character: &'a dyn Character,
}

impl<'a> AffectedCharacter<'a> {
    /// Create a new entry.
    pub fn new(effects: &'a [i32], character: &'a dyn Character) -> Self {
        Self { effects, character }
    }
}

impl std::fmt::Debug for AffectedCharacter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffectedCharacter")
            .field("effects", &self.effects)
            .field("character", &self.character.id())
            .finish()
    }
}

/// Behavior shared by every effect on a character.
pub trait CharacterEffect: Send + Sync {
    /// Ordering hint; the host decides whether lower or higher goes first.
    fn priority(&self) -> i32;

    /// Resolved magnitudes, as a fresh container sharing cached entries.
    fn magnitudes(&self) -> Result<Vector<MagnitudeEntry>>;
}

/// Statistic pairs resolved on first access.
pub(crate) struct LazyMagnitudes {
    pairs: Vec<StatisticMagnitudePair>,
    resolver: MagnitudeResolver,
    resolved: OnceCell<Vector<MagnitudeEntry>>,
}

impl LazyMagnitudes {
    pub(crate) fn new(pairs: Vec<StatisticMagnitudePair>, resolver: MagnitudeResolver) -> Self {
        Self {
            pairs,
            resolver,
            resolved: OnceCell::new(),
        }
    }

    /// Resolve every pair on the first successful call, then copy the cache.
    pub(crate) fn get(&self) -> Result<Vector<MagnitudeEntry>> {
        self.resolved
            .get_or_try_init(|| {
                self.pairs
                    .iter()
                    .map(|pair| -> Result<MagnitudeEntry> {
                        let magnitude = self
                            .resolver
                            .resolve_for_statistic(&pair.statistic_type_id, &pair.magnitude)?;
                        Ok((pair.statistic_type_id.clone(), Arc::new(magnitude)))
                    })
                    .collect::<Result<Vector<_>>>()
            })
            .cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }
}

fn ensure_effects(effects: &[i32]) -> Result<()> {
    if effects.is_empty() {
        return Err(RulesetError::invalid_argument("effects cannot be empty"));
    }
    Ok(())
}

/// A continuous effect on a character.
///
/// Callbacks are optional; an unset callback makes its method a no-op.
pub struct EffectsOnCharacter {
    priority: i32,
    magnitudes: LazyMagnitudes,
    accompany_effect: Option<EffectCallbackFn>,
    other_effects: Option<EffectCallbackFn>,
}

impl EffectsOnCharacter {
    pub(crate) fn new(
        priority: i32,
        magnitudes: LazyMagnitudes,
        accompany_effect: Option<EffectCallbackFn>,
        other_effects: Option<EffectCallbackFn>,
    ) -> Self {
        Self {
            priority,
            magnitudes,
            accompany_effect,
            other_effects,
        }
    }

    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Resolved magnitudes. See `CharacterEffect::magnitudes`.
    pub fn magnitudes(&self) -> Result<Vector<MagnitudeEntry>> {
        self.magnitudes.get()
    }

    /// Run the accompany callback for `character`.
    ///
    /// Fails if `effects` is empty, before the callback runs.
    pub fn accompany_effect(&self, effects: &[i32], character: &dyn Character) -> Result<()> {
        ensure_effects(effects)?;
        invoke("accompany_effect", self.accompany_effect.as_ref(), |f| {
            f(effects, character);
        });
        Ok(())
    }

    /// Run the other-effects callback for `character`.
    pub fn other_effects(&self, effects: &[i32], character: &dyn Character) -> Result<()> {
        ensure_effects(effects)?;
        invoke("other_effects", self.other_effects.as_ref(), |f| {
            f(effects, character);
        });
        Ok(())
    }

    #[must_use]
    pub fn has_accompany_effect(&self) -> bool {
        self.accompany_effect.is_some()
    }

    #[must_use]
    pub fn has_other_effects(&self) -> bool {
        self.other_effects.is_some()
    }
}

impl CharacterEffect for EffectsOnCharacter {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn magnitudes(&self) -> Result<Vector<MagnitudeEntry>> {
        self.magnitudes.get()
    }
}

impl std::fmt::Debug for EffectsOnCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectsOnCharacter")
            .field("priority", &self.priority)
            .field("magnitudes", &self.magnitudes.len())
            .field("accompany_effect", &self.has_accompany_effect())
            .field("other_effects", &self.has_other_effects())
            .finish()
    }
}

/// An effect applied at round end (or on a mid-round turn change).
pub struct RoundEndEffectsOnCharacter {
    priority: i32,
    magnitudes: LazyMagnitudes,
    accompany_effect: Option<RoundEffectCallbackFn>,
    other_effects: Option<RoundEffectCallbackFn>,
    accompany_all_effects: Option<BatchEffectCallbackFn>,
}

impl RoundEndEffectsOnCharacter {
    pub(crate) fn new(
        priority: i32,
        magnitudes: LazyMagnitudes,
        accompany_effect: Option<RoundEffectCallbackFn>,
        other_effects: Option<RoundEffectCallbackFn>,
        accompany_all_effects: Option<BatchEffectCallbackFn>,
    ) -> Self {
        Self {
            priority,
            magnitudes,
            accompany_effect,
            other_effects,
            accompany_all_effects,
        }
    }

    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn magnitudes(&self) -> Result<Vector<MagnitudeEntry>> {
        self.magnitudes.get()
    }

    /// Run the accompany callback for `character`.
    ///
    /// `advancing_rounds` is `true` while rounds advance and `false` on a
    /// mid-round turn change.
    pub fn accompany_effect(
        &self,
        effects: &[i32],
        character: &dyn Character,
        advancing_rounds: bool,
    ) -> Result<()> {
        ensure_effects(effects)?;
        invoke("accompany_effect", self.accompany_effect.as_ref(), |f| {
            f(effects, character, advancing_rounds);
        });
        Ok(())
    }

    /// Run the other-effects callback for `character`.
    pub fn other_effects(
        &self,
        effects: &[i32],
        character: &dyn Character,
        advancing_rounds: bool,
    ) -> Result<()> {
        ensure_effects(effects)?;
        invoke("other_effects", self.other_effects.as_ref(), |f| {
            f(effects, character, advancing_rounds);
        });
        Ok(())
    }

    /// Run the accompany-all callback once for the whole batch.
    ///
    /// Fails if any entry has no effects, before the callback runs.
    pub fn accompany_all_effects(
        &self,
        affected: &[AffectedCharacter<'_>],
        advancing_rounds: bool,
    ) -> Result<()> {
        for entry in affected {
            ensure_effects(entry.effects)?;
        }
        invoke(
            "accompany_all_effects",
            self.accompany_all_effects.as_ref(),
            |f| f(affected, advancing_rounds),
        );
        Ok(())
    }

    #[must_use]
    pub fn has_accompany_all_effects(&self) -> bool {
        self.accompany_all_effects.is_some()
    }
}

impl CharacterEffect for RoundEndEffectsOnCharacter {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn magnitudes(&self) -> Result<Vector<MagnitudeEntry>> {
        self.magnitudes.get()
    }
}

impl std::fmt::Debug for RoundEndEffectsOnCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundEndEffectsOnCharacter")
            .field("priority", &self.priority)
            .field("magnitudes", &self.magnitudes.len())
            .field("accompany_effect", &self.accompany_effect.is_some())
            .field("other_effects", &self.other_effects.is_some())
            .field("accompany_all_effects", &self.has_accompany_all_effects())
            .finish()
    }
}

fn invoke<F: ?Sized>(hook: &str, callback: Option<&Arc<F>>, call: impl FnOnce(&F)) {
    match callback {
        Some(f) => {
            trace!(hook, "Dispatching effect callback");
            call(&**f);
        }
        None => trace!(hook, "No callback registered, skipping"),
    }
}
