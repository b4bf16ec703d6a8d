//! Effect composition - building resolved effects from definitions.
//!
//! The `EffectComposer` validates the statistic pairs of a definition and
//! resolves its callback ids through the function registry. Magnitudes are
//! not resolved here; the resolved effect does that on first use.
//!
//! Callback ids follow a `Requirement`:
//! - `Required`: the id must be present and resolve
//! - `Optional`: a missing id becomes a no-op and the registry is never
//!   asked about it; a present id must still resolve

use std::sync::Arc;

use tracing::debug;

use crate::core::{Requirement, RulesetConfig};
use crate::error::{ensure_non_empty, non_empty, RulesetError, Result};
use crate::functions::FunctionRegistry;
use crate::magnitudes::MagnitudeResolver;

use super::character::LazyMagnitudes;
use super::{
    EffectsOnCharacter, EffectsOnCharacterDefinition, RoundEndEffectsOnCharacter,
    RoundEndEffectsOnCharacterDefinition, StatisticMagnitudePair,
};

/// Builds `EffectsOnCharacter` and `RoundEndEffectsOnCharacter` objects.
#[derive(Clone)]
pub struct EffectComposer {
    resolver: MagnitudeResolver,
    functions: Arc<dyn FunctionRegistry>,
    continuous_callbacks: Requirement,
    round_end_callbacks: Requirement,
}

impl EffectComposer {
    /// Create a composer with the default callback requirements.
    pub fn new(resolver: MagnitudeResolver, functions: Arc<dyn FunctionRegistry>) -> Self {
        Self::with_config(resolver, functions, &RulesetConfig::default())
    }

    /// Create a composer using the callback requirements in `config`.
    pub fn with_config(
        resolver: MagnitudeResolver,
        functions: Arc<dyn FunctionRegistry>,
        config: &RulesetConfig,
    ) -> Self {
        Self {
            resolver,
            functions,
            continuous_callbacks: config.continuous_callbacks,
            round_end_callbacks: config.round_end_callbacks,
        }
    }

    /// Resolve a continuous effect.
    pub fn resolve(&self, definition: &EffectsOnCharacterDefinition) -> Result<EffectsOnCharacter> {
        validate_pairs(&definition.magnitudes)?;

        let requirement = self.continuous_callbacks;
        let accompany_effect = resolve_callback(
            definition.accompany_effect_function_id.as_deref(),
            requirement,
            "accompany effect",
            |id| self.functions.effect_callback(id),
        )?;
        let other_effects = resolve_callback(
            definition.other_effects_function_id.as_deref(),
            requirement,
            "other effects",
            |id| self.functions.effect_callback(id),
        )?;

        debug!(
            priority = definition.priority,
            magnitudes = definition.magnitudes.len(),
            "Composed effects on character"
        );

        Ok(EffectsOnCharacter::new(
            definition.priority,
            LazyMagnitudes::new(definition.magnitudes.clone(), self.resolver.clone()),
            accompany_effect,
            other_effects,
        ))
    }

    /// Resolve a round-end effect.
    pub fn resolve_round_end(
        &self,
        definition: &RoundEndEffectsOnCharacterDefinition,
    ) -> Result<RoundEndEffectsOnCharacter> {
        validate_pairs(&definition.magnitudes)?;

        let requirement = self.round_end_callbacks;
        let accompany_effect = resolve_callback(
            definition.accompany_effect_function_id.as_deref(),
            requirement,
            "accompany effect",
            |id| self.functions.round_effect_callback(id),
        )?;
        let other_effects = resolve_callback(
            definition.other_effects_function_id.as_deref(),
            requirement,
            "other effects",
            |id| self.functions.round_effect_callback(id),
        )?;
        let accompany_all_effects = resolve_callback(
            definition.accompany_all_effects_function_id.as_deref(),
            requirement,
            "accompany all effects",
            |id| self.functions.batch_effect_callback(id),
        )?;

        debug!(
            priority = definition.priority,
            magnitudes = definition.magnitudes.len(),
            "Composed round-end effects on character"
        );

        Ok(RoundEndEffectsOnCharacter::new(
            definition.priority,
            LazyMagnitudes::new(definition.magnitudes.clone(), self.resolver.clone()),
            accompany_effect,
            other_effects,
            accompany_all_effects,
        ))
    }
}

impl std::fmt::Debug for EffectComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectComposer")
            .field("resolver", &self.resolver)
            .field("continuous_callbacks", &self.continuous_callbacks)
            .field("round_end_callbacks", &self.round_end_callbacks)
            .finish_non_exhaustive()
    }
}

fn validate_pairs(pairs: &[StatisticMagnitudePair]) -> Result<()> {
    for pair in pairs {
        ensure_non_empty(&pair.statistic_type_id, "statistic type id")?;
    }
    Ok(())
}

fn resolve_callback<F>(
    id: Option<&str>,
    requirement: Requirement,
    what: &str,
    lookup: impl FnOnce(&str) -> Option<F>,
) -> Result<Option<F>> {
    match non_empty(id) {
        None if requirement.is_required() => Err(RulesetError::invalid_argument(format!(
            "{what} function id is required"
        ))),
        None => Ok(None),
        Some(id) => lookup(id).map(Some).ok_or_else(|| {
            RulesetError::invalid_argument(format!("unknown {what} function: {id:?}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, Character, Element, StatisticType};
    use crate::functions::FunctionTable;
    use crate::magnitudes::StatisticChangeMagnitudeDefinition;

    fn composer(functions: FunctionTable, config: RulesetConfig) -> EffectComposer {
        let statistics = Catalog::from_entries([StatisticType::new("alacrity", "Alacrity")]);
        let resolver = MagnitudeResolver::with_config(
            Arc::new(Catalog::<Element>::new()),
            Arc::new(statistics),
            &config,
        );
        EffectComposer::with_config(resolver, Arc::new(functions), &config)
    }

    fn alteration() -> StatisticChangeMagnitudeDefinition {
        StatisticChangeMagnitudeDefinition::new("ALTERATION", "VALUE").with_absolute_value_range(1, 3)
    }

    #[test]
    fn test_resolve_callback_modes() {
        let found = |_: &str| Some(1);
        let missing = |_: &str| None::<i32>;

        assert_eq!(resolve_callback(None, Requirement::Optional, "x", found), Ok(None));
        assert_eq!(resolve_callback(Some(""), Requirement::Optional, "x", found), Ok(None));
        assert!(resolve_callback(None, Requirement::Required, "x", found).is_err());
        assert_eq!(resolve_callback(Some("a"), Requirement::Required, "x", found), Ok(Some(1)));
        assert!(resolve_callback(Some("a"), Requirement::Optional, "x", missing).is_err());
    }

    #[test]
    fn test_empty_statistic_id_rejected() {
        let composer = composer(FunctionTable::new(), RulesetConfig::default());
        let def = EffectsOnCharacterDefinition::new(0).with_magnitude("", alteration());

        assert!(composer.resolve(&def).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_unknown_statistic_fails_lazily() {
        let composer = composer(FunctionTable::new(), RulesetConfig::default());
        let def = EffectsOnCharacterDefinition::new(0).with_magnitude("vigor", alteration());

        let effect = composer.resolve(&def).unwrap();
        assert!(effect.magnitudes().is_err());
    }

    #[test]
    fn test_continuous_callbacks_optional_by_default() {
        let composer = composer(FunctionTable::new(), RulesetConfig::default());
        let def = EffectsOnCharacterDefinition::new(1).with_magnitude("alacrity", alteration());

        let effect = composer.resolve(&def).unwrap();
        assert!(!effect.has_accompany_effect());
        assert!(!effect.has_other_effects());
    }

    #[test]
    fn test_round_end_callbacks_required_by_default() {
        let functions = FunctionTable::new()
            .with_round_effect_callback("burn", |_, _, _| {})
            .with_batch_effect_callback("announce", |_, _| {});
        let composer = composer(functions, RulesetConfig::default());

        let partial = RoundEndEffectsOnCharacterDefinition::new(0)
            .with_accompany_effect("burn")
            .with_accompany_all_effects("announce");
        assert!(composer.resolve_round_end(&partial).is_err());

        let complete = partial.with_other_effects("burn");
        let effect = composer.resolve_round_end(&complete).unwrap();
        assert!(effect.has_accompany_all_effects());
    }

    #[test]
    fn test_round_end_callbacks_can_be_optional() {
        let config = RulesetConfig::new().with_round_end_callbacks(Requirement::Optional);
        let composer = composer(FunctionTable::new(), config);

        struct Bard;
        impl Character for Bard {
            fn id(&self) -> &str {
                "bard"
            }
            fn name(&self) -> &str {
                "Bard"
            }
        }

        let effect = composer
            .resolve_round_end(&RoundEndEffectsOnCharacterDefinition::new(0))
            .unwrap();
        assert!(effect.accompany_effect(&[1], &Bard, true).is_ok());
        assert!(effect.accompany_all_effects(&[], false).is_ok());
    }

    #[test]
    fn test_callback_family_must_match() {
        // A round-end callback is not a continuous callback.
        let functions = FunctionTable::new().with_round_effect_callback("burn", |_, _, _| {});
        let composer = composer(functions, RulesetConfig::default());
        let def = EffectsOnCharacterDefinition::new(0).with_accompany_effect("burn");

        assert!(composer.resolve(&def).is_err());
    }
}
