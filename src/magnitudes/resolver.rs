//! Magnitude resolution - turning definitions into magnitudes.
//!
//! Resolution order matters:
//! 1. Parse the amount and effect tokens (fail fast on unknown tokens)
//! 2. Length-check all four ranges, whichever amount type is in use
//! 3. Resolve the element and statistic type through the catalogs
//! 4. Build the integer or float amount selected by the amount type

use std::sync::Arc;

use tracing::debug;

use crate::core::{Element, Lookup, Requirement, RulesetConfig, StatisticType};
use crate::error::{non_empty, RulesetError, Result};

use super::{
    AmountType, EffectType, MagnitudeAmount, MagnitudeRange, MagnitudeRanges,
    StatisticChangeMagnitude, StatisticChangeMagnitudeDefinition,
};

/// Resolves magnitude definitions against the element and statistic catalogs.
///
/// Cheap to clone; catalogs are shared.
#[derive(Clone)]
pub struct MagnitudeResolver {
    elements: Arc<dyn Lookup<Element>>,
    statistic_types: Arc<dyn Lookup<StatisticType>>,
    element: Requirement,
    statistic_type: Requirement,
}

impl MagnitudeResolver {
    /// Create a resolver with the default requirements.
    pub fn new(
        elements: Arc<dyn Lookup<Element>>,
        statistic_types: Arc<dyn Lookup<StatisticType>>,
    ) -> Self {
        Self::with_config(elements, statistic_types, &RulesetConfig::default())
    }

    /// Create a resolver using the requirements in `config`.
    pub fn with_config(
        elements: Arc<dyn Lookup<Element>>,
        statistic_types: Arc<dyn Lookup<StatisticType>>,
        config: &RulesetConfig,
    ) -> Self {
        Self {
            elements,
            statistic_types,
            element: config.element,
            statistic_type: config.statistic_type,
        }
    }

    /// Resolve a definition using its own statistic-type id.
    pub fn resolve(
        &self,
        definition: &StatisticChangeMagnitudeDefinition,
    ) -> Result<StatisticChangeMagnitude> {
        self.resolve_inner(definition.statistic_type_id.as_deref(), definition)
    }

    /// Resolve a definition for a given statistic type.
    ///
    /// `statistic_type_id` takes the place of the definition's own id.
    pub fn resolve_for_statistic(
        &self,
        statistic_type_id: &str,
        definition: &StatisticChangeMagnitudeDefinition,
    ) -> Result<StatisticChangeMagnitude> {
        self.resolve_inner(Some(statistic_type_id), definition)
    }

    fn resolve_inner(
        &self,
        statistic_type_id: Option<&str>,
        definition: &StatisticChangeMagnitudeDefinition,
    ) -> Result<StatisticChangeMagnitude> {
        let amount_type: AmountType = definition.amount_type.parse()?;
        let effect_type: EffectType = definition.effect_type.parse()?;

        let per_level_value = to_range(definition.per_level_value_range.as_deref(), "per-level value range")?;
        let per_level_percent = to_range(definition.per_level_percent_range.as_deref(), "per-level percent range")?;
        let absolute_value = to_range(definition.absolute_value_range.as_deref(), "absolute value range")?;
        let absolute_percent = to_range(definition.absolute_percent_range.as_deref(), "absolute percent range")?;

        let element = resolve_reference(
            self.elements.as_ref(),
            definition.element_id.as_deref(),
            self.element,
            "element",
        )?;
        let statistic_type = resolve_reference(
            self.statistic_types.as_ref(),
            statistic_type_id,
            self.statistic_type,
            "statistic type",
        )?;

        let amount = match amount_type {
            AmountType::Value => MagnitudeAmount::Value(MagnitudeRanges {
                per_level: per_level_value,
                absolute: absolute_value,
            }),
            AmountType::PercentOfMaximum => MagnitudeAmount::PercentOfMaximum(MagnitudeRanges {
                per_level: per_level_percent,
                absolute: absolute_percent,
            }),
        };

        debug!(
            statistic = statistic_type_id.unwrap_or("-"),
            effect = %effect_type,
            amount = %amount_type,
            "Resolved statistic change magnitude"
        );

        Ok(StatisticChangeMagnitude::new(statistic_type, element, effect_type, amount))
    }
}

impl std::fmt::Debug for MagnitudeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagnitudeResolver")
            .field("element", &self.element)
            .field("statistic_type", &self.statistic_type)
            .finish_non_exhaustive()
    }
}

/// Convert an optional `[min, max]` array into a range.
fn to_range<T: Copy>(values: Option<&[T]>, what: &str) -> Result<Option<MagnitudeRange<T>>> {
    match values {
        None => Ok(None),
        Some(&[min, max]) => Ok(Some(MagnitudeRange::new(min, max))),
        Some(other) => Err(RulesetError::invalid_argument(format!(
            "{what} must have exactly 2 elements, got {}",
            other.len()
        ))),
    }
}

/// Resolve an id through `lookup` under `requirement`.
///
/// A present id must always resolve; only absence depends on the requirement.
fn resolve_reference<V>(
    lookup: &dyn Lookup<V>,
    id: Option<&str>,
    requirement: Requirement,
    what: &str,
) -> Result<Option<V>> {
    match non_empty(id) {
        None if requirement.is_required() => Err(RulesetError::invalid_argument(format!(
            "{what} id is required"
        ))),
        None => Ok(None),
        Some(id) => lookup
            .lookup(id)
            .map(Some)
            .ok_or_else(|| RulesetError::invalid_argument(format!("unknown {what}: {id:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;

    fn resolver(config: RulesetConfig) -> MagnitudeResolver {
        let elements = Catalog::from_entries([Element::new("fire", "Fire")]);
        let statistics = Catalog::from_entries([
            StatisticType::new("health", "Health"),
            StatisticType::new("alacrity", "Alacrity"),
        ]);
        MagnitudeResolver::with_config(Arc::new(elements), Arc::new(statistics), &config)
    }

    fn damage() -> StatisticChangeMagnitudeDefinition {
        StatisticChangeMagnitudeDefinition::new("DAMAGE", "VALUE").with_statistic_type("health")
    }

    #[test]
    fn test_to_range() {
        assert_eq!(to_range::<i32>(None, "r"), Ok(None));
        assert_eq!(to_range(Some(&[1, 3][..]), "r"), Ok(Some(MagnitudeRange::new(1, 3))));
        assert!(to_range(Some(&[1][..]), "r").is_err());
        assert!(to_range::<i32>(Some(&[][..]), "r").is_err());
    }

    #[test]
    fn test_resolve_value() {
        let resolver = resolver(RulesetConfig::default());
        let magnitude = resolver
            .resolve(&damage().with_element("fire").with_absolute_value_range(2, 6))
            .unwrap();

        assert_eq!(magnitude.amount_type(), AmountType::Value);
        assert_eq!(magnitude.element().map(|e| e.id.as_str()), Some("fire"));
        assert_eq!(magnitude.statistic_type().map(|s| s.id.as_str()), Some("health"));
        let ranges = magnitude.value_ranges().unwrap();
        assert_eq!(ranges.absolute, Some(MagnitudeRange::new(2, 6)));
        assert_eq!(ranges.per_level, None);
    }

    #[test]
    fn test_percent_ignores_value_ranges() {
        let resolver = resolver(RulesetConfig::default());
        let def = StatisticChangeMagnitudeDefinition::new("ALTERATION", "PERCENT_OF_MAXIMUM")
            .with_statistic_type("health")
            .with_absolute_value_range(1, 2)
            .with_absolute_percent_range(0.1, 0.3);

        let magnitude = resolver.resolve(&def).unwrap();

        assert!(magnitude.value_ranges().is_none());
        assert_eq!(
            magnitude.percent_ranges().and_then(|r| r.absolute),
            Some(MagnitudeRange::new(0.1, 0.3))
        );
    }

    #[test]
    fn test_unused_range_is_still_checked() {
        let resolver = resolver(RulesetConfig::default());
        let mut def = damage().with_absolute_value_range(1, 2);
        def.per_level_percent_range = Some(vec![0.1]);

        assert!(resolver.resolve(&def).is_err());
    }

    #[test]
    fn test_token_checked_before_ranges() {
        let resolver = resolver(RulesetConfig::default());
        let mut def = StatisticChangeMagnitudeDefinition::new("DAMAGE", "FLAT");
        def.absolute_value_range = Some(vec![1, 2, 3]);

        let err = resolver.resolve(&def).unwrap_err();
        assert!(err.to_string().contains("amount type"));
    }

    #[test]
    fn test_optional_element() {
        let resolver = resolver(RulesetConfig::default());

        let magnitude = resolver.resolve(&damage()).unwrap();
        assert!(magnitude.element().is_none());

        let magnitude = resolver.resolve(&damage().with_element("")).unwrap();
        assert!(magnitude.element().is_none());

        // Present but unknown is always an error.
        assert!(resolver.resolve(&damage().with_element("frost")).is_err());
    }

    #[test]
    fn test_required_element() {
        let resolver = resolver(RulesetConfig::new().with_element(Requirement::Required));

        assert!(resolver.resolve(&damage()).is_err());
        assert!(resolver.resolve(&damage().with_element("")).is_err());
        assert!(resolver.resolve(&damage().with_element("fire")).is_ok());
    }

    #[test]
    fn test_statistic_type_requirement() {
        let required = resolver(RulesetConfig::default());
        let def = StatisticChangeMagnitudeDefinition::new("DAMAGE", "VALUE");

        assert!(required.resolve(&def).is_err());
        assert!(required.resolve(&def.clone().with_statistic_type("mana")).is_err());

        let optional = resolver(RulesetConfig::new().with_statistic_type(Requirement::Optional));
        let magnitude = optional.resolve(&def).unwrap();
        assert!(magnitude.statistic_type().is_none());
    }

    #[test]
    fn test_resolve_for_statistic_overrides() {
        let resolver = resolver(RulesetConfig::default());
        let magnitude = resolver
            .resolve_for_statistic("alacrity", &damage())
            .unwrap();

        assert_eq!(magnitude.statistic_type().map(|s| s.id.as_str()), Some("alacrity"));
    }

    #[test]
    fn test_closure_lookups() {
        let elements: Arc<dyn Lookup<Element>> = Arc::new(|_: &str| None::<Element>);
        let statistics: Arc<dyn Lookup<StatisticType>> =
            Arc::new(|id: &str| Some(StatisticType::new(id, id)));
        let resolver = MagnitudeResolver::new(elements, statistics);

        let magnitude = resolver.resolve(&damage()).unwrap();
        assert_eq!(magnitude.statistic_type().map(|s| s.id.as_str()), Some("health"));
    }
}
