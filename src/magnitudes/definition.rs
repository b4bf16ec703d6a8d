//! Magnitude definitions - declarative input to the resolver.
//!
//! A definition names what kind of change it is (effect type), how it is
//! measured (amount type), and up to four `[min, max]` ranges. Ranges arrive
//! as plain arrays from the host's asset pipeline, so their length is only
//! checked at resolution time.

use serde::{Deserialize, Serialize};

/// Declarative description of one statistic change.
///
/// ## Example
///
/// ```
/// use rpg_ruleset::magnitudes::StatisticChangeMagnitudeDefinition;
///
/// let def = StatisticChangeMagnitudeDefinition::new("DAMAGE", "VALUE")
///     .with_statistic_type("health")
///     .with_element("fire")
///     .with_absolute_value_range(4, 8);
///
/// assert_eq!(def.absolute_value_range, Some(vec![4, 8]));
/// assert!(def.per_level_value_range.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticChangeMagnitudeDefinition {
    /// Statistic the change applies to. Effect pairs supply their own.
    #[serde(default)]
    pub statistic_type_id: Option<String>,

    /// Element carried by the change.
    #[serde(default)]
    pub element_id: Option<String>,

    /// Effect type token (`DAMAGE`, `ALTERATION`).
    pub effect_type: String,

    /// Amount type token (`VALUE`, `PERCENT_OF_MAXIMUM`).
    pub amount_type: String,

    /// Per-level value range, `[min, max]`.
    #[serde(default)]
    pub per_level_value_range: Option<Vec<i32>>,

    /// Per-level percent range, `[min, max]`.
    #[serde(default)]
    pub per_level_percent_range: Option<Vec<f32>>,

    /// Absolute value range, `[min, max]`.
    #[serde(default)]
    pub absolute_value_range: Option<Vec<i32>>,

    /// Absolute percent range, `[min, max]`.
    #[serde(default)]
    pub absolute_percent_range: Option<Vec<f32>>,
}

impl StatisticChangeMagnitudeDefinition {
    /// Create a definition with no ranges or references.
    #[must_use]
    pub fn new(effect_type: impl Into<String>, amount_type: impl Into<String>) -> Self {
        Self {
            effect_type: effect_type.into(),
            amount_type: amount_type.into(),
            ..Self::default()
        }
    }

    /// Set the statistic type (builder pattern).
    #[must_use]
    pub fn with_statistic_type(mut self, id: impl Into<String>) -> Self {
        self.statistic_type_id = Some(id.into());
        self
    }

    /// Set the element (builder pattern).
    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Set the per-level value range (builder pattern).
    #[must_use]
    pub fn with_per_level_value_range(mut self, min: i32, max: i32) -> Self {
        self.per_level_value_range = Some(vec![min, max]);
        self
    }

    /// Set the per-level percent range (builder pattern).
    #[must_use]
    pub fn with_per_level_percent_range(mut self, min: f32, max: f32) -> Self {
        self.per_level_percent_range = Some(vec![min, max]);
        self
    }

    /// Set the absolute value range (builder pattern).
    #[must_use]
    pub fn with_absolute_value_range(mut self, min: i32, max: i32) -> Self {
        self.absolute_value_range = Some(vec![min, max]);
        self
    }

    /// Set the absolute percent range (builder pattern).
    #[must_use]
    pub fn with_absolute_percent_range(mut self, min: f32, max: f32) -> Self {
        self.absolute_percent_range = Some(vec![min, max]);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let def = StatisticChangeMagnitudeDefinition::new("ALTERATION", "PERCENT_OF_MAXIMUM")
            .with_statistic_type("alacrity")
            .with_per_level_percent_range(0.01, 0.02)
            .with_absolute_percent_range(0.1, 0.2);

        assert_eq!(def.effect_type, "ALTERATION");
        assert_eq!(def.amount_type, "PERCENT_OF_MAXIMUM");
        assert_eq!(def.statistic_type_id.as_deref(), Some("alacrity"));
        assert!(def.element_id.is_none());
        assert_eq!(def.absolute_percent_range, Some(vec![0.1, 0.2]));
    }

    #[test]
    fn test_deserialize_missing_ranges() {
        let def: StatisticChangeMagnitudeDefinition = serde_json::from_str(
            r#"{ "effect_type": "DAMAGE", "amount_type": "VALUE", "absolute_value_range": [1, 3] }"#,
        )
        .unwrap();

        assert_eq!(def.absolute_value_range, Some(vec![1, 3]));
        assert!(def.per_level_value_range.is_none());
        assert!(def.statistic_type_id.is_none());
    }

    #[test]
    fn test_deserialize_keeps_bad_length() {
        // Length is a resolution concern, not a decoding one.
        let def: StatisticChangeMagnitudeDefinition = serde_json::from_str(
            r#"{ "effect_type": "DAMAGE", "amount_type": "VALUE", "absolute_value_range": [1, 2, 3] }"#,
        )
        .unwrap();

        assert_eq!(def.absolute_value_range.map(|r| r.len()), Some(3));
    }
}
