//! Effect definitions.
//!
//! An effect on a character bundles several statistic changes with optional
//! callbacks. Continuous effects have two callbacks (accompany, other);
//! round-end effects add a third that sees every affected character at once.

use serde::{Deserialize, Serialize};

use crate::magnitudes::StatisticChangeMagnitudeDefinition;

/// A statistic id paired with the change applied to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticMagnitudePair {
    /// Statistic the change applies to.
    pub statistic_type_id: String,
    /// The change.
    pub magnitude: StatisticChangeMagnitudeDefinition,
}

impl StatisticMagnitudePair {
    /// Create a new pair.
    pub fn new(
        statistic_type_id: impl Into<String>,
        magnitude: StatisticChangeMagnitudeDefinition,
    ) -> Self {
        Self {
            statistic_type_id: statistic_type_id.into(),
            magnitude,
        }
    }
}

/// Definition of a continuous effect on a character.
///
/// ## Example
///
/// ```
/// use rpg_ruleset::effects::EffectsOnCharacterDefinition;
/// use rpg_ruleset::magnitudes::StatisticChangeMagnitudeDefinition;
///
/// let haste = EffectsOnCharacterDefinition::new(5)
///     .with_magnitude(
///         "alacrity",
///         StatisticChangeMagnitudeDefinition::new("ALTERATION", "VALUE")
///             .with_absolute_value_range(1, 3),
///     )
///     .with_accompany_effect("logGain");
///
/// assert_eq!(haste.magnitudes.len(), 1);
/// assert!(haste.other_effects_function_id.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectsOnCharacterDefinition {
    /// Ordering hint for the host when several effects apply together.
    #[serde(default)]
    pub priority: i32,

    /// Statistic changes, in order.
    pub magnitudes: Vec<StatisticMagnitudePair>,

    #[serde(default)]
    pub accompany_effect_function_id: Option<String>,

    #[serde(default)]
    pub other_effects_function_id: Option<String>,
}

impl EffectsOnCharacterDefinition {
    /// Create a definition with no magnitudes or callbacks.
    #[must_use]
    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            ..Self::default()
        }
    }

    /// Add a statistic change (builder pattern).
    #[must_use]
    pub fn with_magnitude(
        mut self,
        statistic_type_id: impl Into<String>,
        magnitude: StatisticChangeMagnitudeDefinition,
    ) -> Self {
        self.magnitudes
            .push(StatisticMagnitudePair::new(statistic_type_id, magnitude));
        self
    }

    /// Set the accompany callback (builder pattern).
    #[must_use]
    pub fn with_accompany_effect(mut self, function_id: impl Into<String>) -> Self {
        self.accompany_effect_function_id = Some(function_id.into());
        self
    }

    /// Set the other-effects callback (builder pattern).
    #[must_use]
    pub fn with_other_effects(mut self, function_id: impl Into<String>) -> Self {
        self.other_effects_function_id = Some(function_id.into());
        self
    }
}

/// Definition of an effect applied at round end.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundEndEffectsOnCharacterDefinition {
    #[serde(default)]
    pub priority: i32,

    pub magnitudes: Vec<StatisticMagnitudePair>,

    #[serde(default)]
    pub accompany_effect_function_id: Option<String>,

    #[serde(default)]
    pub other_effects_function_id: Option<String>,

    /// Callback that sees every affected character at once.
    #[serde(default)]
    pub accompany_all_effects_function_id: Option<String>,
}

impl RoundEndEffectsOnCharacterDefinition {
    /// Create a definition with no magnitudes or callbacks.
    #[must_use]
    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            ..Self::default()
        }
    }

    /// Add a statistic change (builder pattern).
    #[must_use]
    pub fn with_magnitude(
        mut self,
        statistic_type_id: impl Into<String>,
        magnitude: StatisticChangeMagnitudeDefinition,
    ) -> Self {
        self.magnitudes
            .push(StatisticMagnitudePair::new(statistic_type_id, magnitude));
        self
    }

    /// Set the accompany callback (builder pattern).
    #[must_use]
    pub fn with_accompany_effect(mut self, function_id: impl Into<String>) -> Self {
        self.accompany_effect_function_id = Some(function_id.into());
        self
    }

    /// Set the other-effects callback (builder pattern).
    #[must_use]
    pub fn with_other_effects(mut self, function_id: impl Into<String>) -> Self {
        self.other_effects_function_id = Some(function_id.into());
        self
    }

    /// Set the accompany-all callback (builder pattern).
    #[must_use]
    pub fn with_accompany_all_effects(mut self, function_id: impl Into<String>) -> Self {
        self.accompany_all_effects_function_id = Some(function_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_end_builder() {
        let def = RoundEndEffectsOnCharacterDefinition::new(2)
            .with_magnitude(
                "health",
                StatisticChangeMagnitudeDefinition::new("DAMAGE", "VALUE"),
            )
            .with_accompany_effect("burn")
            .with_other_effects("smoke")
            .with_accompany_all_effects("announce");

        assert_eq!(def.priority, 2);
        assert_eq!(def.magnitudes[0].statistic_type_id, "health");
        assert_eq!(def.accompany_all_effects_function_id.as_deref(), Some("announce"));
    }

    #[test]
    fn test_deserialize() {
        let def: EffectsOnCharacterDefinition = serde_json::from_str(
            r#"{
                "priority": 5,
                "magnitudes": [
                    {
                        "statistic_type_id": "alacrity",
                        "magnitude": {
                            "effect_type": "ALTERATION",
                            "amount_type": "VALUE",
                            "absolute_value_range": [1, 3]
                        }
                    }
                ],
                "accompany_effect_function_id": "logGain"
            }"#,
        )
        .unwrap();

        assert_eq!(def.priority, 5);
        assert_eq!(def.magnitudes.len(), 1);
        assert_eq!(def.accompany_effect_function_id.as_deref(), Some("logGain"));
        assert!(def.other_effects_function_id.is_none());
    }

    #[test]
    fn test_deserialize_requires_magnitudes() {
        let result: Result<EffectsOnCharacterDefinition, _> =
            serde_json::from_str(r#"{ "priority": 1 }"#);

        assert!(result.is_err());
    }
}
