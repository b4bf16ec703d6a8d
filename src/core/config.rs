//! Ruleset configuration.
//!
//! Rulesets differ in how strict they are about references:
//! - Some require every magnitude to name an element, others don't
//! - Round-advance effects must name every callback, while continuous
//!   effects may leave callbacks unset
//!
//! `RulesetConfig` captures these choices so the resolvers don't hardcode
//! either variant.

use serde::{Deserialize, Serialize};

/// Whether a reference in a definition must be present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// The id must be present, non-empty, and resolve.
    Required,
    /// A missing or empty id is allowed; a present id must still resolve.
    Optional,
}

impl Requirement {
    /// Check if this is `Required`.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Requirement::Required)
    }
}

/// Complete ruleset configuration.
///
/// ## Example
///
/// ```
/// use rpg_ruleset::core::{Requirement, RulesetConfig};
///
/// let config = RulesetConfig::new().with_element(Requirement::Required);
///
/// assert_eq!(config.element, Requirement::Required);
/// assert_eq!(config.round_end_callbacks, Requirement::Required);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetConfig {
    /// Element reference on magnitudes.
    pub element: Requirement,

    /// Statistic-type reference on magnitudes.
    pub statistic_type: Requirement,

    /// Callback ids on continuous (`EffectsOnCharacter`) effects.
    pub continuous_callbacks: Requirement,

    /// Callback ids on round-end effects.
    pub round_end_callbacks: Requirement,
}

impl Default for RulesetConfig {
    fn default() -> Self {
        Self {
            element: Requirement::Optional,
            statistic_type: Requirement::Required,
            continuous_callbacks: Requirement::Optional,
            round_end_callbacks: Requirement::Required,
        }
    }
}

impl RulesetConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element requirement.
    #[must_use]
    pub fn with_element(mut self, requirement: Requirement) -> Self {
        self.element = requirement;
        self
    }

    /// Set the statistic-type requirement.
    #[must_use]
    pub fn with_statistic_type(mut self, requirement: Requirement) -> Self {
        self.statistic_type = requirement;
        self
    }

    /// Set the callback requirement for continuous effects.
    #[must_use]
    pub fn with_continuous_callbacks(mut self, requirement: Requirement) -> Self {
        self.continuous_callbacks = requirement;
        self
    }

    /// Set the callback requirement for round-end effects.
    #[must_use]
    pub fn with_round_end_callbacks(mut self, requirement: Requirement) -> Self {
        self.round_end_callbacks = requirement;
        self
    }
}
