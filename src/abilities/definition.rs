//! Ability definitions - static ability data.
//!
//! Definitions arrive from the host's asset pipeline. Every field is a
//! string: ids, function ids, and a serialized data payload. The factory
//! validates and resolves them.

use serde::{Deserialize, Serialize};

/// Fields shared by every ability. On its own, a passive ability.
///
/// ## Example
///
/// ```
/// use rpg_ruleset::abilities::AbilityDefinition;
///
/// let thick_skin = AbilityDefinition::new("thickSkin", "Thick Skin")
///     .with_data(r#"{ "armor": 2 }"#)
///     .with_descriptions("describeThickSkin", "describeThickSkinItem");
///
/// assert_eq!(thick_skin.id, "thickSkin");
/// assert_eq!(thick_skin.character_description_function_id, "describeThickSkin");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDefinition {
    /// Unique identifier.
    pub id: String,

    /// Initial display name.
    pub name: String,

    /// Serialized data payload, decoded once by the factory.
    pub data: String,

    pub character_description_function_id: String,

    pub item_description_function_id: String,
}

/// Passive abilities need nothing beyond the shared fields.
pub type PassiveAbilityDefinition = AbilityDefinition;

impl AbilityDefinition {
    /// Create a definition with an empty object payload.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data: "{}".to_string(),
            ..Self::default()
        }
    }

    /// Set the data payload (builder pattern).
    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Set both description function ids (builder pattern).
    #[must_use]
    pub fn with_descriptions(
        mut self,
        character_description_function_id: impl Into<String>,
        item_description_function_id: impl Into<String>,
    ) -> Self {
        self.character_description_function_id = character_description_function_id.into();
        self.item_description_function_id = item_description_function_id.into();
        self
    }
}

/// Definition of an ability a character or item uses on targets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveAbilityDefinition {
    #[serde(flatten)]
    pub ability: AbilityDefinition,

    /// Use handler function id.
    pub use_function_id: String,

    /// Target type ids the ability accepts.
    #[serde(default)]
    pub target_types: Vec<String>,
}

impl ActiveAbilityDefinition {
    /// Create an active definition.
    #[must_use]
    pub fn new(ability: AbilityDefinition, use_function_id: impl Into<String>) -> Self {
        Self {
            ability,
            use_function_id: use_function_id.into(),
            target_types: Vec::new(),
        }
    }

    /// Add a target type (builder pattern).
    #[must_use]
    pub fn with_target_type(mut self, target_type: impl Into<String>) -> Self {
        self.target_types.push(target_type.into());
        self
    }
}

/// Definition of an ability that reacts to events and other abilities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactiveAbilityDefinition {
    #[serde(flatten)]
    pub ability: AbilityDefinition,

    pub fires_against_event_function_id: String,

    pub fires_against_ability_function_id: String,

    pub react_to_event_function_id: String,

    pub react_to_ability_function_id: String,
}

impl ReactiveAbilityDefinition {
    /// Create a reactive definition.
    #[must_use]
    pub fn new(ability: AbilityDefinition) -> Self {
        Self {
            ability,
            ..Self::default()
        }
    }

    /// Set the event predicate and reaction (builder pattern).
    #[must_use]
    pub fn with_event_functions(
        mut self,
        fires_against_event_function_id: impl Into<String>,
        react_to_event_function_id: impl Into<String>,
    ) -> Self {
        self.fires_against_event_function_id = fires_against_event_function_id.into();
        self.react_to_event_function_id = react_to_event_function_id.into();
        self
    }

    /// Set the ability predicate and reaction (builder pattern).
    #[must_use]
    pub fn with_ability_functions(
        mut self,
        fires_against_ability_function_id: impl Into<String>,
        react_to_ability_function_id: impl Into<String>,
    ) -> Self {
        self.fires_against_ability_function_id = fires_against_ability_function_id.into();
        self.react_to_ability_function_id = react_to_ability_function_id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payload() {
        let def = AbilityDefinition::new("a", "A");
        assert_eq!(def.data, "{}");
        assert!(def.character_description_function_id.is_empty());
    }

    #[test]
    fn test_active_builder() {
        let def = ActiveAbilityDefinition::new(
            AbilityDefinition::new("fireball", "Fireball").with_descriptions("d", "di"),
            "castFireball",
        )
        .with_target_type("enemy")
        .with_target_type("item");

        assert_eq!(def.use_function_id, "castFireball");
        assert_eq!(def.target_types, vec!["enemy", "item"]);
    }

    #[test]
    fn test_reactive_flattened_json() {
        let def: ReactiveAbilityDefinition = serde_json::from_str(
            r#"{
                "id": "riposte",
                "name": "Riposte",
                "data": "{}",
                "character_description_function_id": "d",
                "item_description_function_id": "di",
                "fires_against_event_function_id": "onHit",
                "fires_against_ability_function_id": "onAbility",
                "react_to_event_function_id": "counter",
                "react_to_ability_function_id": "counterAbility"
            }"#,
        )
        .unwrap();

        assert_eq!(def.ability.id, "riposte");
        assert_eq!(def.fires_against_event_function_id, "onHit");
        assert_eq!(def.react_to_ability_function_id, "counterAbility");
    }
}
