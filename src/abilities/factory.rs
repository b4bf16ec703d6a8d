//! Ability factories.
//!
//! Every factory method follows the same steps:
//! 1. Check every string id is non-empty
//! 2. Resolve every function id through the registry
//! 3. Decode the data payload once
//!
//! Any failure aborts the whole definition; nothing half-built escapes.

use std::sync::Arc;

use tracing::debug;

use crate::core::CharacterEventFiring;
use crate::data::DataCodec;
use crate::error::{ensure_non_empty, RulesetError, Result};
use crate::functions::FunctionRegistry;

use super::{
    AbilityCore, AbilityDefinition, ActiveAbility, ActiveAbilityDefinition, PassiveAbility,
    ReactiveAbility, ReactiveAbilityDefinition,
};

/// Builds active, passive, and reactive abilities.
#[derive(Clone)]
pub struct AbilityFactory {
    functions: Arc<dyn FunctionRegistry>,
    codec: Arc<dyn DataCodec>,
    events: Arc<dyn CharacterEventFiring>,
}

impl AbilityFactory {
    /// Create a factory.
    ///
    /// `events` is handed to every use handler of the active abilities it
    /// builds.
    pub fn new(
        functions: Arc<dyn FunctionRegistry>,
        codec: Arc<dyn DataCodec>,
        events: Arc<dyn CharacterEventFiring>,
    ) -> Self {
        Self {
            functions,
            codec,
            events,
        }
    }

    /// Build an active ability.
    pub fn active(&self, definition: &ActiveAbilityDefinition) -> Result<ActiveAbility> {
        validate_common(&definition.ability)?;
        ensure_non_empty(&definition.use_function_id, "use function id")?;
        for target_type in &definition.target_types {
            ensure_non_empty(target_type, "target type")?;
        }

        let use_handler = require(
            self.functions.use_handler(&definition.use_function_id),
            "use",
            &definition.use_function_id,
        )?;
        let core = self.core(&definition.ability)?;

        debug!(ability = %definition.ability.id, "Built active ability");
        Ok(ActiveAbility::new(
            core,
            definition.target_types.clone(),
            use_handler,
            Arc::clone(&self.events),
        ))
    }

    /// Build a passive ability.
    pub fn passive(&self, definition: &AbilityDefinition) -> Result<PassiveAbility> {
        validate_common(definition)?;
        let core = self.core(definition)?;

        debug!(ability = %definition.id, "Built passive ability");
        Ok(PassiveAbility::new(core))
    }

    /// Build a reactive ability.
    pub fn reactive(&self, definition: &ReactiveAbilityDefinition) -> Result<ReactiveAbility> {
        validate_common(&definition.ability)?;
        ensure_non_empty(
            &definition.fires_against_event_function_id,
            "fires against event function id",
        )?;
        ensure_non_empty(
            &definition.fires_against_ability_function_id,
            "fires against ability function id",
        )?;
        ensure_non_empty(
            &definition.react_to_event_function_id,
            "react to event function id",
        )?;
        ensure_non_empty(
            &definition.react_to_ability_function_id,
            "react to ability function id",
        )?;

        let fires_against_event = require(
            self.functions
                .event_predicate(&definition.fires_against_event_function_id),
            "fires against event",
            &definition.fires_against_event_function_id,
        )?;
        let fires_against_ability = require(
            self.functions
                .ability_predicate(&definition.fires_against_ability_function_id),
            "fires against ability",
            &definition.fires_against_ability_function_id,
        )?;
        let react_to_event = require(
            self.functions
                .event_reaction(&definition.react_to_event_function_id),
            "react to event",
            &definition.react_to_event_function_id,
        )?;
        let react_to_ability = require(
            self.functions
                .ability_reaction(&definition.react_to_ability_function_id),
            "react to ability",
            &definition.react_to_ability_function_id,
        )?;
        let core = self.core(&definition.ability)?;

        debug!(ability = %definition.ability.id, "Built reactive ability");
        Ok(ReactiveAbility::new(
            core,
            fires_against_event,
            fires_against_ability,
            react_to_event,
            react_to_ability,
        ))
    }

    /// Resolve descriptions and decode data. Fields are already validated.
    fn core(&self, definition: &AbilityDefinition) -> Result<AbilityCore> {
        let character_description = require(
            self.functions
                .character_description(&definition.character_description_function_id),
            "character description",
            &definition.character_description_function_id,
        )?;
        let item_description = require(
            self.functions
                .item_description(&definition.item_description_function_id),
            "item description",
            &definition.item_description_function_id,
        )?;
        let data = self.codec.decode(&definition.data)?;

        Ok(AbilityCore::new(
            definition.id.clone(),
            definition.name.clone(),
            data,
            character_description,
            item_description,
        ))
    }
}

impl std::fmt::Debug for AbilityFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbilityFactory").finish_non_exhaustive()
    }
}

fn validate_common(definition: &AbilityDefinition) -> Result<()> {
    ensure_non_empty(&definition.id, "ability id")?;
    ensure_non_empty(&definition.name, "ability name")?;
    ensure_non_empty(&definition.data, "ability data")?;
    ensure_non_empty(
        &definition.character_description_function_id,
        "character description function id",
    )?;
    ensure_non_empty(
        &definition.item_description_function_id,
        "item description function id",
    )
}

fn require<F>(found: Option<F>, what: &str, id: &str) -> Result<F> {
    found.ok_or_else(|| RulesetError::invalid_argument(format!("unknown {what} function: {id:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::Ability;
    use crate::core::{Character, Item};
    use crate::data::{DataMap, JsonDataCodec};
    use crate::functions::FunctionTable;

    struct Silent;

    impl CharacterEventFiring for Silent {
        fn fire(&self, _event: &str, _character: &dyn Character, _params: &DataMap) {}
    }

    fn factory(functions: FunctionTable) -> AbilityFactory {
        AbilityFactory::new(Arc::new(functions), Arc::new(JsonDataCodec), Arc::new(Silent))
    }

    fn descriptions() -> FunctionTable {
        FunctionTable::new()
            .with_character_description("describe", |c| format!("{} is sturdy", c.name()))
            .with_item_description("describeItem", |i| format!("{} is sturdy", i.name()))
    }

    fn sturdy() -> AbilityDefinition {
        AbilityDefinition::new("sturdy", "Sturdy")
            .with_data(r#"{ "armor": 1 }"#)
            .with_descriptions("describe", "describeItem")
    }

    #[test]
    fn test_passive() {
        let ability = factory(descriptions()).passive(&sturdy()).unwrap();

        assert_eq!(ability.id(), "sturdy");
        assert_eq!(ability.kind(), crate::abilities::AbilityKind::Passive);
        assert_eq!(ability.data()["armor"].as_int(), Some(1));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let factory = factory(descriptions());

        let mut def = sturdy();
        def.id.clear();
        assert!(factory.passive(&def).is_err());

        let mut def = sturdy();
        def.data.clear();
        assert!(factory.passive(&def).is_err());

        let mut def = sturdy();
        def.item_description_function_id.clear();
        assert!(factory.passive(&def).is_err());
    }

    #[test]
    fn test_unknown_description_rejected() {
        let factory = factory(FunctionTable::new().with_character_description("describe", |_| String::new()));

        let err = factory.passive(&sturdy()).unwrap_err();
        assert!(err.to_string().contains("item description"));
    }

    #[test]
    fn test_bad_payload_rejected() {
        let factory = factory(descriptions());

        assert!(factory.passive(&sturdy().with_data("not json")).is_err());
    }

    #[test]
    fn test_empty_target_type_rejected() {
        let functions = descriptions().with_use_handler("use", |_| {});
        let factory = factory(functions);

        let def = ActiveAbilityDefinition::new(sturdy(), "use").with_target_type("");
        assert!(factory.active(&def).is_err());

        let def = ActiveAbilityDefinition::new(sturdy(), "use").with_target_type("ally");
        let ability = factory.active(&def).unwrap();
        assert_eq!(ability.target_types(), ["ally".to_string()]);
    }

    #[test]
    fn test_reactive_requires_all_functions() {
        let functions = descriptions()
            .with_event_predicate("onHit", |_, _| true)
            .with_ability_predicate("onAbility", |_, _| false)
            .with_event_reaction("counter", |_, _| {});
        let factory = factory(functions);

        let def = ReactiveAbilityDefinition::new(sturdy())
            .with_event_functions("onHit", "counter")
            .with_ability_functions("onAbility", "counterAbility");

        let err = factory.reactive(&def).unwrap_err();
        assert!(err.to_string().contains("react to ability"));
    }
}
