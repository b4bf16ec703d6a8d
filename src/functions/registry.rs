//! Function registry.
//!
//! Definitions refer to behavior by string id ("describeFireball",
//! "logGain"). The registry maps those ids to callables. Each call signature
//! is its own family, so a lookup hands back a statically typed function and
//! the resolvers never cast.
//!
//! Hosts can implement `FunctionRegistry` over their own action system, or
//! fill a `FunctionTable`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{Character, CharacterEventFiring, Entity, Item};
use crate::data::DataMap;
use crate::effects::AffectedCharacter;

/// One argument passed to a use handler.
///
/// Handlers receive `[EventFiring, source, targets...]`.
#[derive(Clone, Copy)]
pub enum UseArgument<'a> {
    /// The event-firing collaborator.
    EventFiring(&'a dyn CharacterEventFiring),
    /// The source or one of the targets.
    Entity(Entity<'a>),
}

impl<'a> UseArgument<'a> {
    /// Get the entity if this argument is one.
    #[must_use]
    pub fn as_entity(&self) -> Option<Entity<'a>> {
        match self {
            UseArgument::Entity(e) => Some(*e),
            UseArgument::EventFiring(_) => None,
        }
    }
}

impl std::fmt::Debug for UseArgument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UseArgument::EventFiring(_) => write!(f, "EventFiring"),
            UseArgument::Entity(e) => write!(f, "{:?}", e),
        }
    }
}

/// Describes an ability to a character.
pub type CharacterDescriptionFn = Arc<dyn Fn(&dyn Character) -> String + Send + Sync>;

/// Describes an ability to an item.
pub type ItemDescriptionFn = Arc<dyn Fn(&dyn Item) -> String + Send + Sync>;

/// Performs an active ability.
pub type UseFn = Arc<dyn for<'a> Fn(&[UseArgument<'a>]) + Send + Sync>;

/// Decides whether a reactive ability fires against an event.
pub type EventPredicateFn = Arc<dyn Fn(&str, &DataMap) -> bool + Send + Sync>;

/// Decides whether a reactive ability fires against another ability.
pub type AbilityPredicateFn = Arc<dyn for<'a> Fn(&str, Entity<'a>) -> bool + Send + Sync>;

/// Reacts to an event.
pub type EventReactionFn = Arc<dyn Fn(&str, &DataMap) + Send + Sync>;

/// Reacts to another ability.
pub type AbilityReactionFn = Arc<dyn for<'a> Fn(&str, Entity<'a>) + Send + Sync>;

/// Accompanies a continuous effect on one character.
pub type EffectCallbackFn = Arc<dyn Fn(&[i32], &dyn Character) + Send + Sync>;

/// Accompanies a round-end effect on one character.
///
/// The flag is `true` while rounds advance and `false` on a mid-round turn
/// change.
pub type RoundEffectCallbackFn = Arc<dyn Fn(&[i32], &dyn Character, bool) + Send + Sync>;

/// Accompanies a round-end effect on every affected character at once.
pub type BatchEffectCallbackFn =
    Arc<dyn for<'a> Fn(&[AffectedCharacter<'a>], bool) + Send + Sync>;

/// Lookup from function id to callable, one method per family.
///
/// Every method defaults to `None`, so implementations only provide the
/// families they support.
pub trait FunctionRegistry: Send + Sync {
    /// Find a character description function.
    fn character_description(&self, _id: &str) -> Option<CharacterDescriptionFn> {
        None
    }

    /// Find an item description function.
    fn item_description(&self, _id: &str) -> Option<ItemDescriptionFn> {
        None
    }

    /// Find a use handler.
    fn use_handler(&self, _id: &str) -> Option<UseFn> {
        None
    }

    /// Find an event predicate.
    fn event_predicate(&self, _id: &str) -> Option<EventPredicateFn> {
        None
    }

    /// Find an ability predicate.
    fn ability_predicate(&self, _id: &str) -> Option<AbilityPredicateFn> {
        None
    }

    /// Find an event reaction.
    fn event_reaction(&self, _id: &str) -> Option<EventReactionFn> {
        None
    }

    /// Find an ability reaction.
    fn ability_reaction(&self, _id: &str) -> Option<AbilityReactionFn> {
        None
    }

    /// Find a continuous effect callback.
    fn effect_callback(&self, _id: &str) -> Option<EffectCallbackFn> {
        None
    }

    /// Find a round-end effect callback.
    fn round_effect_callback(&self, _id: &str) -> Option<RoundEffectCallbackFn> {
        None
    }

    /// Find a round-end batch callback.
    fn batch_effect_callback(&self, _id: &str) -> Option<BatchEffectCallbackFn> {
        None
    }
}

/// In-memory function registry.
///
/// ## Example
///
/// ```
/// use rpg_ruleset::functions::{FunctionRegistry, FunctionTable};
///
/// let table = FunctionTable::new()
///     .with_character_description("describeFireball", |c| format!("{} hurls fire", c.name()));
///
/// assert!(table.character_description("describeFireball").is_some());
/// assert!(table.character_description("describeFrost").is_none());
/// ```
#[derive(Clone, Default)]
pub struct FunctionTable {
    character_descriptions: FxHashMap<String, CharacterDescriptionFn>,
    item_descriptions: FxHashMap<String, ItemDescriptionFn>,
    use_handlers: FxHashMap<String, UseFn>,
    event_predicates: FxHashMap<String, EventPredicateFn>,
    ability_predicates: FxHashMap<String, AbilityPredicateFn>,
    event_reactions: FxHashMap<String, EventReactionFn>,
    ability_reactions: FxHashMap<String, AbilityReactionFn>,
    effect_callbacks: FxHashMap<String, EffectCallbackFn>,
    round_effect_callbacks: FxHashMap<String, RoundEffectCallbackFn>,
    batch_effect_callbacks: FxHashMap<String, BatchEffectCallbackFn>,
}

impl FunctionTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a character description function.
    #[must_use]
    pub fn with_character_description<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: Fn(&dyn Character) -> String + Send + Sync + 'static,
    {
        self.character_descriptions.insert(id.into(), Arc::new(f));
        self
    }

    /// Register an item description function.
    #[must_use]
    pub fn with_item_description<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: Fn(&dyn Item) -> String + Send + Sync + 'static,
    {
        self.item_descriptions.insert(id.into(), Arc::new(f));
        self
    }

    /// Register a use handler.
    #[must_use]
    pub fn with_use_handler<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: for<'a> Fn(&[UseArgument<'a>]) + Send + Sync + 'static,
    {
        self.use_handlers.insert(id.into(), Arc::new(f));
        self
    }

    /// Register an event predicate.
    #[must_use]
    pub fn with_event_predicate<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, &DataMap) -> bool + Send + Sync + 'static,
    {
        self.event_predicates.insert(id.into(), Arc::new(f));
        self
    }

    /// Register an ability predicate.
    #[must_use]
    pub fn with_ability_predicate<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: for<'a> Fn(&str, Entity<'a>) -> bool + Send + Sync + 'static,
    {
        self.ability_predicates.insert(id.into(), Arc::new(f));
        self
    }

    /// Register an event reaction.
    #[must_use]
    pub fn with_event_reaction<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, &DataMap) + Send + Sync + 'static,
    {
        self.event_reactions.insert(id.into(), Arc::new(f));
        self
    }

    /// Register an ability reaction.
    #[must_use]
    pub fn with_ability_reaction<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: for<'a> Fn(&str, Entity<'a>) + Send + Sync + 'static,
    {
        self.ability_reactions.insert(id.into(), Arc::new(f));
        self
    }

    /// Register a continuous effect callback.
    #[must_use]
    pub fn with_effect_callback<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[i32], &dyn Character) + Send + Sync + 'static,
    {
        self.effect_callbacks.insert(id.into(), Arc::new(f));
        self
    }

    /// Register a round-end effect callback.
    #[must_use]
    pub fn with_round_effect_callback<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[i32], &dyn Character, bool) + Send + Sync + 'static,
    {
        self.round_effect_callbacks.insert(id.into(), Arc::new(f));
        self
    }

    /// Register a round-end batch callback.
    #[must_use]
    pub fn with_batch_effect_callback<F>(mut self, id: impl Into<String>, f: F) -> Self
    where
        F: for<'a> Fn(&[AffectedCharacter<'a>], bool) + Send + Sync + 'static,
    {
        self.batch_effect_callbacks.insert(id.into(), Arc::new(f));
        self
    }

    /// Total number of registered functions across all families.
    #[must_use]
    pub fn len(&self) -> usize {
        self.character_descriptions.len()
            + self.item_descriptions.len()
            + self.use_handlers.len()
            + self.event_predicates.len()
            + self.ability_predicates.len()
            + self.event_reactions.len()
            + self.ability_reactions.len()
            + self.effect_callbacks.len()
            + self.round_effect_callbacks.len()
            + self.batch_effect_callbacks.len()
    }

    /// Check if no function is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FunctionRegistry for FunctionTable {
    fn character_description(&self, id: &str) -> Option<CharacterDescriptionFn> {
        self.character_descriptions.get(id).cloned()
    }

    fn item_description(&self, id: &str) -> Option<ItemDescriptionFn> {
        self.item_descriptions.get(id).cloned()
    }

    fn use_handler(&self, id: &str) -> Option<UseFn> {
        self.use_handlers.get(id).cloned()
    }

    fn event_predicate(&self, id: &str) -> Option<EventPredicateFn> {
        self.event_predicates.get(id).cloned()
    }

    fn ability_predicate(&self, id: &str) -> Option<AbilityPredicateFn> {
        self.ability_predicates.get(id).cloned()
    }

    fn event_reaction(&self, id: &str) -> Option<EventReactionFn> {
        self.event_reactions.get(id).cloned()
    }

    fn ability_reaction(&self, id: &str) -> Option<AbilityReactionFn> {
        self.ability_reactions.get(id).cloned()
    }

    fn effect_callback(&self, id: &str) -> Option<EffectCallbackFn> {
        self.effect_callbacks.get(id).cloned()
    }

    fn round_effect_callback(&self, id: &str) -> Option<RoundEffectCallbackFn> {
        self.round_effect_callbacks.get(id).cloned()
    }

    fn batch_effect_callback(&self, id: &str) -> Option<BatchEffectCallbackFn> {
        self.batch_effect_callbacks.get(id).cloned()
    }
}

impl std::fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTable")
            .field("functions", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Mage;

    impl Character for Mage {
        fn id(&self) -> &str {
            "mage"
        }
        fn name(&self) -> &str {
            "Mage"
        }
    }

    #[test]
    fn test_families_are_separate() {
        let table = FunctionTable::new()
            .with_character_description("describe", |c| c.name().to_string())
            .with_event_predicate("onHit", |event, _| event == "hit");

        assert_eq!(table.len(), 2);
        assert!(table.character_description("describe").is_some());
        assert!(table.item_description("describe").is_none());
        assert!(table.event_predicate("onHit").is_some());
        assert!(table.event_reaction("onHit").is_none());
    }

    #[test]
    fn test_lookup_returns_callable() {
        let table = FunctionTable::new()
            .with_character_description("describe", |c| format!("{} casts", c.name()));

        let describe = table.character_description("describe").unwrap();
        assert_eq!(describe(&Mage), "Mage casts");
    }

    #[test]
    fn test_default_registry_is_empty() {
        struct Nothing;
        impl FunctionRegistry for Nothing {}

        assert!(Nothing.use_handler("any").is_none());
        assert!(Nothing.batch_effect_callback("any").is_none());
        assert!(FunctionTable::new().is_empty());
    }

    #[test]
    fn test_use_argument_entity() {
        let mage = Mage;
        let arg = UseArgument::Entity(Entity::Character(&mage));

        assert_eq!(arg.as_entity().map(|e| e.id()), Some("mage"));
        assert_eq!(format!("{:?}", arg), "Character(mage)");
    }
}
