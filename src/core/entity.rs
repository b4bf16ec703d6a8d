//! Host entity seams.
//!
//! The host engine owns characters and items. This crate only needs to hand
//! them to registered functions, so they are modelled as small traits the
//! host implements for its own types.
//!
//! ## Usage
//!
//! ```
//! use rpg_ruleset::core::{Character, Entity};
//!
//! struct Hero;
//!
//! impl Character for Hero {
//!     fn id(&self) -> &str { "hero" }
//!     fn name(&self) -> &str { "Hero" }
//! }
//!
//! let hero = Hero;
//! let source = Entity::Character(&hero);
//! assert_eq!(source.id(), "hero");
//! assert!(source.is_character());
//! ```

use crate::data::DataMap;

/// A character owned by the host engine.
pub trait Character: Send + Sync {
    /// Stable identifier of the character.
    fn id(&self) -> &str;

    /// Display name of the character.
    fn name(&self) -> &str;

    /// Character level, used to scale per-level magnitudes.
    fn level(&self) -> u32 {
        1
    }
}

/// An item owned by the host engine.
pub trait Item: Send + Sync {
    /// Stable identifier of the item.
    fn id(&self) -> &str;

    /// Display name of the item.
    fn name(&self) -> &str;
}

/// Event-firing collaborator handed to use handlers.
///
/// This crate never calls it; it is passed through untouched so handlers can
/// announce what an ability did.
pub trait CharacterEventFiring: Send + Sync {
    /// Fire an event on behalf of a character.
    fn fire(&self, event: &str, character: &dyn Character, params: &DataMap);
}

/// Either a character or an item.
///
/// Used for ability sources and ability targets.
#[derive(Clone, Copy)]
pub enum Entity<'a> {
    /// A character.
    Character(&'a dyn Character),
    /// An item.
    Item(&'a dyn Item),
}

impl<'a> Entity<'a> {
    /// Identifier of the underlying entity.
    #[must_use]
    pub fn id(&self) -> &'a str {
        match self {
            Entity::Character(c) => c.id(),
            Entity::Item(i) => i.id(),
        }
    }

    /// Display name of the underlying entity.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Entity::Character(c) => c.name(),
            Entity::Item(i) => i.name(),
        }
    }

    /// Check if this is a character.
    #[must_use]
    pub fn is_character(&self) -> bool {
        matches!(self, Entity::Character(_))
    }

    /// Get the character if this is one.
    #[must_use]
    pub fn as_character(&self) -> Option<&'a dyn Character> {
        match self {
            Entity::Character(c) => Some(*c),
            Entity::Item(_) => None,
        }
    }

    /// Get the item if this is one.
    #[must_use]
    pub fn as_item(&self) -> Option<&'a dyn Item> {
        match self {
            Entity::Item(i) => Some(*i),
            Entity::Character(_) => None,
        }
    }
}

impl std::fmt::Debug for Entity<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Character(c) => write!(f, "Character({})", c.id()),
            Entity::Item(i) => write!(f, "Item({})", i.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Knight;

    impl Character for Knight {
        fn id(&self) -> &str {
            "knight"
        }
        fn name(&self) -> &str {
            "Sir Knight"
        }
        fn level(&self) -> u32 {
            4
        }
    }

    struct Sword;

    impl Item for Sword {
        fn id(&self) -> &str {
            "sword"
        }
        fn name(&self) -> &str {
            "Long Sword"
        }
    }

    #[test]
    fn test_entity_character() {
        let knight = Knight;
        let entity = Entity::Character(&knight);

        assert_eq!(entity.id(), "knight");
        assert_eq!(entity.name(), "Sir Knight");
        assert!(entity.is_character());
        assert_eq!(entity.as_character().map(|c| c.level()), Some(4));
        assert!(entity.as_item().is_none());
    }

    #[test]
    fn test_entity_item() {
        let sword = Sword;
        let entity = Entity::Item(&sword);

        assert_eq!(entity.id(), "sword");
        assert!(!entity.is_character());
        assert!(entity.as_character().is_none());
        assert_eq!(format!("{:?}", entity), "Item(sword)");
    }

    #[test]
    fn test_default_level() {
        struct Peasant;
        impl Character for Peasant {
            fn id(&self) -> &str {
                "p"
            }
            fn name(&self) -> &str {
                "Peasant"
            }
        }

        assert_eq!(Peasant.level(), 1);
    }
}
