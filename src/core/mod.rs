//! Core types: host entity seams, rules catalogs, configuration, RNG.
//!
//! Everything here is shared by the magnitude, effect, and ability
//! resolvers. The host engine supplies characters, items, and catalogs;
//! the ruleset configuration picks which references are mandatory.

pub mod entity;
pub mod catalog;
pub mod config;
pub mod rng;

pub use entity::{Character, CharacterEventFiring, Entity, Item};
pub use catalog::{Catalog, CatalogEntry, Element, Lookup, StatisticType};
pub use config::{Requirement, RulesetConfig};
pub use rng::GameRng;
