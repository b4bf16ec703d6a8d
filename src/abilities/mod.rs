//! Ability system: definitions, factories, and registry.
//!
//! ## Key Types
//!
//! - `AbilityDefinition`: Shared fields (a passive definition on its own)
//! - `ActiveAbilityDefinition` / `ReactiveAbilityDefinition`: Variant extras
//! - `Ability`: Id, mutable name, descriptions, and data
//! - `AbilityFactory`: Validates definitions and resolves their functions
//! - `AbilityRegistry`: Abilities of a loaded ruleset

pub mod ability;
pub mod definition;
pub mod active;
pub mod passive;
pub mod reactive;
pub mod factory;
pub mod registry;

pub use ability::{Ability, AbilityCore, AbilityKind};
pub use definition::{
    AbilityDefinition, ActiveAbilityDefinition, PassiveAbilityDefinition,
    ReactiveAbilityDefinition,
};
pub use active::ActiveAbility;
pub use passive::PassiveAbility;
pub use reactive::ReactiveAbility;
pub use factory::AbilityFactory;
pub use registry::{AbilityRegistry, LoadedAbility};
