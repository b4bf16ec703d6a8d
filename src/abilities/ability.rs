//! Behavior shared by every ability.

use crate::core::{Character, Item};
use crate::data::DataMap;
use crate::error::{ensure_non_empty, Result};
use crate::functions::{CharacterDescriptionFn, ItemDescriptionFn};

/// Which factory built an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbilityKind {
    /// Used by a source on targets.
    Active,
    /// Always on; only describes itself and carries data.
    Passive,
    /// Fires in response to events and other abilities.
    Reactive,
}

/// Resolved fields every ability carries.
///
/// Only the display name changes after construction.
pub struct AbilityCore {
    id: String,
    name: String,
    data: DataMap,
    character_description: CharacterDescriptionFn,
    item_description: ItemDescriptionFn,
}

impl AbilityCore {
    pub(crate) fn new(
        id: String,
        name: String,
        data: DataMap,
        character_description: CharacterDescriptionFn,
        item_description: ItemDescriptionFn,
    ) -> Self {
        Self {
            id,
            name,
            data,
            character_description,
            item_description,
        }
    }
}

impl std::fmt::Debug for AbilityCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbilityCore")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// An ability a character or item exposes to the host engine.
///
/// Implementors only provide `kind`, `core`, and `core_mut`.
pub trait Ability: Send + Sync {
    /// Which factory built this ability.
    fn kind(&self) -> AbilityKind;

    /// Shared resolved fields.
    fn core(&self) -> &AbilityCore;

    /// Shared resolved fields, mutably.
    fn core_mut(&mut self) -> &mut AbilityCore;

    /// Identifier fixed at construction.
    fn id(&self) -> &str {
        &self.core().id
    }

    /// Current display name.
    fn name(&self) -> &str {
        &self.core().name
    }

    /// Rename the ability. Empty names are rejected.
    fn set_name(&mut self, name: &str) -> Result<()> {
        ensure_non_empty(name, "ability name")?;
        self.core_mut().name = name.to_string();
        Ok(())
    }

    /// Describe the ability as held by `character`.
    fn describe_character(&self, character: &dyn Character) -> String {
        (self.core().character_description)(character)
    }

    /// Describe the ability as granted by `item`.
    fn describe_item(&self, item: &dyn Item) -> String {
        (self.core().item_description)(item)
    }

    /// Decoded data payload.
    fn data(&self) -> &DataMap {
        &self.core().data
    }
}
