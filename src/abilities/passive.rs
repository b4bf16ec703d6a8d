//! Passive abilities - always on, only described.

use super::{Ability, AbilityCore, AbilityKind};

/// An ability with no behavior beyond its description and data.
#[derive(Debug)]
pub struct PassiveAbility {
    core: AbilityCore,
}

impl PassiveAbility {
    pub(crate) fn new(core: AbilityCore) -> Self {
        Self { core }
    }
}

impl Ability for PassiveAbility {
    fn kind(&self) -> AbilityKind {
        AbilityKind::Passive
    }

    fn core(&self) -> &AbilityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AbilityCore {
        &mut self.core
    }
}
