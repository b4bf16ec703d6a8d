//! Active abilities - used by a source on targets.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{CharacterEventFiring, Entity};
use crate::functions::{UseArgument, UseFn};

use super::{Ability, AbilityCore, AbilityKind};

/// An ability used by a character or item on targets.
pub struct ActiveAbility {
    core: AbilityCore,
    target_types: Vec<String>,
    use_handler: UseFn,
    events: Arc<dyn CharacterEventFiring>,
}

impl ActiveAbility {
    pub(crate) fn new(
        core: AbilityCore,
        target_types: Vec<String>,
        use_handler: UseFn,
        events: Arc<dyn CharacterEventFiring>,
    ) -> Self {
        Self {
            core,
            target_types,
            use_handler,
            events,
        }
    }

    /// Target type ids the ability accepts.
    #[must_use]
    pub fn target_types(&self) -> &[String] {
        &self.target_types
    }

    /// Use the ability.
    ///
    /// The handler receives `[EventFiring, source, targets...]` in that
    /// order.
    pub fn use_ability(&self, source: Entity<'_>, targets: &[Entity<'_>]) {
        let mut args: SmallVec<[UseArgument<'_>; 4]> = SmallVec::with_capacity(targets.len() + 2);
        args.push(UseArgument::EventFiring(self.events.as_ref()));
        args.push(UseArgument::Entity(source));
        args.extend(targets.iter().copied().map(UseArgument::Entity));

        trace!(ability = %self.id(), source = source.id(), targets = targets.len(), "Using ability");
        (self.use_handler)(&args[..]);
    }
}

impl Ability for ActiveAbility {
    fn kind(&self) -> AbilityKind {
        AbilityKind::Active
    }

    fn core(&self) -> &AbilityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AbilityCore {
        &mut self.core
    }
}

impl std::fmt::Debug for ActiveAbility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveAbility")
            .field("core", &self.core)
            .field("target_types", &self.target_types)
            .finish_non_exhaustive()
    }
}
