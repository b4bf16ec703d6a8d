//! Function registry: resolving behavior ids to typed callables.

mod registry;

pub use registry::{
    AbilityPredicateFn, AbilityReactionFn, BatchEffectCallbackFn, CharacterDescriptionFn,
    EffectCallbackFn, EventPredicateFn, EventReactionFn, FunctionRegistry, FunctionTable,
    ItemDescriptionFn, RoundEffectCallbackFn, UseArgument, UseFn,
};
