//! Statistic change magnitudes.
//!
//! - `StatisticChangeMagnitudeDefinition`: declarative input
//! - `StatisticChangeMagnitude`: validated, immutable output
//! - `MagnitudeResolver`: turns the first into the second

mod definition;
mod magnitude;
mod resolver;

pub use definition::StatisticChangeMagnitudeDefinition;
pub use magnitude::{
    AmountType, EffectType, MagnitudeAmount, MagnitudeRange, MagnitudeRanges, RolledAmount,
    StatisticChangeMagnitude,
};
pub use resolver::MagnitudeResolver;
