//! Resolved magnitudes.
//!
//! A `StatisticChangeMagnitude` is the validated, immutable form of a
//! definition. Its numeric kind is a tagged variant: value magnitudes carry
//! integer ranges, percent magnitudes carry float ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Element, GameRng, StatisticType};
use crate::error::RulesetError;

/// What kind of change a magnitude makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    /// Reduces the statistic.
    Damage,
    /// Changes the statistic in either direction.
    Alteration,
}

impl EffectType {
    /// The token used in definitions.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            EffectType::Damage => "DAMAGE",
            EffectType::Alteration => "ALTERATION",
        }
    }
}

impl FromStr for EffectType {
    type Err = RulesetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DAMAGE" => Ok(EffectType::Damage),
            "ALTERATION" => Ok(EffectType::Alteration),
            _ => Err(RulesetError::invalid_argument(format!(
                "unknown effect type: {s:?}"
            ))),
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// How a magnitude is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountType {
    /// Flat points.
    Value,
    /// Fraction of the statistic's maximum.
    PercentOfMaximum,
}

impl AmountType {
    /// The token used in definitions.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            AmountType::Value => "VALUE",
            AmountType::PercentOfMaximum => "PERCENT_OF_MAXIMUM",
        }
    }
}

impl FromStr for AmountType {
    type Err = RulesetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VALUE" => Ok(AmountType::Value),
            "PERCENT_OF_MAXIMUM" => Ok(AmountType::PercentOfMaximum),
            _ => Err(RulesetError::invalid_argument(format!(
                "unknown amount type: {s:?}"
            ))),
        }
    }
}

impl fmt::Display for AmountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A `[min, max]` bound. Order is not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeRange<T> {
    pub min: T,
    pub max: T,
}

impl<T> MagnitudeRange<T> {
    /// Create a new range.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Per-level and absolute bounds of one numeric kind.
///
/// Either bound may be absent, meaning "no bound of that kind".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeRanges<T> {
    pub per_level: Option<MagnitudeRange<T>>,
    pub absolute: Option<MagnitudeRange<T>>,
}

/// The numeric part of a magnitude, tagged by amount type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MagnitudeAmount {
    /// Flat integer amounts.
    Value(MagnitudeRanges<i32>),
    /// Fractions of the statistic's maximum.
    PercentOfMaximum(MagnitudeRanges<f32>),
}

impl MagnitudeAmount {
    /// The amount type of this variant.
    #[must_use]
    pub const fn amount_type(&self) -> AmountType {
        match self {
            MagnitudeAmount::Value(_) => AmountType::Value,
            MagnitudeAmount::PercentOfMaximum(_) => AmountType::PercentOfMaximum,
        }
    }
}

/// A concrete amount rolled from a magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RolledAmount {
    /// Flat points.
    Value(i32),
    /// Fraction of a maximum (0.25 = a quarter).
    Percent(f32),
}

impl RolledAmount {
    /// Convert into points of a statistic whose maximum is `maximum`.
    ///
    /// Percent amounts round toward zero.
    #[must_use]
    pub fn apply_to(self, maximum: i32) -> i32 {
        match self {
            RolledAmount::Value(v) => v,
            RolledAmount::Percent(p) => (maximum as f32 * p) as i32,
        }
    }
}

/// A validated, immutable statistic change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticChangeMagnitude {
    statistic_type: Option<StatisticType>,
    element: Option<Element>,
    effect_type: EffectType,
    amount: MagnitudeAmount,
}

impl StatisticChangeMagnitude {
    /// Create a magnitude from resolved parts.
    #[must_use]
    pub fn new(
        statistic_type: Option<StatisticType>,
        element: Option<Element>,
        effect_type: EffectType,
        amount: MagnitudeAmount,
    ) -> Self {
        Self {
            statistic_type,
            element,
            effect_type,
            amount,
        }
    }

    /// The statistic this changes, if the ruleset names one.
    #[must_use]
    pub fn statistic_type(&self) -> Option<&StatisticType> {
        self.statistic_type.as_ref()
    }

    /// The element carried, if any.
    #[must_use]
    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    /// Whether this damages or alters the statistic.
    #[must_use]
    pub fn effect_type(&self) -> EffectType {
        self.effect_type
    }

    /// Whether the amount is flat points or a fraction of a maximum.
    #[must_use]
    pub fn amount_type(&self) -> AmountType {
        self.amount.amount_type()
    }

    /// The tagged amount with its ranges.
    #[must_use]
    pub fn amount(&self) -> &MagnitudeAmount {
        &self.amount
    }

    /// Integer ranges, if this is a value magnitude.
    #[must_use]
    pub fn value_ranges(&self) -> Option<&MagnitudeRanges<i32>> {
        match &self.amount {
            MagnitudeAmount::Value(r) => Some(r),
            MagnitudeAmount::PercentOfMaximum(_) => None,
        }
    }

    /// Float ranges, if this is a percent magnitude.
    #[must_use]
    pub fn percent_ranges(&self) -> Option<&MagnitudeRanges<f32>> {
        match &self.amount {
            MagnitudeAmount::PercentOfMaximum(r) => Some(r),
            MagnitudeAmount::Value(_) => None,
        }
    }

    /// Roll a concrete amount for a character of `level`.
    ///
    /// Draws once from each present range, scales the per-level draw by
    /// `level`, and adds the absolute draw. Missing ranges contribute zero.
    pub fn roll(&self, level: u32, rng: &mut GameRng) -> RolledAmount {
        match &self.amount {
            MagnitudeAmount::Value(ranges) => {
                let level = i32::try_from(level).unwrap_or(i32::MAX);
                let per_level = ranges
                    .per_level
                    .map_or(0, |r| rng.roll_int(r.min, r.max));
                let absolute = ranges.absolute.map_or(0, |r| rng.roll_int(r.min, r.max));
                RolledAmount::Value(per_level.saturating_mul(level).saturating_add(absolute))
            }
            MagnitudeAmount::PercentOfMaximum(ranges) => {
                let per_level = ranges
                    .per_level
                    .map_or(0.0, |r| rng.roll_float(r.min, r.max));
                let absolute = ranges
                    .absolute
                    .map_or(0.0, |r| rng.roll_float(r.min, r.max));
                RolledAmount::Percent(per_level * level as f32 + absolute)
            }
        }
    }
}
