//! Decoded data values.
//!
//! Ability definitions carry an opaque payload the host decodes into a
//! `DataMap`. Reactive abilities also receive event parameters in the same
//! shape. The crate never interprets the contents.
//!
//! ## DataValue Types
//!
//! - `Null`: Explicit absence
//! - `Bool`: Flags
//! - `Int`: Whole numbers (cooldowns, charges)
//! - `Float`: Fractional numbers (scaling factors)
//! - `Text`: Strings (tags, names)
//! - `List`: Ordered values
//! - `Map`: Nested maps

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A decoded value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// Explicit null.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
    /// List of values.
    List(Vec<DataValue>),
    /// Nested map.
    Map(DataMap),
}

impl DataValue {
    /// Check if this is `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DataValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float. Int values widen.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(v) => Some(*v),
            DataValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as list reference if this is a List value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[DataValue]> {
        match self {
            DataValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Get as map reference if this is a Map value.
    #[must_use]
    pub fn as_map(&self) -> Option<&DataMap> {
        match self {
            DataValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        DataValue::Bool(v)
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        DataValue::Int(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        DataValue::Int(v as i64)
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Float(v)
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        DataValue::Text(v)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        DataValue::Text(v.to_string())
    }
}

impl From<Vec<DataValue>> for DataValue {
    fn from(v: Vec<DataValue>) -> Self {
        DataValue::List(v)
    }
}

impl From<DataMap> for DataValue {
    fn from(v: DataMap) -> Self {
        DataValue::Map(v)
    }
}

/// String-keyed map of decoded values.
pub type DataMap = FxHashMap<String, DataValue>;
