//! Payload decoding.
//!
//! Ability definitions carry their data as a serialized string. The factory
//! decodes it once, through the `DataCodec` seam, when the ability is built.

use crate::error::{RulesetError, Result};

use super::value::DataMap;

/// Decodes an opaque payload into a `DataMap`.
pub trait DataCodec: Send + Sync {
    /// Decode `payload`. Malformed payloads fail with `InvalidArgument`.
    fn decode(&self, payload: &str) -> Result<DataMap>;
}

/// Codec for JSON object payloads.
///
/// ```
/// use rpg_ruleset::data::{DataCodec, JsonDataCodec};
///
/// let data = JsonDataCodec.decode(r#"{ "cooldown": 2 }"#).unwrap();
/// assert_eq!(data["cooldown"].as_int(), Some(2));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDataCodec;

impl DataCodec for JsonDataCodec {
    fn decode(&self, payload: &str) -> Result<DataMap> {
        serde_json::from_str(payload).map_err(|e| {
            RulesetError::invalid_argument(format!("data payload is not a JSON object: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataValue;

    #[test]
    fn test_decode_object() {
        let data = JsonDataCodec
            .decode(r#"{ "charges": 3, "element": "fire" }"#)
            .unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data["charges"], DataValue::Int(3));
        assert_eq!(data["element"].as_text(), Some("fire"));
    }

    #[test]
    fn test_decode_empty_object() {
        assert!(JsonDataCodec.decode("{}").unwrap().is_empty());
    }

    #[test]
    fn test_reject_non_object() {
        let err = JsonDataCodec.decode("[1, 2]").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_reject_malformed() {
        assert!(JsonDataCodec.decode("{ charges: ").is_err());
    }
}
