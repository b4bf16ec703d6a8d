//! Opaque data payloads and their decoding.
//!
//! - `DataValue` / `DataMap`: decoded payloads and event parameters
//! - `DataCodec`: decodes a serialized payload (`JsonDataCodec` provided)

mod value;
mod codec;

pub use value::{DataMap, DataValue};
pub use codec::{DataCodec, JsonDataCodec};
