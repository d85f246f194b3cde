use crate::canonical::SerializationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque ledger message: a routing type tag plus a pre-validated JSON
/// payload.
///
/// This library never inspects `value`; it only guarantees the payload is
/// carried through the canonical encoding in caller-supplied order. The
/// type tag is what lets the chain resolve the payload's structure, so a
/// message without one cannot be signed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msg {
    #[serde(rename = "type")]
    pub ty: String,
    pub value: Value,
}

impl Msg {
    /// Wraps an arbitrary serializable payload under the given type tag.
    pub fn new<T: Serialize>(ty: impl Into<String>, value: &T) -> Result<Self, SerializationError> {
        Ok(Self { ty: ty.into(), value: serde_json::to_value(value)? })
    }
}
