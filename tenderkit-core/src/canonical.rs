//! Deterministic JSON encoding of signable payloads.
//!
//! The rules are mandated by the verifying chain, not stylistic:
//!
//! 1. object keys are sorted lexicographically at every nesting level;
//! 2. every declared field is emitted, empty or not;
//! 3. arrays keep caller-supplied element order;
//! 4. the output is compact, with no inserted whitespace.
//!
//! The recursion is explicit rather than delegated to a serializer's
//! key-sorting default, so the guarantee holds independent of which
//! `serde_json` features the final binary is built with.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error thrown when a payload cannot be canonically encoded
pub enum SerializationError {
    /// A message carries no type tag, so no verifier can resolve its
    /// structure
    #[error("message lacks a resolvable type")]
    UnresolvableMessage,
    /// The payload could not be converted to JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Serializes `value` into its canonical byte form.
///
/// Two invocations with equal input produce byte-identical output, across
/// calls and across process restarts.
pub fn to_canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let value = serde_json::to_value(value)?;
    let mut out = String::with_capacity(128);
    write_canonical(&mut out, &value)?;
    Ok(out.into_bytes())
}

fn write_canonical(out: &mut String, value: &Value) -> Result<(), SerializationError> {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key)?);
                out.push(':');
                write_canonical(out, &map[key])?;
            }
            out.push('}');
        }
        Value::Array(values) => {
            out.push('[');
            for (i, element) in values.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(out, element)?;
            }
            out.push(']');
        }
        // scalars: string escaping and number formatting are serde_json's
        scalar => out.push_str(&serde_json::to_string(scalar)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: &Value) -> String {
        String::from_utf8(to_canonical_json(value).unwrap()).unwrap()
    }

    #[test]
    fn sorts_keys_recursively() {
        let value = json!({
            "zebra": { "b": 1, "a": { "d": 4, "c": 3 } },
            "alpha": 0
        });
        assert_eq!(encode(&value), r#"{"alpha":0,"zebra":{"a":{"c":3,"d":4},"b":1}}"#);
    }

    #[test]
    fn preserves_array_order() {
        let value = json!({ "msgs": [3, 1, 2, { "z": 0, "a": 0 }] });
        assert_eq!(encode(&value), r#"{"msgs":[3,1,2,{"a":0,"z":0}]}"#);
    }

    #[test]
    fn keeps_empty_and_null_fields() {
        let value = json!({ "memo": "", "amount": [], "to": null });
        assert_eq!(encode(&value), r#"{"amount":[],"memo":"","to":null}"#);
    }

    #[test]
    fn escapes_strings_like_serde_json() {
        let value = json!({ "memo": "line\nbreak \"quoted\"" });
        assert_eq!(encode(&value), r#"{"memo":"line\nbreak \"quoted\""}"#);
    }

    #[test]
    fn deterministic_across_calls() {
        let value = json!({ "fee": { "gas": "200000", "amount": [] }, "memo": "x" });
        assert_eq!(to_canonical_json(&value).unwrap(), to_canonical_json(&value).unwrap());
    }
}
