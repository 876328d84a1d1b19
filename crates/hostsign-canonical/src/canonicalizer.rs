use serde_json::{Map, Value};

use crate::timestamp::{self, Clock};

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The canonical encoder rejected the value.
    #[error("canonical serialization failed: {0}")]
    Serialization(String),
}

/// Result of canonicalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalizationResult {
    /// Canonical value tree, suitable for transmission alongside a signature.
    pub payload: Value,
    /// Canonical UTF-8 bytes for `payload`; these are what get signed.
    pub bytes: Vec<u8>,
}

/// Canonicalizer that injects timestamps from a configurable clock.
#[derive(Debug, Clone, Copy)]
pub struct Canonicalizer {
    clock: Clock,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Canonicalizer {
    /// Creates a canonicalizer backed by the system clock.
    pub fn new() -> Self {
        Self {
            clock: timestamp::now_millis,
        }
    }

    /// Creates a canonicalizer that reads time from `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    /// Returns the canonical form of `value` without serializing it.
    ///
    /// Timestamp injection applies to a top-level object only; arrays and
    /// scalars at the top level are sorted and returned as-is.
    pub fn canonical_value(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut top = map.clone();
                timestamp::inject(&mut top, self.clock);
                sort_keys(&Value::Object(top))
            }
            other => sort_keys(other),
        }
    }

    /// Produces the canonical value tree together with its signable bytes.
    pub fn canonicalize(
        &self,
        value: &Value,
    ) -> Result<CanonicalizationResult, CanonicalizationError> {
        let payload = self.canonical_value(value);
        let bytes = to_canonical_bytes(&payload)?;
        Ok(CanonicalizationResult { payload, bytes })
    }
}

/// Canonicalizes `value` using the system clock.
pub fn canonicalize(value: &Value) -> Value {
    Canonicalizer::new().canonical_value(value)
}

/// Recursively re-emits every object with its keys in ascending order.
///
/// Array elements keep their positions. The tree is ordered by code point;
/// this differs from the signed bytes only when keys mix characters above
/// U+FFFF with characters in U+E000..=U+FFFF.
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let mut sorted = Map::new();
            for (key, child) in entries {
                sorted.insert(key.clone(), sort_keys(child));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        scalar => scalar.clone(),
    }
}

/// Serializes a value into the RFC 8785 bytes that get signed.
///
/// Numbers use the ECMAScript shortest form (`2.0` is written `2`), strings
/// escape only quotes, backslashes and control characters, and object keys
/// are ordered by UTF-16 code units.
pub fn to_canonical_bytes(value: &Value) -> Result<Vec<u8>, CanonicalizationError> {
    serde_json_canonicalizer::to_vec(value)
        .map_err(|err| CanonicalizationError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frozen() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn top_level_object_gains_timestamp() {
        let canonical = Canonicalizer::with_clock(frozen).canonical_value(&json!({"b": 1}));
        assert_eq!(canonical, json!({"b": 1, "timestamp": 1_700_000_000_000_i64}));
    }

    #[test]
    fn nested_objects_do_not_gain_timestamp() {
        let canonical =
            Canonicalizer::with_clock(frozen).canonical_value(&json!({"inner": {"x": 1}}));
        assert!(canonical["inner"].get("timestamp").is_none());
    }

    #[test]
    fn top_level_array_is_left_without_timestamp() {
        let input = json!([{"b": 2, "a": 1}, 3]);
        let canonical = Canonicalizer::with_clock(frozen).canonical_value(&input);
        assert_eq!(canonical, json!([{"a": 1, "b": 2}, 3]));
    }

    #[test]
    fn input_is_not_mutated() {
        let input = json!({"z": true});
        let _ = Canonicalizer::with_clock(frozen).canonical_value(&input);
        assert_eq!(input, json!({"z": true}));
    }
}
