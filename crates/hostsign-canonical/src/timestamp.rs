use serde_json::{Map, Value};

/// Name of the field injected into top-level object payloads.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Source of the current time in milliseconds since the Unix epoch.
pub type Clock = fn() -> i64;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Returns whether a value counts as present under the host library's rules.
///
/// `null`, `false`, numeric zero and the empty string are absent; everything
/// else, including empty arrays and objects, is present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Sets `timestamp` to the clock's reading unless a truthy one is already present.
pub(crate) fn inject(map: &mut Map<String, Value>, clock: Clock) {
    let present = map.get(TIMESTAMP_FIELD).is_some_and(is_truthy);
    if !present {
        map.insert(TIMESTAMP_FIELD.to_string(), Value::from(clock()));
    }
}
