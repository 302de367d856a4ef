//! Typed value to cell text.

use crate::value::Value;
use chrono::SecondsFormat;

/// Fixed pattern for dates, used for writing and tried first when reading.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Encodes a value as cell text.
///
/// `Null` becomes the empty cell. Timestamps are written as RFC 3339 with
/// nanosecond precision and a `Z` suffix so they read back unchanged.
#[must_use]
pub fn encode_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Text(s) => s.clone(),
        Value::Integer(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Date(d) => d.format(DATE_FORMAT).to_string(),
        Value::Timestamp(t) => t.to_rfc3339_opts(SecondsFormat::Nanos, true),
    }
}
