//! Cell text to typed value.

use crate::encoder::DATE_FORMAT;
use crate::error::{CodecError, CodecResult};
use crate::kind::FieldKind;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date forms tried after [`DATE_FORMAT`].
const LENIENT_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Naive date-time forms tried after RFC 3339, read as UTC.
const LENIENT_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Decodes non-empty cell text into a value of the given kind.
///
/// Text kinds keep the text exactly as written. `Parsed` returns the text
/// unchanged for the field to parse.
///
/// # Errors
///
/// Returns the kind-specific `Invalid*` error when the text does not parse.
pub fn decode_cell(kind: FieldKind, text: &str) -> CodecResult<Value> {
    match kind {
        FieldKind::Text | FieldKind::OptionalText | FieldKind::Parsed => {
            Ok(Value::Text(text.to_string()))
        }
        FieldKind::Integer => parse_integer(text).map(Value::Integer),
        FieldKind::Boolean => parse_bool(text).map(Value::Bool),
        FieldKind::Date => parse_date(text).map(Value::Date),
        FieldKind::Timestamp => parse_timestamp(text).map(Value::Timestamp),
    }
}

/// Parses a base-10 integer, ignoring surrounding whitespace.
pub fn parse_integer(text: &str) -> CodecResult<i64> {
    text.trim()
        .parse()
        .map_err(|_| CodecError::InvalidInteger {
            text: text.to_string(),
        })
}

/// Parses `true` or `false`, case-insensitively, ignoring surrounding whitespace.
pub fn parse_bool(text: &str) -> CodecResult<bool> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CodecError::InvalidBoolean {
            text: text.to_string(),
        })
    }
}

/// Parses a date.
///
/// `YYYY-MM-DD` is tried first, then the lenient date forms, then any
/// accepted timestamp form truncated to its UTC date.
pub fn parse_date(text: &str) -> CodecResult<NaiveDate> {
    let trimmed = text.trim();
    if let Some(date) = parse_date_only(trimmed) {
        return Ok(date);
    }
    parse_date_time(trimmed)
        .map(|t| t.date_naive())
        .ok_or_else(|| CodecError::InvalidDate {
            text: text.to_string(),
        })
}

/// Parses a timestamp.
///
/// RFC 3339 (any offset, converted to UTC) is tried first, then naive
/// date-time forms read as UTC, then a bare date at midnight UTC.
pub fn parse_timestamp(text: &str) -> CodecResult<DateTime<Utc>> {
    let trimmed = text.trim();
    parse_date_time(trimmed)
        .or_else(|| {
            parse_date_only(trimmed)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|n| n.and_utc())
        })
        .ok_or_else(|| CodecError::InvalidTimestamp {
            text: text.to_string(),
        })
}

fn parse_date_only(text: &str) -> Option<NaiveDate> {
    std::iter::once(DATE_FORMAT)
        .chain(LENIENT_DATE_FORMATS.iter().copied())
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

fn parse_date_time(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(text) {
        return Some(t.with_timezone(&Utc));
    }
    LENIENT_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|n| n.and_utc())
}
