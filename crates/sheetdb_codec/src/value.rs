//! Typed cell value.

use crate::error::{CodecError, CodecResult};
use crate::kind::FieldKind;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Display;
use std::str::FromStr;

/// A typed cell value.
///
/// `Null` stands for an absent optional value and is written as an empty
/// cell. Decoding never produces `Null`: empty cells are skipped before
/// they reach the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Absent value.
    Null,
    /// Text, also used for `Parsed` fields before they parse it.
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Boolean.
    Bool(bool),
    /// Calendar date.
    Date(NaiveDate),
    /// UTC instant.
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Variant name used in mismatch errors.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
        }
    }

    /// Check if this value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Takes this value as text.
    pub fn into_text(self) -> CodecResult<String> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(CodecError::kind_mismatch(FieldKind::Text, other.variant_name())),
        }
    }

    /// Takes this value as optional text.
    pub fn into_optional_text(self) -> CodecResult<Option<String>> {
        match self {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s)),
            other => Err(CodecError::kind_mismatch(
                FieldKind::OptionalText,
                other.variant_name(),
            )),
        }
    }

    /// Takes this value as an `i64`.
    pub fn as_i64(&self) -> CodecResult<i64> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(CodecError::kind_mismatch(FieldKind::Integer, other.variant_name())),
        }
    }

    /// Takes this value as an `i32`, rejecting values outside its range.
    pub fn as_i32(&self) -> CodecResult<i32> {
        let n = self.as_i64()?;
        i32::try_from(n).map_err(|_| CodecError::OutOfRange {
            value: n,
            target: "i32",
        })
    }

    /// Takes this value as a boolean.
    pub fn as_bool(&self) -> CodecResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(CodecError::kind_mismatch(FieldKind::Boolean, other.variant_name())),
        }
    }

    /// Takes this value as a date.
    pub fn as_date(&self) -> CodecResult<NaiveDate> {
        match self {
            Value::Date(d) => Ok(*d),
            other => Err(CodecError::kind_mismatch(FieldKind::Date, other.variant_name())),
        }
    }

    /// Takes this value as a timestamp.
    pub fn as_timestamp(&self) -> CodecResult<DateTime<Utc>> {
        match self {
            Value::Timestamp(t) => Ok(*t),
            other => Err(CodecError::kind_mismatch(FieldKind::Timestamp, other.variant_name())),
        }
    }

    /// Takes this value as an optional timestamp.
    pub fn as_optional_timestamp(&self) -> CodecResult<Option<DateTime<Utc>>> {
        match self {
            Value::Null => Ok(None),
            other => other.as_timestamp().map(Some),
        }
    }

    /// Parses a text value with `FromStr`, for `Parsed` fields.
    pub fn parse<T>(&self) -> CodecResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self {
            Value::Text(s) => s.trim().parse().map_err(|e: T::Err| CodecError::InvalidParsed {
                type_name: std::any::type_name::<T>(),
                text: s.clone(),
                message: e.to_string(),
            }),
            other => Err(CodecError::kind_mismatch(FieldKind::Parsed, other.variant_name())),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Timestamp(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_conversions() {
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
        assert_eq!(Value::Null.into_optional_text().unwrap(), None);
        assert_eq!(Value::Null.as_optional_timestamp().unwrap(), None);
    }

    #[test]
    fn i32_range_is_checked() {
        assert_eq!(Value::Integer(21).as_i32().unwrap(), 21);
        assert_eq!(
            Value::Integer(i64::from(i32::MAX) + 1).as_i32(),
            Err(CodecError::OutOfRange {
                value: i64::from(i32::MAX) + 1,
                target: "i32",
            })
        );
    }

    #[test]
    fn mismatch_names_both_sides() {
        let err = Value::Bool(true).as_i64().unwrap_err();
        assert_eq!(err.to_string(), "expected integer value, found boolean");
    }

    #[test]
    fn parse_uses_from_str() {
        let v = Value::Text(" 2.5 ".into());
        assert_eq!(v.parse::<f64>().unwrap(), 2.5);
        assert!(matches!(
            Value::Text("abc".into()).parse::<f64>(),
            Err(CodecError::InvalidParsed { .. })
        ));
    }
}
