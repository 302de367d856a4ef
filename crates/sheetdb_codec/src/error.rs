//! Error types for the codec crate.

use crate::kind::FieldKind;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while coercing cell text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Text is not a base-10 integer.
    #[error("invalid integer: {text:?}")]
    InvalidInteger {
        /// The offending text.
        text: String,
    },

    /// Text is neither `true` nor `false`.
    #[error("invalid boolean: {text:?}")]
    InvalidBoolean {
        /// The offending text.
        text: String,
    },

    /// Text matches none of the accepted date forms.
    #[error("invalid date: {text:?}")]
    InvalidDate {
        /// The offending text.
        text: String,
    },

    /// Text matches none of the accepted timestamp forms.
    #[error("invalid timestamp: {text:?}")]
    InvalidTimestamp {
        /// The offending text.
        text: String,
    },

    /// A `Parsed` field rejected its text.
    #[error("cannot parse {text:?} as {type_name}: {message}")]
    InvalidParsed {
        /// Rust type the field parses into.
        type_name: &'static str,
        /// The offending text.
        text: String,
        /// The parser's own message.
        message: String,
    },

    /// An integer does not fit the field's width.
    #[error("integer {value} out of range for {target}")]
    OutOfRange {
        /// The decoded value.
        value: i64,
        /// Name of the target type.
        target: &'static str,
    },

    /// A value of one kind was handed to a field of another.
    #[error("expected {expected} value, found {found}")]
    KindMismatch {
        /// Kind the field accepts.
        expected: FieldKind,
        /// Variant that was supplied.
        found: &'static str,
    },
}

impl CodecError {
    /// Creates a kind mismatch error.
    pub fn kind_mismatch(expected: FieldKind, found: &'static str) -> Self {
        Self::KindMismatch { expected, found }
    }
}
