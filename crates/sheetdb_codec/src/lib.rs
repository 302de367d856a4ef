//! # SheetDB Codec
//!
//! Cell text coercion for SheetDB.
//!
//! Every sheet cell is stored as text. This crate converts between that
//! text and typed [`Value`]s, driven by a closed set of semantic
//! [`FieldKind`]s:
//!
//! | Kind | Written as | Read with |
//! |------|------------|-----------|
//! | `Text`, `OptionalText` | as-is | as-is |
//! | `Integer` | base 10 | base 10, surrounding whitespace ignored |
//! | `Boolean` | `true` / `false` | case-insensitive `true` / `false` |
//! | `Date` | `YYYY-MM-DD` | `YYYY-MM-DD`, then lenient date forms |
//! | `Timestamp` | RFC 3339, nanoseconds, `Z` | RFC 3339, then lenient forms |
//! | `Parsed` | the value's text | handed to the field as text |
//!
//! ## Usage
//!
//! ```
//! use sheetdb_codec::{decode_cell, encode_cell, FieldKind, Value};
//!
//! let value = decode_cell(FieldKind::Integer, " 42 ").unwrap();
//! assert_eq!(value, Value::Integer(42));
//! assert_eq!(encode_cell(&value), "42");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod kind;
mod value;

pub use decoder::{decode_cell, parse_bool, parse_date, parse_integer, parse_timestamp};
pub use encoder::{encode_cell, DATE_FORMAT};
pub use error::{CodecError, CodecResult};
pub use kind::FieldKind;
pub use value::Value;
