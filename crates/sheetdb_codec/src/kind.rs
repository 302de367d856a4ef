//! Semantic field kinds.

use std::fmt;

/// The semantic type of an entity field.
///
/// The set is closed: every field of every entity declares one of these,
/// and coercion is a plain `match` on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Text that defaults to the empty string.
    Text,
    /// Text that may be absent. An empty cell reads back as absent.
    OptionalText,
    /// Signed integer (`i64`, or narrower with a range check).
    Integer,
    /// `true` / `false`.
    Boolean,
    /// Calendar date without time.
    Date,
    /// UTC instant. May be absent when the field is optional.
    Timestamp,
    /// Any other type; the raw text is passed through and the field parses
    /// it itself via `FromStr`.
    Parsed,
}

impl FieldKind {
    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::OptionalText => "optional text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Parsed => "parsed",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
