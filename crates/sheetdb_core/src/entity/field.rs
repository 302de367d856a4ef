//! Field descriptors.

use sheetdb_codec::{CodecResult, FieldKind, Value};
use std::fmt;

/// Describes one column of an entity: its header name, semantic kind, and
/// how to read and write it on an instance.
///
/// Getters return [`Value::Null`] for absent optional values. Setters must
/// leave the entity untouched when they return an error.
pub struct Field<T> {
    name: &'static str,
    kind: FieldKind,
    get: fn(&T) -> Value,
    set: fn(&mut T, Value) -> CodecResult<()>,
}

impl<T> Field<T> {
    /// Creates a descriptor.
    pub const fn new(
        name: &'static str,
        kind: FieldKind,
        get: fn(&T) -> Value,
        set: fn(&mut T, Value) -> CodecResult<()>,
    ) -> Self {
        Self {
            name,
            kind,
            get,
            set,
        }
    }

    /// Returns the column name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the semantic kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Reads this field from an entity.
    pub fn get(&self, entity: &T) -> Value {
        (self.get)(entity)
    }

    /// Writes a decoded value into an entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not fit the field.
    pub fn set(&self, entity: &mut T, value: Value) -> CodecResult<()> {
        (self.set)(entity, value)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
