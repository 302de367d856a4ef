//! Column mapping between entity fields and sheet columns.

use super::field::Field;
use super::meta::EntityMeta;
use super::Entity;
use crate::error::{CoreError, CoreResult};
use sheetdb_codec::{decode_cell, encode_cell};
use sheetdb_storage::SheetRow;
use std::collections::HashSet;
use tracing::warn;

/// The ordered column layout of an entity type.
///
/// Columns are the [`EntityMeta`] fields plus [`Entity::fields`], sorted by
/// name. That order is the header written on every rewrite. When reading,
/// header cells are matched to fields by name, ignoring case and
/// surrounding whitespace, so the sheet's own column order does not matter.
#[derive(Debug, Clone)]
pub struct ColumnMapping<T> {
    fields: Vec<Field<T>>,
}

/// Header cells of a loaded sheet resolved against a [`ColumnMapping`].
#[derive(Debug, Clone)]
pub struct Columns<T> {
    mapped: Vec<(usize, Field<T>)>,
    unmapped: Vec<String>,
}

impl<T> Columns<T> {
    /// `(0-based column index, field)` for every header cell that names a field.
    #[must_use]
    pub fn mapped(&self) -> &[(usize, Field<T>)] {
        &self.mapped
    }

    /// Non-empty header cells that name no field.
    #[must_use]
    pub fn unmapped(&self) -> &[String] {
        &self.unmapped
    }

    /// Returns true if some header cell maps to the named field.
    #[must_use]
    pub fn contains(&self, field_name: &str) -> bool {
        self.mapped.iter().any(|(_, f)| f.name() == field_name)
    }
}

impl<T: Entity> ColumnMapping<T> {
    /// Builds the mapping for `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if two fields share a name, ignoring case.
    pub fn new() -> CoreResult<Self> {
        let mut fields = EntityMeta::fields::<T>();
        fields.extend(T::fields());

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name().to_ascii_lowercase()) {
                return Err(CoreError::invalid_operation(format!(
                    "{} declares column {:?} more than once",
                    T::NAME,
                    field.name()
                )));
            }
        }

        fields.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(Self { fields })
    }

    /// Fields in column order.
    #[must_use]
    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    /// The header row.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name().to_string()).collect()
    }

    /// Looks up the field a header cell names.
    #[must_use]
    pub fn field(&self, header_cell: &str) -> Option<Field<T>> {
        let name = header_cell.trim_start_matches('\u{feff}').trim();
        if name.is_empty() {
            return None;
        }
        self.fields
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// Resolves a sheet header against this mapping.
    #[must_use]
    pub fn resolve(&self, header: &[String]) -> Columns<T> {
        let mut mapped = Vec::new();
        let mut unmapped = Vec::new();

        for (column, cell) in header.iter().enumerate() {
            match self.field(cell) {
                Some(field) => mapped.push((column, field)),
                None if !cell.trim().is_empty() => unmapped.push(cell.trim().to_string()),
                None => {}
            }
        }

        Columns { mapped, unmapped }
    }

    /// Encodes an entity as one row in column order.
    #[must_use]
    pub fn encode(&self, entity: &T) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| encode_cell(&f.get(entity)))
            .collect()
    }

    /// Decodes one row into a new entity.
    ///
    /// Starts from `T::default()`. Empty cells are skipped. A cell that fails
    /// coercion is logged and its field stays at the default; the rest of the
    /// row is still read.
    #[must_use]
    pub fn decode(&self, row: &SheetRow, columns: &Columns<T>) -> T {
        let mut entity = T::default();

        for &(column, field) in &columns.mapped {
            let text = row.cell(column);
            if text.is_empty() {
                continue;
            }

            let result = decode_cell(field.kind(), text).and_then(|v| field.set(&mut entity, v));
            if let Err(error) = result {
                warn!(
                    entity = T::NAME,
                    field = field.name(),
                    row = row.number,
                    column = column + 1,
                    value = text,
                    %error,
                    "cell coercion failed, field left at default"
                );
            }
        }

        entity
    }
}
