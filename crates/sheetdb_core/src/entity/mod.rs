//! Entity types and their column mapping.

mod field;
mod mapping;
mod meta;

pub use field::Field;
pub use mapping::{ColumnMapping, Columns};
pub use meta::{EntityId, EntityMeta};

/// A record type that can be stored in a sheet.
///
/// Implementors embed an [`EntityMeta`] for the store-managed columns and
/// list their own columns in [`Entity::fields`]. There is no runtime type
/// inspection: the descriptor table is the whole schema.
///
/// `Default` provides the value every field falls back to when its cell is
/// empty or cannot be coerced.
///
/// # Example
///
/// ```rust
/// use sheetdb_core::{Entity, EntityMeta, Field, FieldKind};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct School {
///     meta: EntityMeta,
///     name: String,
/// }
///
/// impl Entity for School {
///     const NAME: &'static str = "School";
///
///     fn meta(&self) -> &EntityMeta {
///         &self.meta
///     }
///
///     fn meta_mut(&mut self) -> &mut EntityMeta {
///         &mut self.meta
///     }
///
///     fn fields() -> Vec<Field<Self>> {
///         vec![Field::new(
///             "Name",
///             FieldKind::Text,
///             |s: &School| s.name.as_str().into(),
///             |s: &mut School, v| {
///                 s.name = v.into_text()?;
///                 Ok(())
///             },
///         )]
///     }
/// }
/// ```
pub trait Entity: Default + Clone + Send + 'static {
    /// Type name, used for the default sheet file name and in diagnostics.
    const NAME: &'static str;

    /// Store-managed columns.
    fn meta(&self) -> &EntityMeta;

    /// Mutable access to the store-managed columns.
    fn meta_mut(&mut self) -> &mut EntityMeta;

    /// Type-specific columns. Names must not repeat each other or the
    /// [`EntityMeta`] column names.
    fn fields() -> Vec<Field<Self>>;

    /// Returns the entity's identifier.
    fn id(&self) -> EntityId {
        self.meta().id
    }
}
