//! Store-managed columns shared by every entity.

use super::field::Field;
use super::Entity;
use chrono::{DateTime, Utc};
use sheetdb_codec::FieldKind;

/// Identifier of an entity within its sheet.
///
/// Assigned identifiers are positive. Zero or negative means "not yet
/// assigned" and is replaced on create.
pub type EntityId = i64;

/// Columns every entity carries and the store maintains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMeta {
    /// Identifier, unique within the sheet.
    pub id: EntityId,
    /// Set by the store on create; never changed afterwards.
    pub created_at: DateTime<Utc>,
    /// Set by the store on every successful update.
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft delete marker. Persisted but not filtered on by the store.
    pub is_deleted: bool,
}

impl EntityMeta {
    /// Column holding [`EntityMeta::id`].
    pub const ID: &'static str = "ID";
    /// Column holding [`EntityMeta::created_at`].
    pub const CREATED_AT: &'static str = "CreatedAt";
    /// Column holding [`EntityMeta::updated_at`].
    pub const UPDATED_AT: &'static str = "UpdatedAt";
    /// Column holding [`EntityMeta::is_deleted`].
    pub const IS_DELETED: &'static str = "IsDeleted";

    /// Descriptors for the store-managed columns of `T`.
    pub(crate) fn fields<T: Entity>() -> Vec<Field<T>> {
        vec![
            Field::new(
                Self::ID,
                FieldKind::Integer,
                |e: &T| e.meta().id.into(),
                |e: &mut T, v| {
                    e.meta_mut().id = v.as_i64()?;
                    Ok(())
                },
            ),
            Field::new(
                Self::CREATED_AT,
                FieldKind::Timestamp,
                |e: &T| e.meta().created_at.into(),
                |e: &mut T, v| {
                    e.meta_mut().created_at = v.as_timestamp()?;
                    Ok(())
                },
            ),
            Field::new(
                Self::UPDATED_AT,
                FieldKind::Timestamp,
                |e: &T| e.meta().updated_at.into(),
                |e: &mut T, v| {
                    e.meta_mut().updated_at = v.as_optional_timestamp()?;
                    Ok(())
                },
            ),
            Field::new(
                Self::IS_DELETED,
                FieldKind::Boolean,
                |e: &T| e.meta().is_deleted.into(),
                |e: &mut T, v| {
                    e.meta_mut().is_deleted = v.as_bool()?;
                    Ok(())
                },
            ),
        ]
    }
}
