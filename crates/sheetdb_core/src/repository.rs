//! The store contract consumed by services.

use crate::entity::{Entity, EntityId};
use crate::error::CoreResult;

/// CRUD and predicate queries over one collection of `T`.
///
/// Only `get_all`, `create`, `update` and `delete` touch storage. The query
/// methods are defined on top of `get_all` and evaluate their predicate in
/// memory, in sheet row order.
///
/// # Not-found handling
///
/// `update` of an unknown id returns its input unchanged and writes nothing;
/// `delete` of an unknown id returns `false`. Callers that want a not-found
/// error check existence first.
pub trait Repository<T: Entity> {
    /// Loads the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backing sheet cannot be read at all.
    fn get_all(&self) -> CoreResult<Vec<T>>;

    /// Stores a new entity, assigning its id and creation time and clearing
    /// its update time.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be read or rewritten.
    fn create(&self, entity: T) -> CoreResult<T>;

    /// Replaces the entity with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be read or rewritten.
    fn update(&self, entity: T) -> CoreResult<T>;

    /// Removes every entity with `id`. Returns whether any was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be read or rewritten.
    fn delete(&self, id: EntityId) -> CoreResult<bool>;

    /// Returns every entity matching `predicate`.
    fn get_many_by_filter<F>(&self, predicate: F) -> CoreResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| predicate(e))
            .collect())
    }

    /// Returns the first entity matching `predicate`.
    fn get_one_by_filter<F>(&self, predicate: F) -> CoreResult<Option<T>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.get_all()?.into_iter().find(|e| predicate(e)))
    }

    /// Returns whether any entity matches `predicate`.
    fn any<F>(&self, predicate: F) -> CoreResult<bool>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.get_all()?.iter().any(|e| predicate(e)))
    }

    /// Returns the first entity with `id`.
    fn get_by_id(&self, id: EntityId) -> CoreResult<Option<T>> {
        self.get_one_by_filter(|e| e.id() == id)
    }
}
