//! The generic file-backed entity store.

use crate::config::Config;
use crate::entity::{ColumnMapping, Entity, EntityId};
use crate::error::{CoreError, CoreResult};
use crate::repository::Repository;
use chrono::Utc;
use parking_lot::Mutex;
use sheetdb_storage::{FileSheet, Sheet, SheetBackend};
use std::fmt;
use tracing::{debug, info};

/// Summary of a sheet as seen through an entity's column mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInfo {
    /// Where the sheet lives.
    pub location: String,
    /// Header cells as stored.
    pub header: Vec<String>,
    /// Header cells that map to a field.
    pub mapped: Vec<String>,
    /// Header cells that map to no field.
    pub unmapped: Vec<String>,
    /// Fields with no column in the sheet.
    pub missing: Vec<String>,
    /// Number of non-blank data rows.
    pub rows: usize,
}

/// Durable CRUD over one sheet of `T`.
///
/// Every operation loads the whole sheet and every mutation rewrites it
/// whole, so the stored sheet is always a complete snapshot. There is no
/// cache between calls: each call returns freshly decoded entities.
///
/// # Thread Safety
///
/// One guard around the backend serialises every load and every rewrite, so
/// a load never observes a half-written sheet. Mutations additionally hold
/// a writer lock across their load, change and rewrite, so concurrent
/// creates never hand out the same id and never lose each other's rows.
/// Coordination is in-process only.
///
/// # Example
///
/// ```rust,no_run
/// use sheetdb_core::{Config, Repository, Store};
/// use sheetdb_core::student::Student;
///
/// let store: Store<Student> = Store::open(&Config::new("data")).unwrap();
/// let ana = store.create(Student { name: "Ana".into(), ..Default::default() }).unwrap();
/// assert!(store.get_by_id(ana.meta.id).unwrap().is_some());
/// ```
pub struct Store<T: Entity> {
    backend: Mutex<Box<dyn SheetBackend>>,
    writer: Mutex<()>,
    mapping: ColumnMapping<T>,
}

impl<T: Entity> Store<T> {
    /// Opens the CSV sheet for `T` described by `config`.
    ///
    /// With `create_if_missing`, the data directory and a header-only sheet
    /// are created if absent. An existing sheet is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or sheet cannot be created.
    pub fn open(config: &Config) -> CoreResult<Self> {
        let path = config.sheet_path(T::NAME);
        let backend = if config.create_if_missing {
            FileSheet::open_with_create_dirs(&path)?
        } else {
            FileSheet::open(&path)?
        };
        let backend = backend.sync_on_write(config.sync_on_write);

        Self::build(Box::new(backend), config.create_if_missing)
    }

    /// Creates a store over any backend, writing a header-only sheet if the
    /// backend is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written or `T` declares a
    /// column twice.
    pub fn with_backend(backend: Box<dyn SheetBackend>) -> CoreResult<Self> {
        Self::build(backend, true)
    }

    fn build(backend: Box<dyn SheetBackend>, create_if_missing: bool) -> CoreResult<Self> {
        let store = Self {
            backend: Mutex::new(backend),
            writer: Mutex::new(()),
            mapping: ColumnMapping::new()?,
        };

        if create_if_missing {
            let mut backend = store.backend.lock();
            if !backend.exists()? {
                backend.store(&Sheet::new(store.mapping.header()))?;
                info!(entity = T::NAME, location = %backend.location(), "created sheet");
            }
        }

        Ok(store)
    }

    /// Returns the column mapping.
    #[must_use]
    pub fn mapping(&self) -> &ColumnMapping<T> {
        &self.mapping
    }

    /// Returns where the sheet lives.
    #[must_use]
    pub fn location(&self) -> String {
        self.backend.lock().location()
    }

    /// Returns the number of entities.
    ///
    /// **Warning**: This loads the whole sheet.
    pub fn count(&self) -> CoreResult<usize> {
        Ok(self.load()?.len())
    }

    /// Describes the stored sheet against this store's column mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be read.
    pub fn inspect(&self) -> CoreResult<SheetInfo> {
        let (location, sheet) = {
            let backend = self.backend.lock();
            (backend.location(), backend.load()?.unwrap_or_default())
        };
        let columns = self.mapping.resolve(sheet.header());

        Ok(SheetInfo {
            location,
            header: sheet.header().to_vec(),
            mapped: columns
                .mapped()
                .iter()
                .map(|(_, f)| f.name().to_string())
                .collect(),
            unmapped: columns.unmapped().to_vec(),
            missing: self
                .mapping
                .fields()
                .iter()
                .filter(|f| !columns.contains(f.name()))
                .map(|f| f.name().to_string())
                .collect(),
            rows: sheet.rows().iter().filter(|r| !r.is_blank()).count(),
        })
    }

    fn load(&self) -> CoreResult<Vec<T>> {
        let sheet = self.backend.lock().load()?;
        let Some(sheet) = sheet else {
            return Ok(Vec::new());
        };

        let columns = self.mapping.resolve(sheet.header());
        if !columns.unmapped().is_empty() {
            debug!(entity = T::NAME, unmapped = ?columns.unmapped(), "ignoring unknown columns");
        }

        Ok(sheet
            .rows()
            .iter()
            .filter(|row| !row.is_blank())
            .map(|row| self.mapping.decode(row, &columns))
            .collect())
    }

    fn write(&self, items: &[T]) -> CoreResult<()> {
        let mut sheet = Sheet::new(self.mapping.header());
        for item in items {
            sheet.push_row(self.mapping.encode(item));
        }

        self.backend.lock().store(&sheet)?;
        Ok(())
    }
}

impl<T: Entity> Repository<T> for Store<T> {
    fn get_all(&self) -> CoreResult<Vec<T>> {
        self.load()
    }

    fn create(&self, mut entity: T) -> CoreResult<T> {
        let _writer = self.writer.lock();
        let mut items = self.load()?;

        let max_id = items.iter().map(T::id).max().unwrap_or(0).max(0);
        let next_id = max_id
            .checked_add(1)
            .ok_or_else(|| CoreError::invalid_operation(format!("{} id space exhausted", T::NAME)))?;

        let requested = entity.id();
        if requested <= 0 || items.iter().any(|e| e.id() == requested) {
            entity.meta_mut().id = next_id;
        }
        entity.meta_mut().created_at = Utc::now();
        entity.meta_mut().updated_at = None;

        items.push(entity.clone());
        self.write(&items)?;

        debug!(entity = T::NAME, id = entity.id(), "created");
        Ok(entity)
    }

    fn update(&self, mut entity: T) -> CoreResult<T> {
        let _writer = self.writer.lock();
        let mut items = self.load()?;

        let id = entity.id();
        let Some(index) = items.iter().position(|e| e.id() == id) else {
            debug!(entity = T::NAME, id, "update of unknown id ignored");
            return Ok(entity);
        };

        entity.meta_mut().updated_at = Some(Utc::now());
        items[index] = entity.clone();
        self.write(&items)?;

        debug!(entity = T::NAME, id, "updated");
        Ok(entity)
    }

    fn delete(&self, id: EntityId) -> CoreResult<bool> {
        let _writer = self.writer.lock();
        let mut items = self.load()?;

        let before = items.len();
        items.retain(|e| e.id() != id);
        let removed = items.len() < before;

        if removed {
            self.write(&items)?;
            debug!(entity = T::NAME, id, rows = before - items.len(), "deleted");
        }
        Ok(removed)
    }
}

impl<T: Entity> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("entity", &T::NAME)
            .field("location", &self.location())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::Student;
    use chrono::{NaiveDate, TimeZone};
    use sheetdb_storage::InMemorySheet;
    use std::sync::Arc;
    use std::thread;
    use tempfile::tempdir;

    fn memory_store() -> (Store<Student>, InMemorySheet) {
        let handle = InMemorySheet::new();
        let store = Store::with_backend(Box::new(handle.clone())).unwrap();
        (store, handle)
    }

    fn student(name: &str, age: i32, school_id: i64) -> Student {
        Student {
            name: name.to_string(),
            phone_number: "555-0100".to_string(),
            age,
            date_of_birth: NaiveDate::from_ymd_opt(2005, 3, 1).unwrap(),
            school_id,
            ..Default::default()
        }
    }

    #[test]
    fn new_store_writes_header_only() {
        let (store, handle) = memory_store();

        let sheet = handle.sheet().unwrap();
        assert_eq!(sheet.header(), store.mapping().header().as_slice());
        assert!(sheet.rows().is_empty());
        assert_eq!(handle.writes(), 1);
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn existing_sheet_is_untouched() {
        let mut sheet = Sheet::new(vec!["ID".into(), "Name".into()]);
        sheet.push_row(vec!["4".into(), "Ana".into()]);
        let handle = InMemorySheet::with_sheet(sheet.clone());

        let store: Store<Student> = Store::with_backend(Box::new(handle.clone())).unwrap();
        assert_eq!(handle.writes(), 0);
        assert_eq!(handle.sheet().unwrap(), sheet);
        assert_eq!(store.get_all().unwrap()[0].name, "Ana");
    }

    #[test]
    fn first_create_gets_id_one() {
        let (store, _) = memory_store();

        let before = Utc::now();
        let created = store.create(student("Ana", 20, 1)).unwrap();

        assert_eq!(created.meta.id, 1);
        assert!(created.meta.created_at >= before);
        assert!(created.meta.updated_at.is_none());
    }

    #[test]
    fn create_assigns_next_after_max() {
        let (store, _) = memory_store();

        let mut explicit = student("Ana", 20, 1);
        explicit.meta.id = 10;
        assert_eq!(store.create(explicit).unwrap().meta.id, 10);

        assert_eq!(store.create(student("Bo", 21, 1)).unwrap().meta.id, 11);
    }

    #[test]
    fn create_replaces_colliding_id() {
        let (store, _) = memory_store();
        store.create(student("Ana", 20, 1)).unwrap();

        let mut colliding = student("Bo", 21, 1);
        colliding.meta.id = 1;
        assert_eq!(store.create(colliding).unwrap().meta.id, 2);

        let mut negative = student("Cy", 22, 1);
        negative.meta.id = -4;
        assert_eq!(store.create(negative).unwrap().meta.id, 3);
    }

    #[test]
    fn create_overwrites_created_at() {
        let (store, _) = memory_store();
        let mut s = student("Ana", 20, 1);
        let stale = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        s.meta.created_at = stale;

        let created = store.create(s).unwrap();
        assert!(created.meta.created_at > stale);
    }

    #[test]
    fn create_clears_updated_at() {
        let (store, _) = memory_store();
        let mut s = student("Ana", 20, 1);
        s.meta.updated_at = Some(Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap());

        let created = store.create(s).unwrap();
        assert_eq!(created.meta.updated_at, None);
        assert_eq!(store.get_by_id(created.meta.id).unwrap().unwrap().meta.updated_at, None);
    }

    #[test]
    fn get_by_id_matches_created() {
        let (store, _) = memory_store();
        let mut s = student("Ana", 20, 1);
        s.email = Some("ana@example.com".into());
        let created = store.create(s).unwrap();

        assert_eq!(store.get_by_id(created.meta.id).unwrap(), Some(created));
        assert_eq!(store.get_by_id(99).unwrap(), None);
    }

    #[test]
    fn filters_evaluate_in_row_order() {
        let (store, _) = memory_store();
        store.create(student("Ana", 20, 1)).unwrap();
        store.create(student("Bo", 30, 2)).unwrap();
        store.create(student("Cy", 40, 1)).unwrap();

        let school_one = store.get_many_by_filter(|s| s.school_id == 1).unwrap();
        assert_eq!(school_one.len(), 2);

        let first_older = store.get_one_by_filter(|s| s.age > 25).unwrap().unwrap();
        assert_eq!(first_older.name, "Bo");

        assert!(store.any(|s| s.name == "Cy").unwrap());
        assert!(!store.any(|s| s.age > 100).unwrap());
        assert!(store.get_one_by_filter(|s| s.age > 100).unwrap().is_none());
    }

    #[test]
    fn update_replaces_row() {
        let (store, _) = memory_store();
        let created = store.create(student("Ana", 20, 1)).unwrap();

        let mut changed = created.clone();
        changed.name = "Ana K.".into();
        changed.age = 21;
        let before = Utc::now();
        let updated = store.update(changed).unwrap();

        assert!(updated.meta.updated_at.unwrap() >= before);
        assert_eq!(store.get_by_id(created.meta.id).unwrap(), Some(updated));
    }

    #[test]
    fn update_is_full_replacement() {
        let (store, _) = memory_store();
        let mut s = student("Ana", 20, 1);
        s.email = Some("ana@example.com".into());
        let created = store.create(s).unwrap();

        let replacement = Student {
            meta: created.meta.clone(),
            name: "Ana".into(),
            ..Default::default()
        };
        store.update(replacement).unwrap();

        let stored = store.get_by_id(created.meta.id).unwrap().unwrap();
        assert_eq!(stored.email, None);
        assert_eq!(stored.age, 0);
    }

    #[test]
    fn update_unknown_id_writes_nothing() {
        let (store, handle) = memory_store();
        store.create(student("Ana", 20, 1)).unwrap();
        let writes = handle.writes();

        let mut ghost = student("Ghost", 99, 1);
        ghost.meta.id = 42;
        let returned = store.update(ghost.clone()).unwrap();

        assert_eq!(returned, ghost);
        assert_eq!(handle.writes(), writes);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let (store, handle) = memory_store();
        let created = store.create(student("Ana", 20, 1)).unwrap();

        assert!(store.delete(created.meta.id).unwrap());
        let writes = handle.writes();

        assert!(!store.delete(created.meta.id).unwrap());
        assert_eq!(handle.writes(), writes);
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_duplicates() {
        let mut sheet = Sheet::new(vec!["ID".into(), "Name".into()]);
        sheet.push_row(vec!["3".into(), "Ana".into()]);
        sheet.push_row(vec!["3".into(), "Ana again".into()]);
        sheet.push_row(vec!["4".into(), "Bo".into()]);
        let handle = InMemorySheet::with_sheet(sheet);
        let store: Store<Student> = Store::with_backend(Box::new(handle)).unwrap();

        assert!(store.delete(3).unwrap());
        let remaining = store.get_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Bo");
    }

    #[test]
    fn soft_delete_flag_is_not_filtered() {
        let (store, _) = memory_store();
        let mut s = student("Ana", 20, 1);
        s.meta.is_deleted = true;
        store.create(s).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].meta.is_deleted);
    }

    #[test]
    fn blank_rows_are_skipped() {
        let mut sheet = Sheet::new(vec!["ID".into(), "Name".into()]);
        sheet.push_row(vec!["1".into(), "Ana".into()]);
        sheet.push_row(vec![String::new(), String::new()]);
        sheet.push_row(vec!["2".into(), "Bo".into()]);
        let store: Store<Student> =
            Store::with_backend(Box::new(InMemorySheet::with_sheet(sheet))).unwrap();

        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn missing_sheet_reads_empty() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path().join("absent")).create_if_missing(false);
        let store: Store<Student> = Store::open(&config).unwrap();

        assert!(store.get_all().unwrap().is_empty());
        assert!(!dir.path().join("absent").exists());
    }

    #[test]
    fn open_creates_directory_and_header() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path().join("Excel"));
        let store: Store<Student> = Store::open(&config).unwrap();

        let path = config.sheet_path(Student::NAME);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), store.mapping().header().join(","));
        assert_eq!(store.location(), path.display().to_string());
    }

    #[test]
    fn inspect_reports_columns() {
        let mut sheet = Sheet::new(vec!["id".into(), "Name".into(), "Legacy".into()]);
        sheet.push_row(vec!["1".into(), "Ana".into(), "x".into()]);
        let store: Store<Student> =
            Store::with_backend(Box::new(InMemorySheet::with_sheet(sheet))).unwrap();

        let info = store.inspect().unwrap();
        assert_eq!(info.mapped, vec!["ID", "Name"]);
        assert_eq!(info.unmapped, vec!["Legacy"]);
        assert!(info.missing.contains(&"Age".to_string()));
        assert!(!info.missing.contains(&"ID".to_string()));
        assert_eq!(info.rows, 1);
    }

    #[test]
    fn concurrent_creates_get_contiguous_ids() {
        let (store, _) = memory_store();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..5)
                        .map(|i| store.create(student(&format!("S{t}-{i}"), 20, 1)).unwrap().meta.id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=40).collect::<Vec<_>>());
        assert_eq!(store.count().unwrap(), 40);
    }

    proptest::proptest! {
        #[test]
        fn requested_ids_never_collide(requested in proptest::collection::vec(-3i64..6, 1..12)) {
            let (store, _) = memory_store();

            let mut ids = Vec::new();
            for id in requested {
                let mut s = student("P", 20, 1);
                s.meta.id = id;
                let created = store.create(s).unwrap();
                proptest::prop_assert!(created.meta.id > 0);
                if id > 0 && !ids.contains(&id) {
                    proptest::prop_assert_eq!(created.meta.id, id);
                }
                ids.push(created.meta.id);
            }

            let mut unique = ids.clone();
            unique.sort_unstable();
            unique.dedup();
            proptest::prop_assert_eq!(unique.len(), ids.len());
        }
    }
}
