//! Test fixtures and store helpers.
//!
//! Provides convenience functions for setting up student stores
//! and common test scenarios.

use chrono::NaiveDate;
use sheetdb_core::student::Student;
use sheetdb_core::{Config, Store};
use sheetdb_storage::InMemorySheet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A student store with automatic cleanup.
pub struct TestStore {
    /// The store instance.
    pub store: Store<Student>,
    /// Handle to the in-memory backend, if any.
    sheet: Option<InMemorySheet>,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: Option<TempDir>,
}

impl TestStore {
    /// Creates a store over an in-memory sheet.
    pub fn memory() -> Self {
        let sheet = InMemorySheet::new();
        let store = Store::with_backend(Box::new(sheet.clone()))
            .expect("Failed to open in-memory store");
        Self {
            store,
            sheet: Some(sheet),
            _temp_dir: None,
        }
    }

    /// Creates a store over `Student.csv` in a fresh temporary directory.
    pub fn file() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = Store::open(&Config::new(temp_dir.path()).sync_on_write(false))
            .expect("Failed to open file store");
        Self {
            store,
            sheet: None,
            _temp_dir: Some(temp_dir),
        }
    }

    /// Creates a file store whose sheet starts with `contents`.
    pub fn file_with_contents(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config::new(temp_dir.path()).sync_on_write(false);
        std::fs::write(config.sheet_path("Student"), contents).expect("Failed to seed sheet");
        let store = Store::open(&config).expect("Failed to open file store");
        Self {
            store,
            sheet: None,
            _temp_dir: Some(temp_dir),
        }
    }

    /// Returns the sheet path if file-based, None if in-memory.
    pub fn path(&self) -> Option<PathBuf> {
        self._temp_dir
            .as_ref()
            .map(|d| Config::new(d.path()).sheet_path("Student"))
    }

    /// Returns how many times the in-memory sheet was rewritten.
    ///
    /// # Panics
    ///
    /// Panics for file-based stores.
    pub fn writes(&self) -> usize {
        self.sheet
            .as_ref()
            .expect("Write counting needs an in-memory store")
            .writes()
    }
}

impl std::ops::Deref for TestStore {
    type Target = Store<Student>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// Runs a test with an in-memory student store.
pub fn with_temp_store<F, R>(f: F) -> R
where
    F: FnOnce(&Store<Student>) -> R,
{
    let test_store = TestStore::memory();
    f(&test_store.store)
}

/// Runs a test with a student store in a temporary directory.
pub fn with_file_store<F, R>(f: F) -> R
where
    F: FnOnce(&Store<Student>, &Path) -> R,
{
    let test_store = TestStore::file();
    let path = test_store.path().expect("File store should have a path");
    f(&test_store.store, &path)
}

/// A valid, not yet stored student.
pub fn sample_student(name: &str, school_id: i64) -> Student {
    Student {
        name: name.to_string(),
        phone_number: "555-0100".to_string(),
        email: Some(format!("{}@school.test", name.to_lowercase())),
        age: 20,
        date_of_birth: NaiveDate::from_ymd_opt(2005, 3, 1).unwrap_or_default(),
        school_id,
        ..Default::default()
    }
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;
    use sheetdb_core::Repository;

    /// Creates a store with `count` students spread over `schools` schools.
    pub fn populated_store(count: usize, schools: i64) -> TestStore {
        let test_store = TestStore::memory();
        for i in 0..count {
            let school_id = (i as i64 % schools.max(1)) + 1;
            test_store
                .store
                .create(sample_student(&format!("Student{i}"), school_id))
                .expect("Failed to create student");
        }
        test_store
    }
}
