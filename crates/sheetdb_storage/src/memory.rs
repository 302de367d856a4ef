//! In-memory sheet backend for testing.

use crate::backend::SheetBackend;
use crate::error::StorageResult;
use crate::sheet::Sheet;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Default)]
struct State {
    sheet: Option<Sheet>,
    writes: usize,
}

/// An in-memory sheet backend.
///
/// This backend keeps the sheet in memory and is suitable for:
/// - Unit tests
/// - Integration tests that need to observe how often a sheet is rewritten
///
/// Clones share the same state, so a test can keep a handle after moving
/// the backend into a store.
///
/// # Example
///
/// ```rust
/// use sheetdb_storage::{InMemorySheet, Sheet, SheetBackend};
///
/// let handle = InMemorySheet::new();
/// let mut backend = handle.clone();
/// backend.store(&Sheet::new(vec!["ID".into()])).unwrap();
/// assert_eq!(handle.writes(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySheet {
    state: Arc<RwLock<State>>,
}

impl InMemorySheet {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend holding a pre-existing sheet.
    ///
    /// The initial sheet does not count as a write.
    #[must_use]
    pub fn with_sheet(sheet: Sheet) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                sheet: Some(sheet),
                writes: 0,
            })),
        }
    }

    /// Returns the number of successful `store` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.state.read().writes
    }

    /// Returns a copy of the current sheet.
    #[must_use]
    pub fn sheet(&self) -> Option<Sheet> {
        self.state.read().sheet.clone()
    }
}

impl SheetBackend for InMemorySheet {
    fn exists(&self) -> StorageResult<bool> {
        Ok(self.state.read().sheet.is_some())
    }

    fn load(&self) -> StorageResult<Option<Sheet>> {
        Ok(self.sheet())
    }

    fn store(&mut self, sheet: &Sheet) -> StorageResult<()> {
        let mut state = self.state.write();
        state.sheet = Some(sheet.clone());
        state.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
