//! Sheet backend trait definition.

use crate::error::StorageResult;
use crate::sheet::Sheet;

/// A storage backend holding a single sheet.
///
/// Backends are **whole-sheet stores**: `load` returns a complete snapshot
/// and `store` replaces the previous content entirely. Callers never see a
/// half-written sheet because every backend either swaps the content in one
/// step or fails leaving the old content intact.
///
/// # Invariants
///
/// - `load` returns `Ok(None)` when nothing has been stored yet
/// - After `store(s)` succeeds, `load` returns a sheet equal to `s`
///   (row numbers are reassigned from file order)
/// - Backends must be `Send + Sync` for concurrent access
///
/// # Implementors
///
/// - [`super::InMemorySheet`] - For testing
/// - [`super::FileSheet`] - For persistent storage
pub trait SheetBackend: Send + Sync {
    /// Returns whether a sheet has been stored.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined.
    fn exists(&self) -> StorageResult<bool>;

    /// Loads the complete sheet.
    ///
    /// Returns `None` if no sheet exists. Rows the backend cannot decode
    /// are skipped rather than failing the whole load.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet exists but cannot be opened or read.
    fn load(&self) -> StorageResult<Option<Sheet>>;

    /// Replaces the stored sheet with `sheet`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previous sheet is left
    /// untouched in that case.
    fn store(&mut self, sheet: &Sheet) -> StorageResult<()>;

    /// Human-readable location of the sheet, used in diagnostics.
    fn location(&self) -> String;
}
