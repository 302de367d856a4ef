//! CSV file backend for persistent storage.

use crate::backend::SheetBackend;
use crate::error::{StorageError, StorageResult};
use crate::sheet::Sheet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Suffix of the temporary file used for atomic rewrites.
const TEMP_SUFFIX: &str = "tmp";

/// A sheet stored as a CSV file.
///
/// Row 1 is the header; each following record is one data row. Every store
/// writes the whole sheet to a sibling temporary file and renames it over the
/// target, so readers in this process or another one observe either the old
/// or the new sheet, never a mix.
///
/// # Durability
///
/// With `sync_on_write` enabled (the default), the temporary file is fsynced
/// before the rename and the parent directory is fsynced after it.
///
/// # Example
///
/// ```no_run
/// use sheetdb_storage::{FileSheet, Sheet, SheetBackend};
/// use std::path::Path;
///
/// let mut backend = FileSheet::open_with_create_dirs(Path::new("data/Student.csv")).unwrap();
/// backend.store(&Sheet::new(vec!["ID".into()])).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileSheet {
    path: PathBuf,
    sync_on_write: bool,
}

impl FileSheet {
    /// Opens a file backend at the given path.
    ///
    /// The file is not created until the first `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but is a directory.
    pub fn open(path: &Path) -> StorageResult<Self> {
        if path.is_dir() {
            return Err(StorageError::corrupted(format!(
                "sheet path is a directory: {}",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
            sync_on_write: true,
        })
    }

    /// Opens a file backend, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created.
    pub fn open_with_create_dirs(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::open(path)
    }

    /// Sets whether each store is fsynced before it is made visible.
    #[must_use]
    pub fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }

    #[cfg(unix)]
    fn sync_directory(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            File::open(parent)?.sync_all()?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn sync_directory(&self) -> StorageResult<()> {
        Ok(())
    }
}

impl SheetBackend for FileSheet {
    fn exists(&self) -> StorageResult<bool> {
        Ok(self.path.try_exists()?)
    }

    fn load(&self) -> StorageResult<Option<Sheet>> {
        if !self.exists()? {
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = reader.records().enumerate();
        let mut sheet = match records.next() {
            Some((_, Ok(header))) => Sheet::new(header.iter().map(str::to_string).collect()),
            Some((_, Err(e))) if !matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                return Err(StorageError::corrupted(format!(
                    "unreadable header in {}: {e}",
                    self.path.display()
                )));
            }
            Some((_, Err(e))) => return Err(e.into()),
            None => return Ok(Some(Sheet::default())),
        };

        for (index, record) in records {
            let number = index + 1;
            match record {
                Ok(record) => sheet.push_numbered(number, record.iter().map(str::to_string).collect()),
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    warn!(path = %self.path.display(), row = number, error = %e, "skipping unreadable row");
                }
            }
        }

        Ok(Some(sheet))
    }

    fn store(&mut self, sheet: &Sheet) -> StorageResult<()> {
        let temp_path = self.temp_path();

        let file = File::create(&temp_path)?;
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);
        writer.write_record(sheet.header())?;
        for row in sheet.rows() {
            writer.write_record(&row.cells)?;
        }
        writer.flush()?;
        let file = writer
            .into_inner()
            .map_err(|e| StorageError::Io(e.into_error()))?;
        if self.sync_on_write {
            file.sync_all()?;
        }
        drop(file);

        fs::rename(&temp_path, &self.path)?;

        if self.sync_on_write {
            self.sync_directory()?;
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Sheet {
        let mut sheet = Sheet::new(vec!["ID".into(), "Name".into()]);
        sheet.push_row(vec!["1".into(), "Ana".into()]);
        sheet.push_row(vec!["2".into(), "Bo, \"the\" second".into()]);
        sheet
    }

    #[test]
    fn missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let backend = FileSheet::open(&dir.path().join("none.csv")).unwrap();

        assert!(!backend.exists().unwrap());
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn store_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.csv");

        let mut backend = FileSheet::open(&path).unwrap();
        backend.store(&sample()).unwrap();

        let loaded = backend.load().unwrap().unwrap();
        assert_eq!(loaded, sample());
        assert!(!backend.temp_path().exists());
    }

    #[test]
    fn store_replaces_whole_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.csv");

        let mut backend = FileSheet::open(&path).unwrap();
        backend.store(&sample()).unwrap();
        backend.store(&Sheet::new(vec!["ID".into()])).unwrap();

        let loaded = backend.load().unwrap().unwrap();
        assert_eq!(loaded.header(), ["ID".to_string()]);
        assert!(loaded.rows().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "ID\n");
    }

    #[test]
    fn ragged_rows_are_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        fs::write(&path, "A,B,C\n1\n1,2,3,4\n").unwrap();

        let loaded = FileSheet::open(&path).unwrap().load().unwrap().unwrap();
        assert_eq!(loaded.rows().len(), 2);
        assert_eq!(loaded.rows()[0].cell(2), "");
        assert_eq!(loaded.rows()[1].cells.len(), 4);
    }

    #[test]
    fn invalid_utf8_row_is_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        let mut bytes = b"A,B\n1,ok\n2,".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"\n3,fine\n");
        fs::write(&path, bytes).unwrap();

        let loaded = FileSheet::open(&path).unwrap().load().unwrap().unwrap();
        let numbers: Vec<usize> = loaded.rows().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn empty_file_has_no_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        fs::write(&path, "").unwrap();

        let loaded = FileSheet::open(&path).unwrap().load().unwrap().unwrap();
        assert!(loaded.header().is_empty());
        assert!(loaded.rows().is_empty());
    }

    #[test]
    fn create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("sheet.csv");

        let mut backend = FileSheet::open_with_create_dirs(&path).unwrap();
        backend.store(&sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn directory_path_is_rejected() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FileSheet::open(dir.path()),
            Err(StorageError::Corrupted(_))
        ));
    }

    #[test]
    fn location_is_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.csv");

        let backend = FileSheet::open(&path).unwrap().sync_on_write(false);
        assert_eq!(backend.path(), path);
        assert_eq!(backend.location(), path.display().to_string());
    }
}
