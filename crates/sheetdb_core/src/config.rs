//! Store configuration.

use std::path::{Path, PathBuf};

/// Extension of sheet files.
const SHEET_EXTENSION: &str = "csv";

/// Configuration for opening a file-backed store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one sheet file per entity type.
    pub data_dir: PathBuf,

    /// File name override. When unset the sheet is `<EntityName>.csv`.
    pub file_name: Option<String>,

    /// Whether to create the directory and a header-only sheet on open.
    pub create_if_missing: bool,

    /// Whether to fsync every rewrite before it replaces the old sheet.
    pub sync_on_write: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            file_name: None,
            create_if_missing: true,
            sync_on_write: true,
        }
    }
}

impl Config {
    /// Creates a configuration rooted at `data_dir`, other values default.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Sets the sheet file name.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Sets whether to create the sheet if missing.
    #[must_use]
    pub const fn create_if_missing(mut self, value: bool) -> Self {
        self.create_if_missing = value;
        self
    }

    /// Sets whether to fsync on every rewrite.
    #[must_use]
    pub const fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the sheet path for the named entity type.
    #[must_use]
    pub fn sheet_path(&self, entity_name: &str) -> PathBuf {
        match &self.file_name {
            Some(name) => self.data_dir.join(name),
            None => self
                .data_dir
                .join(format!("{entity_name}.{SHEET_EXTENSION}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.create_if_missing);
        assert!(config.sync_on_write);
        assert_eq!(config.data_dir(), Path::new("data"));
    }

    #[test]
    fn sheet_path_per_entity() {
        let config = Config::new("/tmp/school");
        assert_eq!(
            config.sheet_path("Student"),
            PathBuf::from("/tmp/school/Student.csv")
        );
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new("x")
            .file_name("StudentData.csv")
            .create_if_missing(false)
            .sync_on_write(false);

        assert!(!config.create_if_missing);
        assert!(!config.sync_on_write);
        assert_eq!(config.sheet_path("Student"), PathBuf::from("x/StudentData.csv"));
    }
}
