//! # SheetDB Storage
//!
//! Sheet backend trait and implementations for SheetDB.
//!
//! This crate provides the lowest-level storage abstraction for SheetDB.
//! A backend holds exactly one **sheet**: a header row followed by data
//! rows, every cell stored as text. Backends do not interpret cell text;
//! mapping columns to entity fields is the job of `sheetdb_core`.
//!
//! ## Design Principles
//!
//! - A sheet is always loaded and stored whole; there is no partial write
//! - A missing sheet is reported as `None`, not as an error
//! - Must be `Send + Sync` so a store can be shared across threads
//!
//! ## Available Backends
//!
//! - [`InMemorySheet`] - For testing; counts full rewrites
//! - [`FileSheet`] - A CSV file rewritten atomically on every store
//!
//! ## Example
//!
//! ```rust
//! use sheetdb_storage::{InMemorySheet, Sheet, SheetBackend};
//!
//! let mut backend = InMemorySheet::new();
//! let mut sheet = Sheet::new(vec!["ID".into(), "Name".into()]);
//! sheet.push_row(vec!["1".into(), "Ana".into()]);
//! backend.store(&sheet).unwrap();
//!
//! let loaded = backend.load().unwrap().unwrap();
//! assert_eq!(loaded.rows().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;
mod sheet;

pub use backend::SheetBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileSheet;
pub use memory::InMemorySheet;
pub use sheet::{Sheet, SheetRow};
