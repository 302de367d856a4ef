//! # SheetDB Testkit
//!
//! Test utilities for SheetDB.
//!
//! This crate provides:
//! - Test fixtures: stores over a temporary directory or memory
//! - Property-based test generators using proptest
//! - Concurrent stress helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sheetdb_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_store() {
//!     with_file_store(|store, path| {
//!         store.create(sample_student("Ana", 1)).unwrap();
//!         assert!(path.exists());
//!     });
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
    pub use sheetdb_core::student::{Student, StudentInput, StudentService};
    pub use sheetdb_core::{Config, CoreError, Repository, Store};
}

pub use fixtures::*;
pub use generators::*;
pub use stress::*;
