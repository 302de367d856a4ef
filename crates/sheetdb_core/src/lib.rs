//! # SheetDB Core
//!
//! A generic entity store that persists typed records to a spreadsheet-style
//! CSV sheet, one sheet per entity type.
//!
//! This crate provides:
//! - The [`Entity`] trait and its field descriptor table ([`Field`])
//! - [`ColumnMapping`]: header order and header-to-field lookup
//! - [`Store`]: CRUD and predicate queries over one sheet, implementing
//!   the [`Repository`] contract
//! - The [`student`] module, an entity and service built on the store
//!
//! ## Example
//!
//! ```rust
//! use sheetdb_core::{Repository, Store};
//! use sheetdb_core::student::Student;
//! use sheetdb_storage::InMemorySheet;
//!
//! let store: Store<Student> = Store::with_backend(Box::new(InMemorySheet::new())).unwrap();
//! let created = store.create(Student { name: "Ana".into(), age: 20, ..Default::default() }).unwrap();
//! assert_eq!(created.meta.id, 1);
//! assert!(store.any(|s| s.name == "Ana").unwrap());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod entity;
mod error;
mod repository;
mod store;
pub mod student;

pub use config::Config;
pub use entity::{ColumnMapping, Columns, Entity, EntityId, EntityMeta, Field};
pub use error::{CoreError, CoreResult};
pub use repository::Repository;
pub use store::{SheetInfo, Store};

pub use sheetdb_codec::{FieldKind, Value};

/// Crate version, reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
