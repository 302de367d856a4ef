//! CLI command implementations.

pub mod create;
pub mod delete;
pub mod get;
pub mod inspect;
pub mod list;
pub mod update;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sheetdb_core::student::{Student, StudentInput, StudentService};
use sheetdb_core::{Config, CoreError, CoreResult, Store};

/// Student fields collected from the command line.
#[derive(Debug, Clone)]
pub struct StudentArgs {
    /// Requested ID on create; ignored on update.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone_number: String,
    /// Email address.
    pub email: Option<String>,
    /// Age in years.
    pub age: i32,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Owning school.
    pub school_id: i64,
}

impl From<StudentArgs> for StudentInput {
    fn from(args: StudentArgs) -> Self {
        Self {
            id: args.id,
            name: args.name,
            phone_number: args.phone_number,
            email: args.email,
            age: args.age,
            date_of_birth: args.date_of_birth,
            school_id: args.school_id,
        }
    }
}

/// A student as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct StudentView {
    /// Student ID.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone_number: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Age in years.
    pub age: i32,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Owning school.
    pub school_id: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft delete marker.
    pub is_deleted: bool,
}

impl From<Student> for StudentView {
    fn from(s: Student) -> Self {
        Self {
            id: s.meta.id,
            name: s.name,
            phone_number: s.phone_number,
            email: s.email,
            age: s.age,
            date_of_birth: s.date_of_birth,
            school_id: s.school_id,
            created_at: s.meta.created_at,
            updated_at: s.meta.updated_at,
            is_deleted: s.meta.is_deleted,
        }
    }
}

impl StudentView {
    /// One-line text rendering.
    pub fn line(&self) -> String {
        let mut line = format!(
            "[{}] {} (age {}, born {}) school {} phone {}",
            self.id, self.name, self.age, self.date_of_birth, self.school_id, self.phone_number
        );
        if let Some(email) = &self.email {
            line.push_str(&format!(" email {email}"));
        }
        if self.is_deleted {
            line.push_str(" [deleted]");
        }
        line
    }
}

/// Refuses a write when the CLI runs read-only.
pub fn ensure_writable(read_only: bool) -> CoreResult<()> {
    if read_only {
        Err(CoreError::ReadOnly)
    } else {
        Ok(())
    }
}

/// Opens the student sheet and wraps it in a service.
pub fn open_service(config: &Config) -> CoreResult<StudentService<Store<Student>>> {
    Ok(StudentService::new(Store::open(config)?))
}

/// Prints a serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
