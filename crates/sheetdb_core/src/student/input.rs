//! Validated student input.

use super::Student;
use crate::entity::{EntityId, EntityMeta};
use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;

/// Accepted age range, inclusive.
const AGE_RANGE: std::ops::RangeInclusive<i32> = 1..=150;

/// Fields a caller supplies to create or update a student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentInput {
    /// Requested id on create. Zero lets the store assign one; a taken id
    /// is replaced. Ignored on update.
    pub id: EntityId,
    /// Full name. Must not be blank.
    pub name: String,
    /// Contact phone number. Must not be blank.
    pub phone_number: String,
    /// Contact email.
    pub email: Option<String>,
    /// Age in years, 1 to 150.
    pub age: i32,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Owning school.
    pub school_id: i64,
}

impl StudentInput {
    /// Checks the input.
    ///
    /// # Errors
    ///
    /// Returns `Validation` naming the first rejected field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name is required"));
        }
        if self.phone_number.trim().is_empty() {
            return Err(CoreError::validation("phone number is required"));
        }
        if !AGE_RANGE.contains(&self.age) {
            return Err(CoreError::validation(format!(
                "age must be between {} and {}, got {}",
                AGE_RANGE.start(),
                AGE_RANGE.end(),
                self.age
            )));
        }
        Ok(())
    }

    /// Builds a new, not yet stored student.
    #[must_use]
    pub fn into_student(self) -> Student {
        Student {
            meta: EntityMeta {
                id: self.id,
                ..EntityMeta::default()
            },
            name: self.name,
            phone_number: self.phone_number,
            email: self.email,
            age: self.age,
            date_of_birth: self.date_of_birth,
            school_id: self.school_id,
        }
    }

    /// Copies the input fields onto an existing student, keeping its
    /// store-managed columns.
    pub fn apply_to(self, student: &mut Student) {
        student.name = self.name;
        student.phone_number = self.phone_number;
        student.email = self.email;
        student.age = self.age;
        student.date_of_birth = self.date_of_birth;
        student.school_id = self.school_id;
    }
}
