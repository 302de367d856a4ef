//! Student operations over a repository.

use super::{Student, StudentInput};
use crate::entity::{Entity, EntityId};
use crate::error::{CoreError, CoreResult};
use crate::repository::Repository;
use tracing::debug;

/// Student use cases on top of any [`Repository<Student>`].
///
/// Unlike the repository, `update` and `delete` report an unknown id as
/// [`CoreError::NotFound`], and every input is validated before it reaches
/// storage.
#[derive(Debug)]
pub struct StudentService<R> {
    repository: R,
}

impl<R: Repository<Student>> StudentService<R> {
    /// Wraps a repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Lists students, optionally only those of one school.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be read.
    pub fn list(&self, school_id: Option<i64>) -> CoreResult<Vec<Student>> {
        match school_id {
            Some(school_id) => self
                .repository
                .get_many_by_filter(|s| s.school_id == school_id),
            None => self.repository.get_all(),
        }
    }

    /// Fetches one student.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no student has `id`.
    pub fn get(&self, id: EntityId) -> CoreResult<Student> {
        self.repository
            .get_by_id(id)?
            .ok_or_else(|| CoreError::not_found(Student::NAME, id))
    }

    /// Validates and stores a new student.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for rejected input, or a storage error.
    pub fn create(&self, input: StudentInput) -> CoreResult<Student> {
        input.validate()?;
        let created = self.repository.create(input.into_student())?;
        debug!(id = created.meta.id, "student created");
        Ok(created)
    }

    /// Validates `input` and applies it to the student with `id`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for rejected input, `NotFound` if no student has
    /// `id`, or a storage error.
    pub fn update(&self, id: EntityId, input: StudentInput) -> CoreResult<Student> {
        input.validate()?;
        let mut student = self.get(id)?;
        input.apply_to(&mut student);
        self.repository.update(student)
    }

    /// Removes the student with `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no student had `id`, or a storage error.
    pub fn delete(&self, id: EntityId) -> CoreResult<()> {
        if self.repository.delete(id)? {
            debug!(id, "student deleted");
            Ok(())
        } else {
            Err(CoreError::not_found(Student::NAME, id))
        }
    }
}
