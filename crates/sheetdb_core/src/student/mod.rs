//! Student records.
//!
//! [`Student`] is the entity stored in `Student.csv`; [`StudentInput`] is the
//! validated shape callers create and update it from; [`StudentService`]
//! adds not-found checks and the school filter on top of a repository.

mod input;
mod service;

pub use input::StudentInput;
pub use service::StudentService;

use crate::entity::{Entity, EntityMeta, Field};
use chrono::NaiveDate;
use sheetdb_codec::FieldKind;

/// A student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    /// Store-managed columns.
    pub meta: EntityMeta,
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Contact email, if known.
    pub email: Option<String>,
    /// Age in years.
    pub age: i32,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Identifier of the owning school. Not checked against any school sheet.
    pub school_id: i64,
}

impl Entity for Student {
    const NAME: &'static str = "Student";

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new(
                "Name",
                FieldKind::Text,
                |s: &Student| s.name.as_str().into(),
                |s: &mut Student, v| {
                    s.name = v.into_text()?;
                    Ok(())
                },
            ),
            Field::new(
                "PhoneNumber",
                FieldKind::Text,
                |s: &Student| s.phone_number.as_str().into(),
                |s: &mut Student, v| {
                    s.phone_number = v.into_text()?;
                    Ok(())
                },
            ),
            Field::new(
                "Email",
                FieldKind::OptionalText,
                |s: &Student| s.email.as_deref().into(),
                |s: &mut Student, v| {
                    s.email = v.into_optional_text()?;
                    Ok(())
                },
            ),
            Field::new(
                "Age",
                FieldKind::Integer,
                |s: &Student| s.age.into(),
                |s: &mut Student, v| {
                    s.age = v.as_i32()?;
                    Ok(())
                },
            ),
            Field::new(
                "DateOfBirth",
                FieldKind::Date,
                |s: &Student| s.date_of_birth.into(),
                |s: &mut Student, v| {
                    s.date_of_birth = v.as_date()?;
                    Ok(())
                },
            ),
            Field::new(
                "SchoolID",
                FieldKind::Integer,
                |s: &Student| s.school_id.into(),
                |s: &mut Student, v| {
                    s.school_id = v.as_i64()?;
                    Ok(())
                },
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ColumnMapping;

    #[test]
    fn header_matches_declared_names() {
        let mapping = ColumnMapping::<Student>::new().unwrap();
        assert_eq!(
            mapping.header(),
            vec![
                "Age",
                "CreatedAt",
                "DateOfBirth",
                "Email",
                "ID",
                "IsDeleted",
                "Name",
                "PhoneNumber",
                "SchoolID",
                "UpdatedAt"
            ]
        );
    }

    #[test]
    fn absent_email_encodes_empty() {
        let mapping = ColumnMapping::<Student>::new().unwrap();
        let cells = mapping.encode(&Student::default());
        let email = mapping.header().iter().position(|h| h == "Email").unwrap();
        assert_eq!(cells[email], "");
    }
}
