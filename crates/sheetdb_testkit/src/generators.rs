//! Property-based test generators using proptest.
//!
//! Provides strategies for generating students whose fields survive a
//! write and read back unchanged.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use sheetdb_core::student::{Student, StudentInput};
use sheetdb_core::EntityMeta;

/// Strategy for names, including characters that force CSV quoting.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z ,.'\"-]{0,23}").expect("Invalid regex")
}

/// Strategy for phone numbers.
pub fn phone_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{3}-[0-9]{4}").expect("Invalid regex")
}

/// Strategy for emails. Never produces `Some("")`, which reads back as `None`.
pub fn email_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[a-z]{1,12}@[a-z]{1,8}\\.test").expect("Invalid regex"))
}

/// Strategy for dates between 1900 and 2099.
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..73_000).prop_map(|days| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default() + Duration::days(days)
    })
}

/// Strategy for students with an unassigned id.
pub fn student_strategy() -> impl Strategy<Value = Student> {
    (
        name_strategy(),
        phone_strategy(),
        email_strategy(),
        any::<i32>(),
        date_strategy(),
        any::<i64>(),
        any::<bool>(),
    )
        .prop_map(
            |(name, phone_number, email, age, date_of_birth, school_id, is_deleted)| {
                Student {
                    meta: EntityMeta {
                        is_deleted,
                        ..Default::default()
                    },
                    name,
                    phone_number,
                    email,
                    age,
                    date_of_birth,
                    school_id,
                }
            },
        )
}

/// Strategy for input that passes validation.
pub fn student_input_strategy() -> impl Strategy<Value = StudentInput> {
    (
        name_strategy(),
        phone_strategy(),
        email_strategy(),
        1i32..=150,
        date_strategy(),
        1i64..10,
    )
        .prop_map(
            |(name, phone_number, email, age, date_of_birth, school_id)| StudentInput {
                id: 0,
                name,
                phone_number,
                email,
                age,
                date_of_birth,
                school_id,
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_input_is_valid(input in student_input_strategy()) {
            prop_assert!(input.validate().is_ok());
        }

        #[test]
        fn generated_email_is_never_empty(email in email_strategy()) {
            prop_assert_ne!(email.as_deref(), Some(""));
        }
    }
}
