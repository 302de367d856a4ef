//! Error types for SheetDB core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in SheetDB core operations.
///
/// Malformed cell text is not in this list: it is recovered while loading
/// and only logged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] sheetdb_storage::StorageError),

    /// Entity not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity type name.
        entity: &'static str,
        /// The identifier that was not found.
        id: i64,
    },

    /// Input rejected by validation.
    #[error("validation failed: {message}")]
    Validation {
        /// Description of the rejected input.
        message: String,
    },

    /// A write was attempted while read-only mode is enabled.
    #[error("read-only mode is enabled; cannot perform write operations")]
    ReadOnly,

    /// Operation not permitted in current state.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Description of why operation is invalid.
        message: String,
    },
}

impl CoreError {
    /// Creates a not-found error.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetdb_storage::StorageError;

    #[test]
    fn storage_errors_convert() {
        let err: CoreError = StorageError::corrupted("bad header").into();
        assert!(matches!(err, CoreError::Storage(_)));
        assert!(err.to_string().starts_with("storage error:"));
    }

    #[test]
    fn not_found_names_entity_and_id() {
        assert_eq!(
            CoreError::not_found("Student", 7).to_string(),
            "Student not found: 7"
        );
    }
}
