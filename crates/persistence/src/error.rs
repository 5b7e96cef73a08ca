//! Error types for the persistence layer.
//!
//! Errors are grouped by category: resource state, validation of incoming
//! data, and failures of the backend itself.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to resource state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("resource not found: {resource_type}/{id}")]
    NotFound { resource_type: String, id: i64 },
}

/// Errors related to the data submitted for a write.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A field was present but its value is not acceptable.
    #[error("invalid value for {field}: {message}")]
    InvalidField { field: String, message: String },

    /// A relation references rows that do not exist.
    #[error("unknown {field} reference(s): {ids:?}")]
    UnknownReference { field: String, ids: Vec<i64> },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Shorthand for a missing course.
    pub fn course_not_found(id: i64) -> Self {
        StorageError::Resource(ResourceError::NotFound {
            resource_type: "Course".to_string(),
            id,
        })
    }

    /// Shorthand for a missing student.
    pub fn student_not_found(id: i64) -> Self {
        StorageError::Resource(ResourceError::NotFound {
            resource_type: "Student".to_string(),
            id,
        })
    }

    /// Returns true if this error reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Resource(ResourceError::NotFound { .. }))
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::course_not_found(7);
        assert_eq!(err.to_string(), "resource not found: Course/7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_reference_display() {
        let err = ValidationError::UnknownReference {
            field: "students".to_string(),
            ids: vec![3, 9],
        };
        assert_eq!(err.to_string(), "unknown students reference(s): [3, 9]");
    }

    #[test]
    fn test_backend_error_is_not_not_found() {
        let err = StorageError::Backend(BackendError::Unavailable {
            backend_name: "sqlite".to_string(),
            message: "down".to_string(),
        });
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("unavailable"));
    }
}
