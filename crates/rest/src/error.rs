//! Error types for the Campus REST API.
//!
//! Every error is rendered as a JSON body. Field-level problems use an
//! object mapping each field to its messages; everything else uses a single
//! `detail` string.
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status | Body |
//! |--------------|-------------|------|
//! | NotFound | 404 | `{"detail": "Not found."}` |
//! | InvalidField | 400 | `{"<field>": ["<message>"]}` |
//! | UnknownReference | 400 | `{"<field>": ["Invalid pk \"<id>\" - object does not exist."]}` |
//! | Unavailable | 503 | `{"detail": "..."}` |
//! | other backend errors | 500 | `{"detail": "..."}` |

use std::collections::BTreeMap;
use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_persistence::error::{BackendError, ResourceError, StorageError, ValidationError};
use tracing::error;

/// Field name to the list of problems found with it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Resource not found (HTTP 404).
    NotFound {
        /// The resource type (e.g., "Course").
        resource_type: String,
        /// The requested identifier, as it appeared in the request.
        id: String,
    },

    /// Field-level validation failure (HTTP 400).
    Validation {
        /// Problems keyed by field name.
        errors: FieldErrors,
    },

    /// Malformed request (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Request body exceeds the configured limit (HTTP 413).
    PayloadTooLarge,

    /// Storage is not reachable (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Creates a validation error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        RestError::Validation { errors }
    }

    /// Creates a not-found error for a course.
    pub fn course_not_found(id: impl Into<String>) -> Self {
        RestError::NotFound {
            resource_type: "Course".to_string(),
            id: id.into(),
        }
    }

    /// Creates a not-found error for a student.
    pub fn student_not_found(id: impl Into<String>) -> Self {
        RestError::NotFound {
            resource_type: "Student".to_string(),
            id: id.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Validation { .. } | RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource_type, id } => {
                write!(f, "Resource not found: {}/{}", resource_type, id)
            }
            RestError::Validation { errors } => {
                let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
                write!(f, "Validation failed for: {}", fields.join(", "))
            }
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::PayloadTooLarge => write!(f, "Request body too large"),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            RestError::NotFound { .. } => detail("Not found."),
            RestError::Validation { errors } => serde_json::json!(errors),
            RestError::BadRequest { message } => detail(&message),
            RestError::UnsupportedMediaType { content_type } => detail(&format!(
                "Unsupported media type \"{}\" in request.",
                content_type
            )),
            RestError::PayloadTooLarge => detail("Request body too large."),
            RestError::ServiceUnavailable { message } => detail(&message),
            RestError::InternalError { message } => {
                error!(message = %message, "Internal server error");
                detail("A server error occurred.")
            }
        };

        (status, Json(body)).into_response()
    }
}

fn detail(message: &str) -> serde_json::Value {
    serde_json::json!({ "detail": message })
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { resource_type, id } => RestError::NotFound {
                resource_type,
                id: id.to_string(),
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidField { field, message } => RestError::field(field, message),
            ValidationError::UnknownReference { field, ids } => {
                let messages = ids
                    .iter()
                    .map(|id| format!("Invalid pk \"{}\" - object does not exist.", id))
                    .collect();
                let mut errors = FieldErrors::new();
                errors.insert(field, messages);
                RestError::Validation { errors }
            }
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. } => {
                RestError::ServiceUnavailable {
                    message: err.to_string(),
                }
            }
            _ => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::course_not_found("123");
        assert_eq!(err.to_string(), "Resource not found: Course/123");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err: RestError = StorageError::course_not_found(9).into();
        assert!(matches!(
            err,
            RestError::NotFound { ref resource_type, ref id } if resource_type == "Course" && id == "9"
        ));
    }

    #[test]
    fn test_unknown_reference_lists_every_id() {
        let err: RestError = StorageError::Validation(ValidationError::UnknownReference {
            field: "students".to_string(),
            ids: vec![3, 8],
        })
        .into();

        match err {
            RestError::Validation { errors } => {
                assert_eq!(
                    errors["students"],
                    vec![
                        "Invalid pk \"3\" - object does not exist.".to_string(),
                        "Invalid pk \"8\" - object does not exist.".to_string(),
                    ]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_field_message() {
        let err: RestError = ValidationError::InvalidField {
            field: "name".to_string(),
            message: "This field may not be blank.".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Validation failed for: name");
    }

    #[test]
    fn test_backend_errors_split_by_availability() {
        let unavailable: RestError = BackendError::Unavailable {
            backend_name: "sqlite".to_string(),
            message: "down".to_string(),
        }
        .into();
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let internal: RestError = BackendError::MigrationError {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
