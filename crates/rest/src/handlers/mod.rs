//! HTTP request handlers.
//!
//! Course interactions, one module each:
//!
//! - [`list`] - List courses, optionally filtered by `id` and `name`
//! - [`read`] - Retrieve a course by id
//! - [`create`] - Create a course
//! - [`update`] - Replace a course
//! - [`patch`] - Partially update a course
//! - [`delete`] - Delete a course
//!
//! Plus [`students`] for the student collection and [`health`] for the
//! operational endpoints.

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod patch;
pub mod read;
pub mod students;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use list::list_handler;
pub use patch::patch_handler;
pub use read::read_handler;
pub use students::{
    create_student_handler, delete_student_handler, list_students_handler, read_student_handler,
};
pub use update::update_handler;

use crate::error::{RestError, RestResult};
use crate::state::CampusStorage;

/// Parses a path identifier. Anything that is not an integer cannot name an
/// existing record, so it is reported through `not_found`.
pub(crate) fn parse_id(raw: &str, not_found: fn(String) -> RestError) -> RestResult<i64> {
    raw.parse::<i64>().map_err(|_| not_found(raw.to_string()))
}

/// Fails with 404 when no course has `id`.
///
/// Update handlers call this before reporting a body error, so a bad body
/// sent to a missing course is a 404 rather than a 400.
pub(crate) async fn require_course<S>(storage: &S, id: i64) -> RestResult<()>
where
    S: CampusStorage,
{
    match storage.read_course(id).await? {
        Some(_) => Ok(()),
        None => Err(RestError::course_not_found(id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", RestError::course_not_found).unwrap(), 42);
        assert!(matches!(
            parse_id("abc", RestError::course_not_found),
            Err(RestError::NotFound { ref id, .. }) if id == "abc"
        ));
    }
}
