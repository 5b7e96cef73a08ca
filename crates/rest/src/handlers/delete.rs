//! Delete interaction handler: `DELETE /courses/{id}/`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::parse_id;
use crate::error::{RestError, RestResult};
use crate::state::{AppState, CampusStorage};

/// Handler for deleting a course.
///
/// Enrolled students are left in place.
///
/// # Response
///
/// - `204 No Content` - Course deleted
/// - `404 Not Found` - No course with that id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> RestResult<Response>
where
    S: CampusStorage,
{
    let id = parse_id(&raw_id, RestError::course_not_found)?;

    debug!(id = id, "Processing course delete request");

    state.storage().delete_course(id).await?;

    debug!(id = id, "Course deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
