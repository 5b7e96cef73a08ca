//! Read interaction handler: `GET /courses/{id}/`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::parse_id;
use crate::error::{RestError, RestResult};
use crate::state::{AppState, CampusStorage};

/// Handler for retrieving a single course.
///
/// # Response
///
/// - `200 OK` - The course
/// - `404 Not Found` - No course with that id
///
/// # Example
///
/// ```http
/// GET /courses/1/ HTTP/1.1
/// Accept: application/json
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> RestResult<Response>
where
    S: CampusStorage,
{
    debug!(id = %raw_id, "Processing course read request");

    let id = parse_id(&raw_id, RestError::course_not_found)?;

    match state.storage().read_course(id).await? {
        Some(course) => Ok((StatusCode::OK, Json(course)).into_response()),
        None => {
            debug!(id = id, "Course not found");
            Err(RestError::course_not_found(raw_id))
        }
    }
}
