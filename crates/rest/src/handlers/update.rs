//! Update interaction handler: `PUT /courses/{id}/`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_persistence::types::CoursePatch;
use tracing::debug;

use super::{parse_id, require_course};
use crate::error::{RestError, RestResult};
use crate::extractors::JsonBody;
use crate::payload::parse_new_course;
use crate::state::{AppState, CampusStorage};

/// Handler for replacing a course.
///
/// The body has the same shape as a create. Omitting `students` clears the
/// course's student set. A missing course is reported before any body
/// error.
///
/// # Response
///
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Invalid body or unknown student ids
/// - `404 Not Found` - No course with that id
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
    body: Result<JsonBody, RestError>,
) -> RestResult<Response>
where
    S: CampusStorage,
{
    let id = parse_id(&raw_id, RestError::course_not_found)?;

    debug!(id = id, "Processing course update request");

    let replacement = match body.and_then(|JsonBody(body)| parse_new_course(&body)) {
        Ok(replacement) => replacement,
        Err(err) => {
            require_course(state.storage(), id).await?;
            return Err(err);
        }
    };
    let course = state
        .storage()
        .update_course(id, CoursePatch::from(replacement))
        .await?;

    Ok((StatusCode::OK, Json(course)).into_response())
}
