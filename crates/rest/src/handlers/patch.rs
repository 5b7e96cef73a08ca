//! Patch interaction handler: `PATCH /courses/{id}/`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::{parse_id, require_course};
use crate::error::{RestError, RestResult};
use crate::extractors::JsonBody;
use crate::payload::parse_course_patch;
use crate::state::{AppState, CampusStorage};

/// Handler for partially updating a course.
///
/// Only the fields present in the body change. An empty body returns the
/// course unchanged. A missing course is reported before any body error.
///
/// # Response
///
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Invalid field values or unknown student ids
/// - `404 Not Found` - No course with that id
///
/// # Example
///
/// ```http
/// PATCH /courses/1/ HTTP/1.1
/// Content-Type: application/json
///
/// {"students": [2, 4]}
/// ```
pub async fn patch_handler<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
    body: Result<JsonBody, RestError>,
) -> RestResult<Response>
where
    S: CampusStorage,
{
    let id = parse_id(&raw_id, RestError::course_not_found)?;
    let patch = match body.and_then(|JsonBody(body)| parse_course_patch(&body)) {
        Ok(patch) => patch,
        Err(err) => {
            require_course(state.storage(), id).await?;
            return Err(err);
        }
    };

    debug!(
        id = id,
        name = ?patch.name,
        students = ?patch.students,
        "Processing course patch request"
    );

    let course = state.storage().update_course(id, patch).await?;

    Ok((StatusCode::OK, Json(course)).into_response())
}
