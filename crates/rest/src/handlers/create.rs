//! Create interaction handler: `POST /courses/`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::JsonBody;
use crate::payload::parse_new_course;
use crate::state::{AppState, CampusStorage};

/// Handler for creating a course.
///
/// # Request Body
///
/// `{"name": "...", "students": [ids]}` with `students` optional.
///
/// # Response
///
/// - `201 Created` - The created course
/// - `400 Bad Request` - Malformed body, missing or blank name, unknown student ids
/// - `415 Unsupported Media Type` - Body is not JSON
///
/// # Example
///
/// ```http
/// POST /courses/ HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Testology", "students": [1]}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody,
) -> RestResult<Response>
where
    S: CampusStorage,
{
    let new_course = parse_new_course(&body)?;

    debug!(
        name = %new_course.name,
        students = ?new_course.students,
        "Processing course create request"
    );

    let course = state.storage().create_course(new_course).await?;

    debug!(id = course.id, "Course created");

    Ok((StatusCode::CREATED, Json(course)).into_response())
}
