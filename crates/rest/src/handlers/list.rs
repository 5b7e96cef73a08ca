//! List interaction handler: `GET /courses/`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CourseFilterQuery;
use crate::state::{AppState, CampusStorage};

/// Handler for listing courses.
///
/// Returns every course in creation order, narrowed by the optional `id`
/// and `name` exact-match filters.
///
/// # Response
///
/// - `200 OK` - JSON array of courses (possibly empty)
/// - `400 Bad Request` - `id` filter is not a number
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    CourseFilterQuery(filter): CourseFilterQuery,
) -> RestResult<Response>
where
    S: CampusStorage,
{
    debug!(
        id = ?filter.id,
        name = ?filter.name,
        "Processing course list request"
    );

    let courses = state.storage().list_courses(&filter).await?;

    debug!(count = courses.len(), "Returning courses");

    Ok((StatusCode::OK, Json(courses)).into_response())
}
