//! Student collection handlers.
//!
//! - `GET /students/`
//! - `POST /students/`
//! - `GET /students/{id}/`
//! - `DELETE /students/{id}/`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::parse_id;
use crate::error::{RestError, RestResult};
use crate::extractors::JsonBody;
use crate::payload::parse_new_student;
use crate::state::{AppState, CampusStorage};

/// Lists every student in creation order.
pub async fn list_students_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: CampusStorage,
{
    debug!("Processing student list request");

    let students = state.storage().list_students().await?;
    Ok((StatusCode::OK, Json(students)).into_response())
}

/// Creates a student from `{"name": "..."}`.
///
/// # Response
///
/// - `201 Created` - The created student
/// - `400 Bad Request` - Missing or blank name
pub async fn create_student_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody,
) -> RestResult<Response>
where
    S: CampusStorage,
{
    let new_student = parse_new_student(&body)?;

    debug!(name = %new_student.name, "Processing student create request");

    let student = state.storage().create_student(new_student).await?;

    debug!(id = student.id, "Student created");

    Ok((StatusCode::CREATED, Json(student)).into_response())
}

/// Retrieves a single student.
pub async fn read_student_handler<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> RestResult<Response>
where
    S: CampusStorage,
{
    debug!(id = %raw_id, "Processing student read request");

    let id = parse_id(&raw_id, RestError::student_not_found)?;

    state
        .storage()
        .read_student(id)
        .await?
        .map(|student| (StatusCode::OK, Json(student)).into_response())
        .ok_or_else(|| RestError::student_not_found(raw_id))
}

/// Deletes a student and drops it from every course it was enrolled in.
///
/// # Response
///
/// - `204 No Content` - Student deleted
/// - `404 Not Found` - No student with that id
pub async fn delete_student_handler<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> RestResult<Response>
where
    S: CampusStorage,
{
    let id = parse_id(&raw_id, RestError::student_not_found)?;

    debug!(id = id, "Processing student delete request");

    state.storage().delete_student(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
