//! Campus route configuration.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::{AppState, CampusStorage};

/// Creates all Campus REST API routes.
///
/// # Routes
///
/// ## Operational
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness check
/// - `GET /_readiness` - Readiness check
///
/// ## Courses
/// - `GET /courses/` - List (filters: `id`, `name`)
/// - `POST /courses/` - Create
/// - `GET /courses/{id}/` - Retrieve
/// - `PUT /courses/{id}/` - Replace
/// - `PATCH /courses/{id}/` - Partial update
/// - `DELETE /courses/{id}/` - Delete
///
/// ## Students
/// - `GET /students/` - List
/// - `POST /students/` - Create
/// - `GET /students/{id}/` - Retrieve
/// - `DELETE /students/{id}/` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: CampusStorage,
{
    Router::new()
        // Operational routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        // Course routes
        .route(
            "/courses/",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/courses/{id}/",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .patch(handlers::patch_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        // Student routes
        .route(
            "/students/",
            get(handlers::list_students_handler::<S>)
                .post(handlers::create_student_handler::<S>),
        )
        .route(
            "/students/{id}/",
            get(handlers::read_student_handler::<S>).delete(handlers::delete_student_handler::<S>),
        )
        // State
        .with_state(state)
}
