//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness checks for monitoring and load
//! balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::state::{AppState, CampusStorage};

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - Server is up, with the backend name and current time
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: CampusStorage,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.storage().name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness check.
///
/// # HTTP Request
///
/// `GET /_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness check.
///
/// Runs the backend health check so the server is only reported ready when
/// the database answers.
///
/// # HTTP Request
///
/// `GET /_readiness`
///
/// # Response
///
/// - `200 OK` - Storage is reachable
/// - `503 Service Unavailable` - Storage health check failed
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: CampusStorage,
{
    debug!("Processing readiness check request");

    let storage = state.storage();
    if let Err(e) = storage.health_check().await {
        warn!(backend = storage.name(), error = %e, "Readiness check failed");
        return Err(RestError::ServiceUnavailable {
            message: e.to_string(),
        });
    }

    let response = serde_json::json!({
        "status": "ready",
        "backend": storage.name(),
        "checks": {
            "storage": "ok"
        }
    });

    Ok((StatusCode::OK, Json(response)).into_response())
}
