//! # campus-rest - Courses and Students HTTP API
//!
//! This crate exposes the Campus data model over HTTP: a course collection
//! with exact-match filters, partial and full updates, and the student
//! collection that courses reference.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use campus_rest::{create_app, ServerConfig};
//! use campus_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("campus.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | list | GET | `/courses/?id=&name=` |
//! | create | POST | `/courses/` |
//! | read | GET | `/courses/{id}/` |
//! | update | PUT | `/courses/{id}/` |
//! | patch | PATCH | `/courses/{id}/` |
//! | delete | DELETE | `/courses/{id}/` |
//! | list students | GET | `/students/` |
//! | create student | POST | `/students/` |
//! | read student | GET | `/students/{id}/` |
//! | delete student | DELETE | `/students/{id}/` |
//!
//! ## Error Handling
//!
//! | HTTP Status | Body | Description |
//! |-------------|------|-------------|
//! | 400 | `{"<field>": ["..."]}` | Field validation error |
//! | 400 | `{"detail": "..."}` | Malformed JSON |
//! | 404 | `{"detail": "Not found."}` | Record not found |
//! | 408 | empty | Request timed out |
//! | 413 | `{"detail": "..."}` | Body over the configured limit |
//! | 415 | `{"detail": "..."}` | Body is not JSON |
//! | 500 | `{"detail": "..."}` | Internal server error |
//! | 503 | `{"detail": "..."}` | Storage unavailable |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (shared storage)
//! - [`extractors`] - Axum extractors for bodies and filters
//! - [`payload`] - Request body validation
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod payload;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::{AppState, CampusStorage};

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::DefaultBodyLimit, http::StatusCode};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: CampusStorage,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use campus_rest::{create_app_with_config, ServerConfig};
/// use campus_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: CampusStorage,
{
    create_app_with_shared_storage(Arc::new(storage), config)
}

/// Creates the Axum application around storage the caller keeps a handle to.
///
/// Tests use this to seed and inspect the same backend the router serves.
pub fn create_app_with_shared_storage<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: CampusStorage,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(storage);

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "campus={level},campus_rest={level},campus_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
