//! REST API test harness.

use std::sync::Arc;

use axum_test::TestServer;
use campus_persistence::{backends::sqlite::SqliteBackend, core::Backend};
use campus_rest::{ServerConfig, create_app_with_shared_storage};

/// Creates a test server over a fresh in-memory database.
///
/// The backend handle is returned alongside so tests can seed data directly
/// and check what the API wrote.
pub async fn create_test_server() -> (TestServer, Arc<SqliteBackend>) {
    create_test_server_with_config(ServerConfig::for_testing()).await
}

/// Creates a test server with a custom configuration.
pub async fn create_test_server_with_config(
    config: ServerConfig,
) -> (TestServer, Arc<SqliteBackend>) {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.initialize().await.expect("Failed to init schema");
    let backend = Arc::new(backend);

    let app = create_app_with_shared_storage(Arc::clone(&backend), config);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}
