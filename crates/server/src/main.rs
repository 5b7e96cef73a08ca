//! Campus server
//!
//! Serves the courses and students HTTP API over a SQLite database.

use campus_rest::{ServerConfig, create_app_with_config, init_logging};
use clap::Parser;
use tracing::info;

#[cfg(feature = "sqlite")]
use campus_persistence::{
    backends::sqlite::{SqliteBackend, SqliteBackendConfig},
    core::Backend,
};

/// Creates and initializes a SQLite backend from the server configuration.
#[cfg(feature = "sqlite")]
async fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_path();
    info!(database = %db_path, "Initializing SQLite backend");

    let backend_config = SqliteBackendConfig {
        max_connections: config.db_max_connections,
        min_connections: config.db_max_connections.min(1),
        ..Default::default()
    };

    let backend = SqliteBackend::with_config(db_path, backend_config)?;
    backend.initialize().await?;
    info!(
        max_connections = backend.config().max_connections,
        "SQLite backend ready"
    );

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        database = %config.database_path(),
        "Starting Campus server"
    );

    start_sqlite(config).await
}

#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config).await?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

#[cfg(not(feature = "sqlite"))]
compile_error!("The campus server requires the 'sqlite' feature");
