//! Server configuration for the Campus REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CAMPUS_SERVER_PORT` | 8080 | Server port |
//! | `CAMPUS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `CAMPUS_LOG_LEVEL` | info | Log level |
//! | `CAMPUS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `CAMPUS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `CAMPUS_ENABLE_CORS` | true | Enable CORS |
//! | `CAMPUS_CORS_ORIGINS` | * | Allowed origins |
//! | `CAMPUS_CORS_METHODS` | GET,POST,PUT,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `CAMPUS_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `CAMPUS_DATABASE_URL` | campus.db | SQLite path, or `:memory:` |
//! | `CAMPUS_DB_MAX_CONNECTIONS` | 10 | SQLite connection pool size |
//!
//! # Example
//!
//! ```rust
//! use campus_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Default SQLite database path.
pub const DEFAULT_DATABASE_PATH: &str = "campus.db";

/// Server configuration for the Campus REST API.
///
/// Built from command line arguments with environment fallbacks via
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "campus")]
#[command(about = "Courses and students HTTP API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "CAMPUS_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "CAMPUS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CAMPUS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "CAMPUS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "CAMPUS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(
        long,
        env = "CAMPUS_ENABLE_CORS",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CAMPUS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "CAMPUS_CORS_METHODS",
        default_value = "GET,POST,PUT,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "CAMPUS_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// SQLite database path (`:memory:` for a throwaway database).
    #[arg(long, env = "CAMPUS_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled SQLite connections.
    #[arg(long, env = "CAMPUS_DB_MAX_CONNECTIONS", default_value = "10")]
    pub db_max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            database_url: None,
            db_max_connections: 10,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the database path, defaulting to [`DEFAULT_DATABASE_PATH`].
    pub fn database_path(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_PATH)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.db_max_connections == 0 {
            errors.push("Database connection pool size cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, an in-memory database, and disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            database_url: Some(":memory:".to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.enable_cors);
        assert_eq!(config.database_path(), "campus.db");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = ServerConfig {
            port: 0,
            request_timeout: 0,
            db_max_connections: 0,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_parse_from_args() {
        let config = ServerConfig::try_parse_from([
            "campus",
            "--port",
            "9000",
            "--database-url",
            ":memory:",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_path(), ":memory:");
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.database_path(), ":memory:");
    }
}
