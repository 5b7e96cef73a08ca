//! SQLite backend implementation.
//!
//! Supports both in-memory databases (great for testing) and file-based
//! databases (for development and small deployments).

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
