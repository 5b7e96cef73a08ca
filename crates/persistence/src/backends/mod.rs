//! Database backend implementations.
//!
//! Each backend implements [`CourseStorage`](crate::core::CourseStorage),
//! [`StudentStorage`](crate::core::StudentStorage) and
//! [`Backend`](crate::core::Backend), and is gated behind a feature flag.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | SQLite | `sqlite` | Embedded database, in-memory or file based |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! use campus_persistence::backends::sqlite::SqliteBackend;
//!
//! # #[cfg(feature = "sqlite")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory SQLite backend
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! // Or use a file-based database
//! let backend = SqliteBackend::open("./data/campus.db")?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "sqlite")]
pub mod sqlite;
