//! Campus Persistence Layer
//!
//! This crate stores the two entities of the Campus courses API, [`Course`]
//! and [`Student`], and the many-to-many association between them.
//!
//! # Architecture
//!
//! - [`types`] - Entity records, write payloads and list filters
//! - [`error`] - Error types for all operations
//! - [`core`] - Repository traits ([`CourseStorage`], [`StudentStorage`], [`Backend`])
//! - [`backends`] - Backend implementations (SQLite)
//!
//! # Backend Features
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Quick Start
//!
//! ```no_run
//! use campus_persistence::backends::sqlite::SqliteBackend;
//! use campus_persistence::core::{CourseStorage, StudentStorage};
//! use campus_persistence::types::{CourseFilter, NewCourse, NewStudent};
//!
//! # async fn example() -> Result<(), campus_persistence::StorageError> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let bob = backend.create_student(NewStudent::new("Bob")).await?;
//! let course = backend
//!     .create_course(NewCourse::new("Testology").with_students(vec![bob.id]))
//!     .await?;
//!
//! let found = backend
//!     .list_courses(&CourseFilter::new().with_name("Testology"))
//!     .await?;
//! assert_eq!(found, vec![course]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Course, CourseFilter, CoursePatch, NewCourse, NewStudent, Student};

// Re-export core traits
pub use core::{Backend, BackendKind, CourseStorage, StudentStorage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
