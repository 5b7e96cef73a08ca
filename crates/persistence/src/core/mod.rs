//! Core storage traits and abstractions.
//!
//! - [`Backend`] - Database driver identity and health
//! - [`CourseStorage`] - Course CRUD and filtered listing
//! - [`StudentStorage`] - Student CRUD
//!
//! The HTTP layer is generic over a type implementing all three.

mod backend;
mod storage;

pub use backend::{Backend, BackendKind};
pub use storage::{CourseStorage, StudentStorage};
