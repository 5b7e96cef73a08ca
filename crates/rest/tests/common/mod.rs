//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server wired to an in-memory SQLite backend
//! - [`fixtures`] - Course and student seeding helpers

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
