//! Student record and write payload.

use serde::{Deserialize, Serialize};

/// A persisted student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Identifier assigned by the store on creation.
    pub id: i64,

    /// Display name. Not unique.
    pub name: String,
}

/// Data required to create a student.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewStudent {
    /// Display name.
    pub name: String,
}

impl NewStudent {
    /// Creates a student payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
