//! Application state for the Campus REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers. Configuration is applied as router layers when the app
//! is built, so handlers only see storage.

use std::sync::Arc;

use campus_persistence::core::{Backend, CourseStorage, StudentStorage};

/// Everything a handler needs from a storage backend.
///
/// Blanket-implemented for any type that provides course and student
/// repositories plus backend health information.
pub trait CampusStorage: CourseStorage + StudentStorage + Backend + 'static {}

impl<T> CampusStorage for T where T: CourseStorage + StudentStorage + Backend + 'static {}

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`CampusStorage`])
///
/// # Example
///
/// ```rust,ignore
/// use campus_rest::AppState;
/// use campus_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let state = AppState::new(Arc::new(backend));
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,
}

// S sits behind an Arc, so it does not need to be Clone itself.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: CampusStorage> AppState<S> {
    /// Creates a new AppState around the given storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use campus_persistence::core::BackendKind;
    use campus_persistence::error::{BackendError, StorageResult};
    use campus_persistence::types::{
        Course, CourseFilter, CoursePatch, NewCourse, NewStudent, Student,
    };

    // Mock storage for testing
    #[derive(Debug)]
    struct MockStorage;

    #[async_trait]
    impl CourseStorage for MockStorage {
        fn backend_name(&self) -> &'static str {
            "mock"
        }

        async fn create_course(&self, _course: NewCourse) -> StorageResult<Course> {
            unimplemented!()
        }

        async fn read_course(&self, _id: i64) -> StorageResult<Option<Course>> {
            unimplemented!()
        }

        async fn list_courses(&self, _filter: &CourseFilter) -> StorageResult<Vec<Course>> {
            unimplemented!()
        }

        async fn update_course(&self, _id: i64, _patch: CoursePatch) -> StorageResult<Course> {
            unimplemented!()
        }

        async fn delete_course(&self, _id: i64) -> StorageResult<()> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl StudentStorage for MockStorage {
        async fn create_student(&self, _student: NewStudent) -> StorageResult<Student> {
            unimplemented!()
        }

        async fn read_student(&self, _id: i64) -> StorageResult<Option<Student>> {
            unimplemented!()
        }

        async fn list_students(&self) -> StorageResult<Vec<Student>> {
            unimplemented!()
        }

        async fn delete_student(&self, _id: i64) -> StorageResult<()> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl Backend for MockStorage {
        fn kind(&self) -> BackendKind {
            BackendKind::Custom("mock")
        }

        fn name(&self) -> &'static str {
            "mock"
        }

        async fn health_check(&self) -> Result<(), BackendError> {
            Ok(())
        }

        async fn initialize(&self) -> Result<(), BackendError> {
            Ok(())
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Arc::new(MockStorage));

        assert_eq!(state.storage().backend_name(), "mock");
        assert_eq!(state.storage().kind(), BackendKind::Custom("mock"));
    }

    #[test]
    fn test_app_state_clone_shares_storage() {
        let storage = Arc::new(MockStorage);
        let state = AppState::new(Arc::clone(&storage));
        let cloned = state.clone();

        assert!(std::ptr::eq(state.storage(), cloned.storage()));
        assert_eq!(Arc::strong_count(&storage), 3);
    }
}
