//! Repository traits for courses and students.
//!
//! [`CourseStorage`] and [`StudentStorage`] define the create / read / list /
//! update / delete operations the HTTP layer calls. Implementations must make
//! every mutating call atomic: reference validation and the writes it guards
//! either all commit or none do.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Course, CourseFilter, CoursePatch, NewCourse, NewStudent, Student};

/// Storage operations over courses.
///
/// # Example
///
/// ```ignore
/// use campus_persistence::core::CourseStorage;
/// use campus_persistence::types::{CourseFilter, CoursePatch, NewCourse};
///
/// async fn example<S: CourseStorage>(storage: &S) -> StorageResult<()> {
///     let course = storage
///         .create_course(NewCourse::new("Testology").with_students(vec![1]))
///         .await?;
///
///     let same = storage.list_courses(&CourseFilter::new().with_id(course.id)).await?;
///     assert_eq!(same.len(), 1);
///
///     storage
///         .update_course(course.id, CoursePatch::new().with_students(vec![2, 4]))
///         .await?;
///     storage.delete_course(course.id).await?;
///     assert!(storage.read_course(course.id).await?.is_none());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait CourseStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a course and associates the given students.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation(UnknownReference)` - If any student id does not exist
    async fn create_course(&self, course: NewCourse) -> StorageResult<Course>;

    /// Reads a course by id, returning `None` if it does not exist.
    async fn read_course(&self, id: i64) -> StorageResult<Option<Course>>;

    /// Lists courses matching the filter, in creation order.
    async fn list_courses(&self, filter: &CourseFilter) -> StorageResult<Vec<Course>>;

    /// Applies a partial update to a course.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the course does not exist
    /// * `StorageError::Validation(UnknownReference)` - If any student id does not exist
    async fn update_course(&self, id: i64, patch: CoursePatch) -> StorageResult<Course>;

    /// Deletes a course and its student associations. Students are kept.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the course does not exist
    async fn delete_course(&self, id: i64) -> StorageResult<()>;
}

/// Storage operations over students.
#[async_trait]
pub trait StudentStorage: Send + Sync {
    /// Creates a student.
    async fn create_student(&self, student: NewStudent) -> StorageResult<Student>;

    /// Reads a student by id, returning `None` if it does not exist.
    async fn read_student(&self, id: i64) -> StorageResult<Option<Student>>;

    /// Lists all students in creation order.
    async fn list_students(&self) -> StorageResult<Vec<Student>>;

    /// Deletes a student, removing it from every course it belonged to.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the student does not exist
    async fn delete_student(&self, id: i64) -> StorageResult<()>;
}
