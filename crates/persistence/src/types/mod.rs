//! Core types for the persistence layer.
//!
//! - [`Course`], [`NewCourse`], [`CoursePatch`] - Course records and write payloads
//! - [`Student`], [`NewStudent`] - Student records and write payloads
//! - [`CourseFilter`] - Exact-match filters for listing courses
//!
//! # Examples
//!
//! ```
//! use campus_persistence::types::{CourseFilter, NewCourse};
//!
//! let course = NewCourse::new("Testology").with_students(vec![4, 2, 4]);
//! assert_eq!(course.students, vec![2, 4]);
//!
//! let filter = CourseFilter::new().with_name("Testology");
//! assert!(!filter.is_empty());
//! ```

mod course;
mod filter;
mod student;

pub use course::{Course, CoursePatch, NewCourse};
pub use filter::CourseFilter;
pub use student::{NewStudent, Student};

/// Collapses a list of related ids into a sorted set.
///
/// Associations are sets, so duplicates carry no meaning and ordering is by id.
pub fn normalize_ids(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
