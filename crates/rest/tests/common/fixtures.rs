//! Test fixtures for REST API testing.
//!
//! Seeds students and courses straight through the repository so API tests
//! start from known state.

use campus_persistence::backends::sqlite::SqliteBackend;
use campus_persistence::core::{CourseStorage, StudentStorage};
use campus_persistence::types::{Course, NewCourse, NewStudent, Student};

/// Creates a student.
pub async fn student_factory(backend: &SqliteBackend, name: &str) -> Student {
    backend
        .create_student(NewStudent::new(name))
        .await
        .expect("Failed to seed student")
}

/// Creates `count` students named `Student 1`, `Student 2`, ...
pub async fn student_batch(backend: &SqliteBackend, count: usize) -> Vec<Student> {
    let mut students = Vec::with_capacity(count);
    for i in 1..=count {
        students.push(student_factory(backend, &format!("Student {}", i)).await);
    }
    students
}

/// Creates a course enrolled with the given students.
pub async fn course_factory(backend: &SqliteBackend, name: &str, students: &[Student]) -> Course {
    let ids = students.iter().map(|s| s.id).collect();
    backend
        .create_course(NewCourse::new(name).with_students(ids))
        .await
        .expect("Failed to seed course")
}

/// Creates `count` courses with distinct names and no students.
pub async fn course_batch(backend: &SqliteBackend, count: usize) -> Vec<Course> {
    let mut courses = Vec::with_capacity(count);
    for i in 1..=count {
        courses.push(course_factory(backend, &format!("Course {}", i), &[]).await);
    }
    courses
}
