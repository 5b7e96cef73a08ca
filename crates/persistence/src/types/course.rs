//! Course record and write payloads.

use serde::{Deserialize, Serialize};

use super::normalize_ids;

/// A persisted course.
///
/// `students` holds the ids of the associated students in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier assigned by the store on creation.
    pub id: i64,

    /// Display name. Not unique.
    pub name: String,

    /// Ids of the students enrolled in this course.
    pub students: Vec<i64>,
}

/// Data required to create a course.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCourse {
    /// Display name.
    pub name: String,

    /// Ids of the students to associate, normalized to a sorted set.
    pub students: Vec<i64>,
}

impl NewCourse {
    /// Creates a course payload with no students.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
        }
    }

    /// Sets the associated students.
    pub fn with_students(mut self, students: Vec<i64>) -> Self {
        self.students = normalize_ids(students);
        self
    }
}

/// A partial update to a course.
///
/// Fields left as `None` keep their stored value. `students: Some(vec![])`
/// clears the association set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoursePatch {
    /// Replacement name.
    pub name: Option<String>,

    /// Replacement student set.
    pub students: Option<Vec<i64>>,
}

impl CoursePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement student set.
    pub fn with_students(mut self, students: Vec<i64>) -> Self {
        self.students = Some(normalize_ids(students));
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.students.is_none()
    }

    /// Applies the patch to an in-memory course.
    pub fn apply_to(&self, course: &mut Course) {
        if let Some(name) = &self.name {
            course.name = name.clone();
        }
        if let Some(students) = &self.students {
            course.students = students.clone();
        }
    }
}

impl From<NewCourse> for CoursePatch {
    /// A full replacement expressed as a patch touching every field.
    fn from(course: NewCourse) -> Self {
        Self {
            name: Some(course.name),
            students: Some(course.students),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testology() -> Course {
        Course {
            id: 1,
            name: "Testology".to_string(),
            students: vec![1, 2],
        }
    }

    #[test]
    fn test_patch_students_keeps_name() {
        let mut course = testology();
        CoursePatch::new()
            .with_students(vec![4, 2])
            .apply_to(&mut course);

        assert_eq!(course.name, "Testology");
        assert_eq!(course.students, vec![2, 4]);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let patch = CoursePatch::new();
        assert!(patch.is_empty());

        let mut course = testology();
        patch.apply_to(&mut course);
        assert_eq!(course, testology());
    }

    #[test]
    fn test_full_replacement_clears_students() {
        let mut course = testology();
        CoursePatch::from(NewCourse::new("Renamed")).apply_to(&mut course);

        assert_eq!(course.name, "Renamed");
        assert!(course.students.is_empty());
    }

    #[test]
    fn test_course_serializes_flat() {
        let value = serde_json::to_value(testology()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Testology", "students": [1, 2]})
        );
    }
}
