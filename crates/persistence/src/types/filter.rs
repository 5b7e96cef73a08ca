//! Course list filters.

/// Exact-match filters applied when listing courses.
///
/// Each field is optional; set fields are combined with logical AND. An
/// empty filter selects every course.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseFilter {
    /// Only the course with this id.
    pub id: Option<i64>,

    /// Only courses with exactly this name.
    pub name: Option<String>,
}

impl CourseFilter {
    /// Creates a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to the course with the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Restricts to courses with the given name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns true if no restriction is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }
}
