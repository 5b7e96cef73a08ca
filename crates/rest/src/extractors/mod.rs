//! Axum extractors for request bodies and query filters.
//!
//! - [`JsonBody`] - Extract a JSON object body
//! - [`CourseFilterQuery`] - Extract the course list filters

mod course_filter;
mod json_body;

pub use course_filter::CourseFilterQuery;
pub use json_body::JsonBody;
