//! Request payload validation.
//!
//! Turns a JSON object body into the persistence write types, collecting
//! every field problem before failing so a single `400` reports them all.
//! Read-only (`id`) and unknown fields are ignored.

use campus_persistence::types::{CoursePatch, NewCourse, NewStudent, normalize_ids};
use serde_json::{Map, Value};

use crate::error::{FieldErrors, RestError, RestResult};

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NOT_STRING: &str = "Not a valid string.";

/// Returns the name clients know a JSON value's type by in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Parses the body of a course create or full update.
///
/// `name` is required. An absent `students` means no students.
pub fn parse_new_course(body: &Map<String, Value>) -> RestResult<NewCourse> {
    let mut errors = FieldErrors::new();

    let name = name_field(body, true, &mut errors);
    let students = students_field(body, &mut errors);

    match name {
        Some(name) if errors.is_empty() => {
            Ok(NewCourse::new(name).with_students(students.unwrap_or_default()))
        }
        _ => Err(RestError::Validation { errors }),
    }
}

/// Parses the body of a course partial update.
pub fn parse_course_patch(body: &Map<String, Value>) -> RestResult<CoursePatch> {
    let mut errors = FieldErrors::new();

    let name = name_field(body, false, &mut errors);
    let students = students_field(body, &mut errors);

    if !errors.is_empty() {
        return Err(RestError::Validation { errors });
    }

    let mut patch = CoursePatch::new();
    if let Some(name) = name {
        patch = patch.with_name(name);
    }
    if let Some(students) = students {
        patch = patch.with_students(students);
    }
    Ok(patch)
}

/// Parses the body of a student create.
pub fn parse_new_student(body: &Map<String, Value>) -> RestResult<NewStudent> {
    let mut errors = FieldErrors::new();

    match name_field(body, true, &mut errors) {
        Some(name) if errors.is_empty() => Ok(NewStudent::new(name)),
        _ => Err(RestError::Validation { errors }),
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}

/// Numbers are accepted and stringified. Surrounding whitespace is trimmed.
fn name_field(body: &Map<String, Value>, required: bool, errors: &mut FieldErrors) -> Option<String> {
    let raw = match body.get("name") {
        None => {
            if required {
                push(errors, "name", REQUIRED);
            }
            return None;
        }
        Some(Value::Null) => {
            push(errors, "name", NOT_NULL);
            return None;
        }
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => {
            push(errors, "name", NOT_STRING);
            return None;
        }
    };

    let name = raw.trim();
    if name.is_empty() {
        push(errors, "name", NOT_BLANK);
        return None;
    }
    Some(name.to_string())
}

/// Accepts integers and integer strings. Stops at the first bad element.
fn students_field(body: &Map<String, Value>, errors: &mut FieldErrors) -> Option<Vec<i64>> {
    let items = match body.get("students")? {
        Value::Null => {
            push(errors, "students", NOT_NULL);
            return None;
        }
        Value::Array(items) => items,
        other => {
            push(
                errors,
                "students",
                format!(
                    "Expected a list of items but got type \"{}\".",
                    json_type_name(other)
                ),
            );
            return None;
        }
    };

    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        let id = match item {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        match id {
            Some(id) => ids.push(id),
            None => {
                push(
                    errors,
                    "students",
                    format!(
                        "Incorrect type. Expected pk value, received {}.",
                        json_type_name(item)
                    ),
                );
                return None;
            }
        }
    }

    Some(normalize_ids(ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    fn field_errors(err: RestError) -> FieldErrors {
        match err {
            RestError::Validation { errors } => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_course_with_students() {
        let course =
            parse_new_course(&object(json!({"name": "Testology", "students": [3, "1", 3]})))
                .unwrap();
        assert_eq!(course.name, "Testology");
        assert_eq!(course.students, vec![1, 3]);
    }

    #[test]
    fn test_new_course_ignores_read_only_and_unknown_fields() {
        let course = parse_new_course(&object(json!({"id": 99, "name": "X", "extra": true})))
            .unwrap();
        assert_eq!(course, NewCourse::new("X"));
    }

    #[test]
    fn test_new_course_requires_name() {
        let errors = field_errors(parse_new_course(&object(json!({"students": []}))).unwrap_err());
        assert_eq!(errors["name"], vec![REQUIRED.to_string()]);
    }

    #[test]
    fn test_new_course_reports_every_field() {
        let errors = field_errors(
            parse_new_course(&object(json!({"name": "  ", "students": "1"}))).unwrap_err(),
        );
        assert_eq!(errors["name"], vec![NOT_BLANK.to_string()]);
        assert_eq!(
            errors["students"],
            vec!["Expected a list of items but got type \"str\".".to_string()]
        );
    }

    #[test]
    fn test_name_type_handling() {
        let course = parse_new_course(&object(json!({"name": 101}))).unwrap();
        assert_eq!(course.name, "101");

        let errors = field_errors(parse_new_course(&object(json!({"name": ["a"]}))).unwrap_err());
        assert_eq!(errors["name"], vec![NOT_STRING.to_string()]);

        let errors = field_errors(parse_new_course(&object(json!({"name": null}))).unwrap_err());
        assert_eq!(errors["name"], vec![NOT_NULL.to_string()]);
    }

    #[test]
    fn test_bad_student_element() {
        let errors = field_errors(
            parse_new_course(&object(json!({"name": "X", "students": [1, true]}))).unwrap_err(),
        );
        assert_eq!(
            errors["students"],
            vec!["Incorrect type. Expected pk value, received bool.".to_string()]
        );
    }

    #[test]
    fn test_patch_only_sets_present_fields() {
        let patch = parse_course_patch(&object(json!({"students": [4, 2]}))).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.students, Some(vec![2, 4]));

        let empty = parse_course_patch(&Map::new()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_patch_rejects_blank_name() {
        let errors = field_errors(parse_course_patch(&object(json!({"name": ""}))).unwrap_err());
        assert_eq!(errors["name"], vec![NOT_BLANK.to_string()]);
    }

    #[test]
    fn test_new_student() {
        let student = parse_new_student(&object(json!({"name": " Bob "}))).unwrap();
        assert_eq!(student.name, "Bob");
        assert!(parse_new_student(&Map::new()).is_err());
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type_name(&json!(1)), "int");
        assert_eq!(json_type_name(&json!(1.5)), "float");
        assert_eq!(json_type_name(&json!({})), "dict");
        assert_eq!(json_type_name(&Value::Null), "NoneType");
    }
}
