//! CourseStorage and StudentStorage implementations for SQLite.

use async_trait::async_trait;
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params, params_from_iter};
use tracing::debug;

use crate::core::{CourseStorage, StudentStorage};
use crate::error::{StorageError, StorageResult, ValidationError};
use crate::types::{
    Course, CourseFilter, CoursePatch, NewCourse, NewStudent, Student, normalize_ids,
};

use super::SqliteBackend;

fn validate_name(name: &str) -> StorageResult<()> {
    if name.trim().is_empty() {
        return Err(StorageError::Validation(ValidationError::InvalidField {
            field: "name".to_string(),
            message: "This field may not be blank.".to_string(),
        }));
    }
    Ok(())
}

/// Fails with `UnknownReference` listing every id that has no student row.
fn ensure_students_exist(conn: &Connection, ids: &[i64]) -> StorageResult<()> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM students WHERE id = ?1")?;

    let mut missing = Vec::new();
    for id in ids {
        if !stmt.exists(params![id])? {
            missing.push(*id);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(StorageError::Validation(ValidationError::UnknownReference {
            field: "students".to_string(),
            ids: missing,
        }))
    }
}

fn load_enrollments(conn: &Connection, course_id: i64) -> StorageResult<Vec<i64>> {
    let mut stmt = conn.prepare_cached(
        "SELECT student_id FROM course_students WHERE course_id = ?1 ORDER BY student_id",
    )?;
    let ids = stmt
        .query_map(params![course_id], |row| row.get(0))?
        .collect::<Result<Vec<i64>, _>>()?;
    Ok(ids)
}

fn replace_enrollments(conn: &Connection, course_id: i64, students: &[i64]) -> StorageResult<()> {
    conn.execute(
        "DELETE FROM course_students WHERE course_id = ?1",
        params![course_id],
    )?;

    let mut stmt = conn
        .prepare_cached("INSERT INTO course_students (course_id, student_id) VALUES (?1, ?2)")?;
    for student_id in students {
        stmt.execute(params![course_id, student_id])?;
    }
    Ok(())
}

fn load_course(conn: &Connection, id: i64) -> StorageResult<Option<Course>> {
    let name: Option<String> = conn
        .query_row("SELECT name FROM courses WHERE id = ?1", params![id], |row| {
            row.get(0)
        })
        .optional()?;

    match name {
        Some(name) => Ok(Some(Course {
            id,
            name,
            students: load_enrollments(conn, id)?,
        })),
        None => Ok(None),
    }
}

/// Builds the WHERE clause and bound values for a course filter.
fn filter_clause(filter: &CourseFilter) -> (String, Vec<SqlValue>) {
    let mut conditions = Vec::new();
    let mut values = Vec::new();

    if let Some(id) = filter.id {
        values.push(SqlValue::Integer(id));
        conditions.push(format!("id = ?{}", values.len()));
    }
    if let Some(name) = &filter.name {
        values.push(SqlValue::Text(name.clone()));
        conditions.push(format!("name = ?{}", values.len()));
    }

    if conditions.is_empty() {
        (String::new(), values)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), values)
    }
}

/// Writes run in `BEGIN IMMEDIATE` transactions so concurrent writers queue
/// on the busy timeout for the write lock instead of failing on upgrade.
/// Enrollment rows are removed by the `ON DELETE CASCADE` on
/// `course_students`, which needs `foreign_keys` on every connection.
#[async_trait]
impl CourseStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create_course(&self, course: NewCourse) -> StorageResult<Course> {
        validate_name(&course.name)?;
        let students = normalize_ids(course.students);

        let mut conn = self.get_connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        ensure_students_exist(&tx, &students)?;
        tx.execute("INSERT INTO courses (name) VALUES (?1)", params![course.name])?;
        let id = tx.last_insert_rowid();
        replace_enrollments(&tx, id, &students)?;

        tx.commit()?;

        debug!(id, students = ?students, "Created course");
        Ok(Course {
            id,
            name: course.name,
            students,
        })
    }

    async fn read_course(&self, id: i64) -> StorageResult<Option<Course>> {
        let conn = self.get_connection()?;
        load_course(&conn, id)
    }

    async fn list_courses(&self, filter: &CourseFilter) -> StorageResult<Vec<Course>> {
        let conn = self.get_connection()?;

        let (where_clause, values) = filter_clause(filter);
        let sql = format!("SELECT id, name FROM courses{} ORDER BY id", where_clause);

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values), |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, name)| -> StorageResult<Course> {
                Ok(Course {
                    id,
                    name,
                    students: load_enrollments(&conn, id)?,
                })
            })
            .collect()
    }

    async fn update_course(&self, id: i64, patch: CoursePatch) -> StorageResult<Course> {
        let patch = CoursePatch {
            name: patch.name,
            students: patch.students.map(normalize_ids),
        };
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }

        let mut conn = self.get_connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut course = load_course(&tx, id)?.ok_or_else(|| StorageError::course_not_found(id))?;

        if let Some(students) = &patch.students {
            ensure_students_exist(&tx, students)?;
            replace_enrollments(&tx, id, students)?;
        }
        if let Some(name) = &patch.name {
            tx.execute(
                "UPDATE courses SET name = ?1 WHERE id = ?2",
                params![name, id],
            )?;
        }

        tx.commit()?;

        patch.apply_to(&mut course);
        debug!(id, students = ?course.students, "Updated course");
        Ok(course)
    }

    async fn delete_course(&self, id: i64) -> StorageResult<()> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        // Enrollment rows go with the course through ON DELETE CASCADE.
        let deleted = tx.execute("DELETE FROM courses WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StorageError::course_not_found(id));
        }

        tx.commit()?;

        debug!(id, "Deleted course");
        Ok(())
    }
}

#[async_trait]
impl StudentStorage for SqliteBackend {
    async fn create_student(&self, student: NewStudent) -> StorageResult<Student> {
        validate_name(&student.name)?;

        let conn = self.get_connection()?;
        conn.execute(
            "INSERT INTO students (name) VALUES (?1)",
            params![student.name],
        )?;
        let id = conn.last_insert_rowid();

        debug!(id, "Created student");
        Ok(Student {
            id,
            name: student.name,
        })
    }

    async fn read_student(&self, id: i64) -> StorageResult<Option<Student>> {
        let conn = self.get_connection()?;
        let student = conn
            .query_row(
                "SELECT id, name FROM students WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Student {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(student)
    }

    async fn list_students(&self) -> StorageResult<Vec<Student>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare("SELECT id, name FROM students ORDER BY id")?;
        let students = stmt
            .query_map([], |row| {
                Ok(Student {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    async fn delete_student(&self, id: i64) -> StorageResult<()> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        // Enrollment rows go with the student through ON DELETE CASCADE.
        let deleted = tx.execute("DELETE FROM students WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StorageError::student_not_found(id));
        }

        tx.commit()?;

        debug!(id, "Deleted student");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_clause_empty() {
        let (clause, values) = filter_clause(&CourseFilter::new());
        assert!(clause.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn test_filter_clause_combined() {
        let filter = CourseFilter::new().with_id(3).with_name("Testology");
        let (clause, values) = filter_clause(&filter);
        assert_eq!(clause, " WHERE id = ?1 AND name = ?2");
        assert_eq!(
            values,
            vec![
                SqlValue::Integer(3),
                SqlValue::Text("Testology".to_string())
            ]
        );
    }

    #[test]
    fn test_filter_clause_name_only() {
        let (clause, _) = filter_clause(&CourseFilter::new().with_name("x"));
        assert_eq!(clause, " WHERE name = ?1");
    }

    fn enrollment_rows(backend: &SqliteBackend) -> i64 {
        backend
            .get_connection()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM course_students", [], |row| row.get(0))
            .unwrap()
    }

    #[tokio::test]
    async fn test_deletes_cascade_to_enrollments() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.init_schema().unwrap();
        let amy = backend.create_student(NewStudent::new("Amy")).await.unwrap();
        let bob = backend.create_student(NewStudent::new("Bob")).await.unwrap();
        let first = backend
            .create_course(NewCourse::new("First").with_students(vec![amy.id, bob.id]))
            .await
            .unwrap();
        backend
            .create_course(NewCourse::new("Second").with_students(vec![amy.id]))
            .await
            .unwrap();
        assert_eq!(enrollment_rows(&backend), 3);

        backend.delete_course(first.id).await.unwrap();
        assert_eq!(enrollment_rows(&backend), 1);

        backend.delete_student(amy.id).await.unwrap();
        assert_eq!(enrollment_rows(&backend), 0);
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Testology").is_ok());
        assert!(matches!(
            validate_name("   "),
            Err(StorageError::Validation(ValidationError::InvalidField { .. }))
        ));
    }
}
