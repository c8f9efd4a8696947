use crate::core::models::student::{NewStudent, Student};
use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Malformed store row: {0}")]
    MalformedRow(String),
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),
}

/// Access to the `students` table.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Inserts one record and returns the row the store created, or `None`
    /// when the store reports no resulting row.
    async fn insert_student(&self, student: &NewStudent) -> Result<Option<Student>, StoreError>;

    /// Every record, newest `created_at` first.
    async fn list_students(&self) -> Result<Vec<Student>, StoreError>;
}

/// A raw row as returned by the store, before it is checked column by column.
#[derive(Debug, Clone)]
pub struct StudentRow(pub Map<String, Value>);

impl StudentRow {
    fn text(&self, column: &str) -> Result<String, StoreError> {
        match self.0.get(column) {
            Some(Value::String(value)) => Ok(value.clone()),
            Some(other) => Err(StoreError::MalformedRow(format!(
                "column `{}` is not text: {}",
                column, other
            ))),
            None => Err(StoreError::MalformedRow(format!("missing column `{}`", column))),
        }
    }

    fn id(&self) -> Result<i64, StoreError> {
        match self.0.get("id") {
            Some(value) => value
                .as_i64()
                .ok_or_else(|| StoreError::MalformedRow(format!("column `id` is not an integer: {}", value))),
            None => Err(StoreError::MalformedRow("missing column `id`".to_string())),
        }
    }
}

impl TryFrom<StudentRow> for Student {
    type Error = StoreError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        Ok(Student {
            id: row.id()?,
            name: row.text("name")?,
            father_name: row.text("father_name")?,
            email: row.text("email")?,
            created_at: row.text("created_at")?,
        })
    }
}

/// Maps a JSON array of rows into records, failing on the first bad row.
pub fn students_from_rows(rows: Vec<Value>) -> Result<Vec<Student>, StoreError> {
    rows.into_iter()
        .map(|value| match value {
            Value::Object(map) => Student::try_from(StudentRow(map)),
            other => Err(StoreError::MalformedRow(format!("expected an object, got {}", other))),
        })
        .collect()
}

pub mod in_memory;
pub mod supabase;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_maps_every_column() {
        let rows = vec![json!({
            "id": 7,
            "name": "Ana",
            "father_name": "Luis",
            "email": "ana@example.com",
            "created_at": "2024-06-01T12:00:00+00:00",
            "extra": true
        })];
        let students = students_from_rows(rows).unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, 7);
        assert_eq!(students[0].father_name, "Luis");
        assert_eq!(students[0].created_at, "2024-06-01T12:00:00+00:00");
    }

    #[test]
    fn test_row_missing_column_is_rejected() {
        let rows = vec![json!({
            "id": 1,
            "name": "Ana",
            "email": "ana@example.com",
            "created_at": "2024-06-01T12:00:00+00:00"
        })];
        let result = students_from_rows(rows);
        assert_eq!(
            result,
            Err(StoreError::MalformedRow("missing column `father_name`".to_string()))
        );
    }

    #[test]
    fn test_row_with_text_id_is_rejected() {
        let rows = vec![json!({
            "id": "1",
            "name": "Ana",
            "father_name": "Luis",
            "email": "ana@example.com",
            "created_at": "2024-06-01T12:00:00+00:00"
        })];
        assert!(matches!(students_from_rows(rows), Err(StoreError::MalformedRow(_))));
    }

    #[test]
    fn test_null_timestamp_is_rejected() {
        let rows = vec![json!({
            "id": 1,
            "name": "Ana",
            "father_name": "Luis",
            "email": "ana@example.com",
            "created_at": null
        })];
        assert!(matches!(students_from_rows(rows), Err(StoreError::MalformedRow(_))));
    }

    #[test]
    fn test_non_object_row_is_rejected() {
        assert!(matches!(
            students_from_rows(vec![json!([1, 2])]),
            Err(StoreError::MalformedRow(_))
        ));
    }
}
