use crate::core::models::student::{NewStudent, Student};
use crate::infrastructure::storage::{StoreError, StudentStore};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: Vec<Student>,
}

/// A process-local `students` table that assigns ids and timestamps the
/// same way the hosted store does.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl StudentStore for InMemoryStore {
    async fn insert_student(&self, student: &NewStudent) -> Result<Option<Student>, StoreError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let row = Student {
            id: table.next_id,
            name: student.name.clone(),
            father_name: student.father_name.clone(),
            email: student.email.clone(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        };
        table.rows.push(row.clone());
        Ok(Some(row))
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();
        // Timestamps share one format, so text order is time order; ids break ties.
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}
