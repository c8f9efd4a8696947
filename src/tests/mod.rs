
use crate::core::models::student::{NewStudent, Student};
use crate::core::services::StudentService;
use crate::infrastructure::storage::in_memory::InMemoryStore;
use crate::infrastructure::storage::{StoreError, StudentStore};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn create_test_service() -> (StudentService, InMemoryStore) {
    let store = InMemoryStore::new();
    (StudentService::new(Arc::new(store.clone())), store)
}

pub fn new_student(name: &str, father_name: &str, email: &str) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        father_name: father_name.to_string(),
        email: email.to_string(),
    }
}

/// Fails every call with the given error and counts how often it was reached.
pub struct FailingStore {
    pub error: StoreError,
    pub calls: AtomicUsize,
}

impl FailingStore {
    pub fn new(error: StoreError) -> Self {
        FailingStore {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudentStore for FailingStore {
    async fn insert_student(&self, _student: &NewStudent) -> Result<Option<Student>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

/// Accepts inserts but reports no resulting row.
pub struct NoRowStore;

#[async_trait]
impl StudentStore for NoRowStore {
    async fn insert_student(&self, _student: &NewStudent) -> Result<Option<Student>, StoreError> {
        Ok(None)
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(Vec::new())
    }
}
