use crate::core::errors::{FieldError, StudentError};
use crate::core::models::student::{NewStudent, Student};
use crate::infrastructure::storage::StudentStore;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

/// The domain must be a dotted host name; bare hosts and `[...]` literals are rejected.
fn has_dotted_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => {
            !domain.starts_with('[')
                && domain.split('.').count() > 1
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// Validates registration requests and hands them to the injected store.
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        StudentService { store }
    }

    fn validate_text_input(&self, field: &str, value: &str) -> Result<(), StudentError> {
        if value.trim().is_empty() {
            return Err(StudentError::InvalidInput(FieldError {
                field: field.to_string(),
                description: format!("{} cannot be empty", field),
            }));
        }
        Ok(())
    }

    /// Checks every field of `student` without touching the store.
    pub fn validate_new_student(&self, student: &NewStudent) -> Result<(), StudentError> {
        self.validate_text_input("name", &student.name)?;
        self.validate_text_input("father_name", &student.father_name)?;
        student
            .validate()
            .map_err(|_| StudentError::InvalidEmail(student.email.clone()))?;
        if !has_dotted_domain(&student.email) {
            return Err(StudentError::InvalidEmail(student.email.clone()));
        }
        Ok(())
    }

    pub async fn create_student(&self, student: NewStudent) -> Result<Student, StudentError> {
        self.validate_new_student(&student)?;

        let created = self.store.insert_student(&student).await.map_err(|e| {
            warn!(error = %e, "store rejected student insert");
            StudentError::Create(e)
        })?;

        match created {
            Some(created) => {
                info!(student_id = created.id, "student created");
                Ok(created)
            }
            None => {
                warn!("store returned no row for student insert");
                Err(StudentError::NotCreated)
            }
        }
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, StudentError> {
        let students = self.store.list_students().await.map_err(|e| {
            error!(error = %e, "failed to list students");
            StudentError::List(e)
        })?;
        info!(count = students.len(), "students listed");
        Ok(students)
    }
}
