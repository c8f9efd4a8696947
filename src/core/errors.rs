use thiserror::Error;

use crate::infrastructure::storage::StoreError;

#[derive(Debug)]
pub struct FieldError {
    pub field: String,
    pub description: String,
}

#[derive(Error, Debug)]
pub enum StudentError {
    #[error("{0}")]
    InvalidPayload(String),
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
    #[error("Invalid input for field `{}`: {}", .0.field, .0.description)]
    InvalidInput(FieldError),
    #[error("Failed to create student")]
    NotCreated,
    #[error("{0}")]
    Create(StoreError),
    #[error("{0}")]
    List(StoreError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please set SUPABASE_URL and SUPABASE_KEY environment variables")]
    MissingStoreCredentials,
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
