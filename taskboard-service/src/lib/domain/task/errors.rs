use thiserror::Error;

use crate::domain::errors::StoreError;

/// Top-level error for task operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for TaskError {
    fn from(err: StoreError) -> Self {
        TaskError::Storage(err.to_string())
    }
}
