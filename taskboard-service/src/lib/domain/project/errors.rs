use thiserror::Error;

use crate::domain::errors::StoreError;

/// Top-level error for project operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("project not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for ProjectError {
    fn from(err: StoreError) -> Self {
        ProjectError::Storage(err.to_string())
    }
}
