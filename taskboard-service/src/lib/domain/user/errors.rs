use thiserror::Error;

use crate::domain::errors::StoreError;

/// Top-level error for user operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error("email already exists")]
    EmailAlreadyExists,

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            // The only unique constraint on users guards the email column.
            StoreError::Duplicate(_) => UserError::EmailAlreadyExists,
            StoreError::Database(msg) => UserError::Storage(msg),
        }
    }
}
