use thiserror::Error;

/// Error for persistence operations.
///
/// `Duplicate` carries the violated constraint name so callers can map it to
/// the right domain conflict; everything else is opaque infrastructure
/// failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate value for {0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(String),
}
