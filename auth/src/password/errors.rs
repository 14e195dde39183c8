use thiserror::Error;

/// Error type for password operations.
///
/// A mismatch during verification is not an error, it is `Ok(false)`; this
/// variant covers the hashing machinery itself failing, including a stored
/// hash that cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    HashingFailed(String),
}
