use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Error type for token operations.
///
/// The validation variants mirror the check order: a token is parsed, its
/// declared algorithm is checked, its signature is verified, and only then is
/// its expiry examined. Each step short-circuits, so a single variant is
/// reported per failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("token is malformed")]
    Malformed,

    #[error("token declares an algorithm outside the HMAC family")]
    AlgorithmMismatch,

    #[error("token signature does not verify")]
    SignatureInvalid,

    #[error("token is expired")]
    Expired,

    #[error("failed to sign token: {0}")]
    SigningFailed(String),
}

impl From<jsonwebtoken::errors::Error> for JwtError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => JwtError::Expired,
            ErrorKind::InvalidSignature => JwtError::SignatureInvalid,
            ErrorKind::InvalidAlgorithm => JwtError::AlgorithmMismatch,
            // Structural failures: undecodable segments, claims of the wrong
            // shape, missing required claims.
            _ => JwtError::Malformed,
        }
    }
}
