use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Hours until an issued token expires. Fixed for every token; there is no
/// refresh or rotation, a token simply outlives its window and dies.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Token claims.
///
/// Every field is required. A token missing any of them, or carrying a
/// non-string subject, fails deserialization and is rejected as malformed at
/// parse time instead of being interpreted at the point of use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id, stringified.
    pub sub: String,

    /// Expiration time (Unix timestamp).
    pub exp: i64,

    /// Issued at (Unix timestamp).
    pub iat: i64,
}

impl Claims {
    /// Claims for a freshly issued token, expiring [`TOKEN_TTL_HOURS`] from now.
    pub fn for_subject(subject_id: impl ToString) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(TOKEN_TTL_HOURS);

        Self {
            sub: subject_id.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }
}
