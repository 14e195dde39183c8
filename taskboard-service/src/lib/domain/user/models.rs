use chrono::DateTime;
use chrono::Utc;

/// User aggregate entity.
///
/// `password` holds the Argon2 hash in PHC form, never the plaintext. The
/// entity itself is not serializable; response shapes decide what leaves the
/// service, and the hash never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for persisting a new user. `password` is already hashed by the
/// time this is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}
