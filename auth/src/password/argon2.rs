use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way password hashing, Argon2id with a fresh random salt per call.
///
/// Two hashes of the same plaintext never compare equal; the only way to check
/// a candidate is [`verify`](PasswordHasher::verify), which reads the salt and
/// work-factor parameters back out of the stored PHC string.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password.
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing operation itself failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext candidate against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; errors only when `hash` is not a
    /// parseable PHC string.
    ///
    /// # Errors
    /// * `HashingFailed` - the stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| PasswordError::HashingFailed(format!("invalid password hash: {}", e)))?;

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("failed to hash password");

        assert!(hasher
            .verify(password, &hash)
            .expect("failed to verify password"));
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted_per_call() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("password123").expect("failed to hash password");
        let second = hasher.hash("password123").expect("failed to hash password");

        // Fresh salt every call, so the strings differ but both verify.
        assert_ne!(first, second);
        assert!(hasher
            .verify("password123", &first)
            .expect("failed to verify password"));
        assert!(hasher
            .verify("password123", &second)
            .expect("failed to verify password"));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();

        let result = hasher.verify("password", "not_a_phc_string");

        assert!(matches!(result, Err(PasswordError::HashingFailed(_))));
    }
}
