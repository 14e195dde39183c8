//! Credential and token primitives for the taskboard service.
//!
//! Two independent pieces:
//! - Password hashing (Argon2id, PHC string format)
//! - Bearer token issue and validation (JWT, HMAC-signed)
//!
//! Both are stateless: the only thing a handler carries is the signing secret
//! it was constructed with, so instances are cheap and safe to share across
//! request tasks.
//!
//! # Examples
//!
//! ```
//! use auth::JwtHandler;
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("hunter2").unwrap();
//! assert!(hasher.verify("hunter2", &hash).unwrap());
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue(42).unwrap();
//! let claims = handler.validate(&token).unwrap();
//! assert_eq!(claims.sub, "42");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
