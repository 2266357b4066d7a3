//! PasswordHasher trait for credential hashing.
//!
//! Defined in linkshelf-core so the auth service can hash and verify
//! passwords without coupling to a specific algorithm. The
//! `Argon2PasswordHasher` adapter lives in linkshelf-infra.

use linkshelf_types::error::AuthError;

/// Abstraction over password hashing and verification.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing PHC string.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a plaintext password against a stored PHC string.
    fn verify(&self, password: &str, phc: &str) -> Result<bool, AuthError>;
}
