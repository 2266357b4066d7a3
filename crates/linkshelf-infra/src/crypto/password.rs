//! Argon2id password hashing.
//!
//! Implements the `PasswordHasher` port from `linkshelf-core` using salted
//! Argon2id in PHC string format. Each hash call generates a fresh random
//! salt, so hashing the same password twice produces different output.
//!
//! SECURITY: Error values never contain the password or hash material.

use argon2::{Algorithm, Argon2, Params, Version};
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};

use linkshelf_types::error::AuthError;

/// Argon2id implementation of the `PasswordHasher` port.
///
/// Uses OWASP recommended parameters:
/// - 19 MiB memory (19456 KiB)
/// - 2 iterations
/// - 1 parallelism degree
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Create a hasher with the default (OWASP) parameters.
    pub fn new() -> Self {
        // Params::new only fails on out-of-range values; these are constants.
        let params = Params::new(19456, 2, 1, None).expect("valid argon2 params");
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl linkshelf_core::service::password::PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::Hashing)
    }

    fn verify(&self, password: &str, phc: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(phc).map_err(|_| AuthError::Hashing)?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
