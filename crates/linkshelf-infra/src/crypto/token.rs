//! Opaque bearer token minting.
//!
//! Tokens are 32 random bytes hex-encoded under an `lshelf_` prefix. Only
//! the SHA-256 digest of a token is ever persisted; the plaintext is shown
//! to the caller once in the signup/signin response.

use password_hash::rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};

use linkshelf_core::service::token::TokenIssuer;

/// Prefix identifying Linkshelf bearer tokens.
pub const TOKEN_PREFIX: &str = "lshelf_";

/// Random-token implementation of the `TokenIssuer` port.
pub struct OpaqueTokenIssuer;

impl OpaqueTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpaqueTokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenIssuer for OpaqueTokenIssuer {
    fn mint(&self) -> String {
        let mut key_bytes = [0u8; 32];
        OsRng.fill_bytes(&mut key_bytes);
        format!(
            "{TOKEN_PREFIX}{}",
            key_bytes
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect::<String>()
        )
    }

    fn digest(&self, token: &str) -> String {
        format!("{:x}", Sha256::digest(token.as_bytes()))
    }
}
