//! TokenIssuer trait for opaque bearer tokens.
//!
//! The auth service mints a token on signup/signin and stores only its
//! digest; on each authenticated request the presented token is digested
//! again and looked up. The concrete issuer lives in linkshelf-infra.

/// Abstraction over opaque token generation and digesting.
pub trait TokenIssuer: Send + Sync {
    /// Mint a fresh opaque bearer token. The plaintext is returned to the
    /// caller exactly once and never persisted.
    fn mint(&self) -> String;

    /// Compute the storage digest of a token (hex-encoded).
    fn digest(&self, token: &str) -> String;
}
