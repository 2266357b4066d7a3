//! Cryptographic adapters: Argon2id password hashing and opaque bearer
//! token minting with SHA-256 digests.

pub mod password;
pub mod token;
