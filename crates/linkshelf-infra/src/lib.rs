//! Infrastructure layer for Linkshelf.
//!
//! Contains implementations of the repository traits defined in
//! `linkshelf-core`: SQLite storage plus cryptographic adapters (Argon2id
//! password hashing, opaque token minting with SHA-256 digests).

pub mod crypto;
pub mod sqlite;
