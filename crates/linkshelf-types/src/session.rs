use chrono::{DateTime, Utc};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::user::UserId;

/// Unique identifier for a session, wrapping a UUID v7.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A bearer session bound to a user.
///
/// Only the SHA-256 digest of the opaque token is stored; the plaintext
/// token exists solely in the signup/signin response. Sessions never cross
/// the wire, so this type has no serde representation.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    /// Hex-encoded SHA-256 digest of the bearer token.
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed best-effort on each authenticated request.
    pub last_used_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a fresh session for the given user and token digest.
    pub fn new(user_id: UserId, token_hash: String) -> Self {
        Self {
            id: SessionId::new(),
            user_id,
            token_hash,
            created_at: Utc::now(),
            last_used_at: None,
        }
    }
}
