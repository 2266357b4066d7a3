//! Session repository trait definition.

use chrono::{DateTime, Utc};
use linkshelf_types::error::RepositoryError;
use linkshelf_types::session::{Session, SessionId};

/// Repository trait for bearer session persistence.
///
/// Sessions are looked up by the SHA-256 digest of the presented token;
/// the plaintext token is never stored.
pub trait SessionRepository: Send + Sync {
    /// Persist a new session.
    fn create(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<Session, RepositoryError>> + Send;

    /// Look up a session by token digest.
    fn get_by_token_hash(
        &self,
        token_hash: &str,
    ) -> impl std::future::Future<Output = Result<Option<Session>, RepositoryError>> + Send;

    /// Record when the session was last presented.
    fn touch_last_used(
        &self,
        id: &SessionId,
        at: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
