//! Authentication service.
//!
//! Orchestrates signup, signin, and bearer-token authentication. Passwords
//! are hashed through the `PasswordHasher` port; tokens are minted and
//! digested through the `TokenIssuer` port, and only digests reach storage.

use linkshelf_types::error::{AuthError, RepositoryError};
use linkshelf_types::session::Session;
use linkshelf_types::user::{CredentialsRequest, User};

use crate::repository::session::SessionRepository;
use crate::repository::user::UserRepository;
use crate::service::password::PasswordHasher;
use crate::service::token::TokenIssuer;
use crate::service::validate_email;

/// Service for credential-based session issuance and token validation.
pub struct AuthService<U: UserRepository, S: SessionRepository, P: PasswordHasher, T: TokenIssuer> {
    user_repo: U,
    session_repo: S,
    hasher: P,
    tokens: T,
}

/// Extract and validate both credential fields from a request body.
///
/// Missing or empty fields map to `MissingField` so the HTTP layer can
/// answer 400, matching the observable behavior for empty signup/signin
/// bodies.
fn validate_credentials(request: &CredentialsRequest) -> Result<(String, String), AuthError> {
    let email = match request.email.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() => e.to_string(),
        _ => return Err(AuthError::MissingField("email")),
    };
    let password = match request.password.as_deref() {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => return Err(AuthError::MissingField("password")),
    };
    validate_email(&email)?;
    Ok((email, password))
}

impl<U: UserRepository, S: SessionRepository, P: PasswordHasher, T: TokenIssuer>
    AuthService<U, S, P, T>
{
    /// Create a new AuthService.
    pub fn new(user_repo: U, session_repo: S, hasher: P, tokens: T) -> Self {
        Self {
            user_repo,
            session_repo,
            hasher,
            tokens,
        }
    }

    /// Register a new account and open a session.
    ///
    /// Returns the plaintext bearer token; it is never stored or logged.
    pub async fn signup(&self, request: CredentialsRequest) -> Result<String, AuthError> {
        let (email, password) = validate_credentials(&request)?;

        let password_hash = self.hasher.hash(&password)?;
        let user = User::new(email.clone(), password_hash);

        let user = self.user_repo.create(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::EmailTaken(email),
            other => AuthError::Storage(other.to_string()),
        })?;

        tracing::info!(user_id = %user.id, "user signed up");
        self.open_session(&user).await
    }

    /// Exchange credentials for a session token.
    ///
    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` error so accounts cannot be enumerated.
    pub async fn signin(&self, request: CredentialsRequest) -> Result<String, AuthError> {
        let (email, password) = validate_credentials(&request)?;

        let user = self
            .user_repo
            .get_by_email(&email)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(&password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "user signed in");
        self.open_session(&user).await
    }

    /// Resolve a presented bearer token to its user.
    ///
    /// Refreshes `last_used_at` best-effort; a failed touch never fails the
    /// request.
    pub async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
        let token_hash = self.tokens.digest(token);

        let session = self
            .session_repo
            .get_by_token_hash(&token_hash)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?
            .ok_or(AuthError::InvalidToken)?;

        let user = self
            .user_repo
            .get_by_id(&session.user_id)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?
            .ok_or(AuthError::InvalidToken)?;

        if let Err(e) = self
            .session_repo
            .touch_last_used(&session.id, chrono::Utc::now())
            .await
        {
            tracing::debug!(session_id = %session.id, error = %e, "failed to touch session");
        }

        Ok(user)
    }

    /// Mint a token, persist its digest, and hand the plaintext back.
    async fn open_session(&self, user: &User) -> Result<String, AuthError> {
        let token = self.tokens.mint();
        let session = Session::new(user.id.clone(), self.tokens.digest(&token));

        self.session_repo
            .create(&session)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        Ok(token)
    }
}
