//! Service layer: signup/signin orchestration, profile edits, and
//! owner-scoped bookmark CRUD. Services are generic over the repository and
//! crypto traits so linkshelf-core never depends on linkshelf-infra.

pub mod auth;
pub mod bookmark;
pub mod password;
pub mod token;
pub mod user;

use linkshelf_types::error::AuthError;

/// Minimal structural email check: must contain '@' and be at least three
/// characters. Anything stricter belongs to the mail provider.
pub(crate) fn validate_email(email: &str) -> Result<(), AuthError> {
    if !email.contains('@') || email.len() < 3 {
        return Err(AuthError::InvalidEmail(email.to_string()));
    }
    Ok(())
}
