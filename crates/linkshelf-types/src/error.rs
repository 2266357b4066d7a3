use thiserror::Error;

/// Errors from signup, signin, and token authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email: '{0}'")]
    InvalidEmail(String),

    #[error("email '{0}' is already registered")]
    EmailTaken(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid bearer token")]
    InvalidToken,

    #[error("credential hashing failed")]
    Hashing,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors related to profile operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error("invalid email: '{0}'")]
    InvalidEmail(String),

    #[error("email '{0}' is already registered")]
    EmailTaken(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors related to bookmark operations.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("bookmark not found")]
    NotFound,

    #[error("access to this bookmark is denied")]
    AccessDenied,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in linkshelf-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = AuthError::MissingField("email");
        assert_eq!(err.to_string(), "email is required");

        let err = AuthError::EmailTaken("moll@gmail.com".to_string());
        assert!(err.to_string().contains("moll@gmail.com"));
    }

    #[test]
    fn test_bookmark_error_display() {
        assert_eq!(BookmarkError::NotFound.to_string(), "bookmark not found");
        assert_eq!(
            BookmarkError::MissingField("link").to_string(),
            "link is required"
        );
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
