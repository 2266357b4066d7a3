//! Application error type mapping to HTTP status codes and a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use linkshelf_types::error::{AuthError, BookmarkError, UserError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Signup, signin, and token verification errors.
    Auth(AuthError),
    /// Profile operation errors.
    User(UserError),
    /// Bookmark operation errors.
    Bookmark(BookmarkError),
    /// Authentication failure outside the auth service (missing/garbled header).
    Unauthorized(String),
    /// Request-shape validation error.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        AppError::User(e)
    }
}

impl From<BookmarkError> for AppError {
    fn from(e: BookmarkError) -> Self {
        AppError::Bookmark(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Auth(e @ AuthError::MissingField(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Auth(e @ AuthError::InvalidEmail(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Auth(e @ AuthError::EmailTaken(_)) => {
                (StatusCode::CONFLICT, "EMAIL_TAKEN", e.to_string())
            }
            AppError::Auth(e @ AuthError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", e.to_string())
            }
            AppError::Auth(e @ AuthError::InvalidToken) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", e.to_string())
            }
            AppError::Auth(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "AUTH_ERROR", e.to_string())
            }
            AppError::User(e @ UserError::NotFound) => {
                (StatusCode::NOT_FOUND, "USER_NOT_FOUND", e.to_string())
            }
            AppError::User(e @ UserError::InvalidEmail(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::User(e @ UserError::EmailTaken(_)) => {
                (StatusCode::CONFLICT, "EMAIL_TAKEN", e.to_string())
            }
            AppError::User(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "USER_ERROR", e.to_string())
            }
            AppError::Bookmark(e @ BookmarkError::NotFound) => {
                (StatusCode::NOT_FOUND, "BOOKMARK_NOT_FOUND", e.to_string())
            }
            AppError::Bookmark(e @ BookmarkError::AccessDenied) => {
                (StatusCode::FORBIDDEN, "ACCESS_DENIED", e.to_string())
            }
            AppError::Bookmark(e @ BookmarkError::MissingField(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Bookmark(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "BOOKMARK_ERROR", e.to_string())
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
