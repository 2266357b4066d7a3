//! Bearer token authentication extractor.
//!
//! Extracts the token from `Authorization: Bearer <token>`, hashes it, and
//! resolves it to a user through the auth service. Handlers that extract
//! [`CurrentUser`] are authenticated; everything else is public.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use linkshelf_types::error::AuthError;
use linkshelf_types::user::User;

use crate::http::error::AppError;
use crate::state::AppState;

/// The authenticated caller. Extracting this validates the bearer token.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts)?;

        let user = state
            .auth_service
            .authenticate(&token)
            .await
            .map_err(|e| match e {
                AuthError::Storage(msg) => AppError::Internal(msg),
                _ => AppError::Unauthorized("Invalid or expired token".to_string()),
            })?;

        Ok(CurrentUser(user))
    }
}

/// Extract the bearer token from the Authorization header.
fn extract_bearer_token(parts: &Parts) -> Result<String, AppError> {
    let auth = parts.headers.get("authorization").ok_or_else(|| {
        AppError::Unauthorized(
            "Missing token. Provide via 'Authorization: Bearer <token>' header.".to_string(),
        )
    })?;

    let auth_str = auth
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid Authorization header encoding".to_string()))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AppError::Unauthorized(
            "Malformed Authorization header. Expected 'Bearer <token>'.".to_string(),
        )),
    }
}
