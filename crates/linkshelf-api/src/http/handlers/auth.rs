//! Signup and signin handlers.

use axum::extract::State;
use axum::http::StatusCode;

use linkshelf_types::user::{AccessToken, CredentialsRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::Json;
use crate::state::AppState;

/// POST /auth/signup - Register a new account and open a session.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AccessToken>), AppError> {
    let access_token = state.auth_service.signup(body).await?;
    Ok((StatusCode::CREATED, Json(AccessToken { access_token })))
}

/// POST /auth/signin - Exchange credentials for a fresh token.
pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AccessToken>), AppError> {
    let access_token = state.auth_service.signin(body).await?;
    Ok((StatusCode::CREATED, Json(AccessToken { access_token })))
}
