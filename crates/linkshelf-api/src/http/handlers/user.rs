//! Profile handlers for the authenticated user.

use axum::extract::State;

use linkshelf_types::user::{EditUserRequest, User};

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::extractors::json::Json;
use crate::state::AppState;

/// GET /users/me - Return the caller's profile.
///
/// The user is already loaded during token verification, so this is a
/// pure echo of the extractor result.
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

/// PATCH /users - Apply a partial edit to the caller's profile.
pub async fn edit_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<EditUserRequest>,
) -> Result<Json<User>, AppError> {
    let updated = state.user_service.edit_user(&user.id, body).await?;
    Ok(Json(updated))
}
