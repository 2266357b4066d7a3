//! Bookmark CRUD handlers.
//!
//! All routes require a bearer token; every operation is scoped to the
//! caller's own bookmarks.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use linkshelf_core::repository::SortOrder;
use linkshelf_core::repository::bookmark::BookmarkFilter;
use linkshelf_types::bookmark::{
    Bookmark, BookmarkId, CreateBookmarkRequest, EditBookmarkRequest,
};

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::extractors::json::Json;
use crate::http::extractors::query::BookmarkListQuery;
use crate::state::AppState;

/// GET /bookmarks - List the caller's bookmarks.
pub async fn list_bookmarks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<BookmarkListQuery>,
) -> Result<Json<Vec<Bookmark>>, AppError> {
    let sort_order = match query.order.to_lowercase().as_str() {
        "asc" => Some(SortOrder::Asc),
        _ => Some(SortOrder::Desc),
    };

    let filter = Some(BookmarkFilter {
        sort_by: Some(query.sort.clone()),
        sort_order,
        limit: query.limit,
        offset: query.offset,
    });

    let bookmarks = state.bookmark_service.list_bookmarks(&user.id, filter).await?;
    Ok(Json(bookmarks))
}

/// POST /bookmarks - Create a bookmark owned by the caller.
pub async fn create_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), AppError> {
    let bookmark = state.bookmark_service.create_bookmark(&user.id, body).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// GET /bookmarks/{id} - Get one of the caller's bookmarks.
pub async fn get_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Bookmark>, AppError> {
    let id = parse_bookmark_id(&id)?;
    let bookmark = state.bookmark_service.get_bookmark(&user.id, &id).await?;
    Ok(Json(bookmark))
}

/// PATCH /bookmarks/{id} - Apply a partial edit to a bookmark.
pub async fn edit_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, AppError> {
    let id = parse_bookmark_id(&id)?;
    let bookmark = state
        .bookmark_service
        .edit_bookmark(&user.id, &id, body)
        .await?;
    Ok(Json(bookmark))
}

/// DELETE /bookmarks/{id} - Delete a bookmark.
pub async fn delete_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_bookmark_id(&id)?;
    state.bookmark_service.delete_bookmark(&user.id, &id).await?;
    Ok(StatusCode::OK)
}

fn parse_bookmark_id(raw: &str) -> Result<BookmarkId, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("invalid bookmark id: '{raw}'")))
}
