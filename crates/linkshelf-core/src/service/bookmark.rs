//! Bookmark service.
//!
//! Owner-scoped CRUD over bookmark records. Every operation takes the
//! caller's user id; a foreign bookmark is invisible to reads (not found)
//! and off-limits to writes (access denied).

use linkshelf_types::bookmark::{
    Bookmark, BookmarkId, CreateBookmarkRequest, EditBookmarkRequest,
};
use linkshelf_types::error::{BookmarkError, RepositoryError};
use linkshelf_types::user::UserId;

use crate::repository::bookmark::{BookmarkFilter, BookmarkRepository};

/// Service for per-user bookmark CRUD.
pub struct BookmarkService<B: BookmarkRepository> {
    bookmark_repo: B,
}

impl<B: BookmarkRepository> BookmarkService<B> {
    /// Create a new BookmarkService.
    pub fn new(bookmark_repo: B) -> Self {
        Self { bookmark_repo }
    }

    /// List the caller's bookmarks, newest first by default.
    pub async fn list_bookmarks(
        &self,
        user_id: &UserId,
        filter: Option<BookmarkFilter>,
    ) -> Result<Vec<Bookmark>, BookmarkError> {
        self.bookmark_repo
            .list_by_user(user_id, filter)
            .await
            .map_err(|e| BookmarkError::Storage(e.to_string()))
    }

    /// Create a bookmark owned by the caller.
    pub async fn create_bookmark(
        &self,
        user_id: &UserId,
        request: CreateBookmarkRequest,
    ) -> Result<Bookmark, BookmarkError> {
        let link = require_field(request.link, "link")?;
        let title = require_field(request.title, "title")?;

        let bookmark = Bookmark::new(user_id.clone(), link, title, request.description);

        self.bookmark_repo
            .create(&bookmark)
            .await
            .map_err(|e| BookmarkError::Storage(e.to_string()))
    }

    /// Get one of the caller's bookmarks by ID.
    ///
    /// Another user's bookmark is indistinguishable from a missing one.
    pub async fn get_bookmark(
        &self,
        user_id: &UserId,
        id: &BookmarkId,
    ) -> Result<Bookmark, BookmarkError> {
        let bookmark = self.fetch(id).await?;
        if &bookmark.user_id != user_id {
            return Err(BookmarkError::NotFound);
        }
        Ok(bookmark)
    }

    /// Apply a partial edit to one of the caller's bookmarks.
    pub async fn edit_bookmark(
        &self,
        user_id: &UserId,
        id: &BookmarkId,
        request: EditBookmarkRequest,
    ) -> Result<Bookmark, BookmarkError> {
        let mut bookmark = self.fetch_owned(user_id, id).await?;

        if let Some(link) = request.link {
            bookmark.link = link;
        }
        if let Some(title) = request.title {
            bookmark.title = title;
        }
        if let Some(description) = request.description {
            bookmark.description = Some(description);
        }

        bookmark.updated_at = chrono::Utc::now();

        self.bookmark_repo
            .update(&bookmark)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BookmarkError::NotFound,
                other => BookmarkError::Storage(other.to_string()),
            })
    }

    /// Delete one of the caller's bookmarks.
    pub async fn delete_bookmark(
        &self,
        user_id: &UserId,
        id: &BookmarkId,
    ) -> Result<(), BookmarkError> {
        self.fetch_owned(user_id, id).await?;

        self.bookmark_repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => BookmarkError::NotFound,
            other => BookmarkError::Storage(other.to_string()),
        })
    }

    async fn fetch(&self, id: &BookmarkId) -> Result<Bookmark, BookmarkError> {
        self.bookmark_repo
            .get_by_id(id)
            .await
            .map_err(|e| BookmarkError::Storage(e.to_string()))?
            .ok_or(BookmarkError::NotFound)
    }

    /// Fetch for mutation: a foreign bookmark is access-denied, not hidden.
    async fn fetch_owned(
        &self,
        user_id: &UserId,
        id: &BookmarkId,
    ) -> Result<Bookmark, BookmarkError> {
        let bookmark = self.fetch(id).await?;
        if &bookmark.user_id != user_id {
            return Err(BookmarkError::AccessDenied);
        }
        Ok(bookmark)
    }
}

fn require_field(value: Option<String>, name: &'static str) -> Result<String, BookmarkError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(BookmarkError::MissingField(name)),
    }
}
