//! Bookmark repository trait definition.

use linkshelf_types::bookmark::{Bookmark, BookmarkId};
use linkshelf_types::error::RepositoryError;
use linkshelf_types::user::UserId;

use super::SortOrder;

/// Filter criteria for listing a user's bookmarks.
#[derive(Debug, Clone, Default)]
pub struct BookmarkFilter {
    /// Field to sort by (e.g., "created_at", "title").
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Maximum number of results.
    pub limit: Option<i64>,
    /// Number of results to skip (offset pagination).
    pub offset: Option<i64>,
}

/// Repository trait for bookmark persistence.
///
/// Implementations live in linkshelf-infra (e.g., SqliteBookmarkRepository).
pub trait BookmarkRepository: Send + Sync {
    /// Create a new bookmark. Returns the created bookmark.
    fn create(
        &self,
        bookmark: &Bookmark,
    ) -> impl std::future::Future<Output = Result<Bookmark, RepositoryError>> + Send;

    /// Get a bookmark by ID, regardless of owner. Ownership checks happen
    /// in the service layer so foreign reads and foreign writes can map to
    /// different errors.
    fn get_by_id(
        &self,
        id: &BookmarkId,
    ) -> impl std::future::Future<Output = Result<Option<Bookmark>, RepositoryError>> + Send;

    /// List bookmarks owned by the given user, with optional sorting and
    /// pagination.
    fn list_by_user(
        &self,
        user_id: &UserId,
        filter: Option<BookmarkFilter>,
    ) -> impl std::future::Future<Output = Result<Vec<Bookmark>, RepositoryError>> + Send;

    /// Update an existing bookmark. Returns the updated bookmark.
    fn update(
        &self,
        bookmark: &Bookmark,
    ) -> impl std::future::Future<Output = Result<Bookmark, RepositoryError>> + Send;

    /// Permanently delete a bookmark by ID.
    fn delete(
        &self,
        id: &BookmarkId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
