//! SQLite bookmark repository implementation.
//!
//! Implements `BookmarkRepository` from `linkshelf-core` using sqlx with
//! split read/write pools. List queries are always scoped by owner.

use linkshelf_core::repository::SortOrder;
use linkshelf_core::repository::bookmark::{BookmarkFilter, BookmarkRepository};
use linkshelf_types::bookmark::{Bookmark, BookmarkId};
use linkshelf_types::error::RepositoryError;
use linkshelf_types::user::UserId;
use sqlx::Row;

use super::pool::DatabasePool;
use super::user::{format_datetime, parse_datetime};

/// SQLite-backed implementation of `BookmarkRepository`.
pub struct SqliteBookmarkRepository {
    pool: DatabasePool,
}

impl SqliteBookmarkRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Bookmark.
struct BookmarkRow {
    id: String,
    user_id: String,
    link: String,
    title: String,
    description: Option<String>,
    created_at: String,
    updated_at: String,
}

impl BookmarkRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            link: row.try_get("link")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_bookmark(self) -> Result<Bookmark, RepositoryError> {
        let id = self
            .id
            .parse::<BookmarkId>()
            .map_err(|e| RepositoryError::Query(format!("invalid bookmark id: {e}")))?;
        let user_id = self
            .user_id
            .parse::<UserId>()
            .map_err(|e| RepositoryError::Query(format!("invalid user id: {e}")))?;

        Ok(Bookmark {
            id,
            user_id,
            link: self.link,
            title: self.title,
            description: self.description,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

impl BookmarkRepository for SqliteBookmarkRepository {
    async fn create(&self, bookmark: &Bookmark) -> Result<Bookmark, RepositoryError> {
        sqlx::query(
            "INSERT INTO bookmarks (id, user_id, link, title, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(bookmark.id.to_string())
        .bind(bookmark.user_id.to_string())
        .bind(&bookmark.link)
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(format_datetime(&bookmark.created_at))
        .bind(format_datetime(&bookmark.updated_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(bookmark.clone())
    }

    async fn get_by_id(&self, id: &BookmarkId) -> Result<Option<Bookmark>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM bookmarks WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let bookmark_row = BookmarkRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(bookmark_row.into_bookmark()?))
            }
            None => Ok(None),
        }
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        filter: Option<BookmarkFilter>,
    ) -> Result<Vec<Bookmark>, RepositoryError> {
        let filter = filter.unwrap_or_default();

        let mut sql = String::from("SELECT * FROM bookmarks WHERE user_id = ?");

        // Whitelist allowed sort fields to prevent SQL injection
        let sort_field = filter.sort_by.as_deref().unwrap_or("created_at");
        let safe_sort = match sort_field {
            "title" | "link" | "created_at" | "updated_at" => sort_field,
            _ => "created_at",
        };
        let order = match filter.sort_order.unwrap_or_default() {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        sql.push_str(&format!(" ORDER BY {safe_sort} {order}"));

        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = filter.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        let rows = sqlx::query(&sql)
            .bind(user_id.to_string())
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut bookmarks = Vec::with_capacity(rows.len());
        for row in &rows {
            let bookmark_row =
                BookmarkRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            bookmarks.push(bookmark_row.into_bookmark()?);
        }

        Ok(bookmarks)
    }

    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, RepositoryError> {
        let result = sqlx::query(
            "UPDATE bookmarks SET link = ?, title = ?, description = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&bookmark.link)
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(format_datetime(&bookmark.updated_at))
        .bind(bookmark.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(bookmark.clone())
    }

    async fn delete(&self, id: &BookmarkId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
