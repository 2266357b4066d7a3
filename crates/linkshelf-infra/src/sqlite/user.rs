//! SQLite user repository implementation.
//!
//! Implements `UserRepository` from `linkshelf-core` using sqlx with split
//! read/write pools.

use chrono::{DateTime, Utc};
use linkshelf_core::repository::user::UserRepository;
use linkshelf_types::error::RepositoryError;
use linkshelf_types::user::{User, UserId};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain User.
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: String,
    updated_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_user(self) -> Result<User, RepositoryError> {
        let id = self
            .id
            .parse::<UserId>()
            .map_err(|e| RepositoryError::Query(format!("invalid user id: {e}")))?;

        Ok(User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO users (id, email, password_hash, first_name, last_name, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(format_datetime(&user.created_at))
        .bind(format_datetime(&user.updated_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(user.clone()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict(format!(
                    "email '{}' already exists",
                    user.email
                )))
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            "UPDATE users SET email = ?, password_hash = ?, first_name = ?, last_name = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(format_datetime(&user.updated_at))
        .bind(user.id.to_string())
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(r) if r.rows_affected() == 0 => Err(RepositoryError::NotFound),
            Ok(_) => Ok(user.clone()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict(format!(
                    "email '{}' already exists",
                    user.email
                )))
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn make_user(email: &str) -> User {
        User::new(email.to_string(), "$argon2id$test-hash".to_string())
    }

    #[tokio::test]
    async fn test_create_and_get_by_id() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);
        let user = make_user("moll@gmail.com");

        let created = repo.create(&user).await.unwrap();
        assert_eq!(created.email, "moll@gmail.com");

        let found = repo.get_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(found.email, "moll@gmail.com");
        assert_eq!(found.password_hash, "$argon2id$test-hash");
        assert!(found.first_name.is_none());
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);
        let user = make_user("someone@example.com");

        repo.create(&user).await.unwrap();

        let found = repo.get_by_email("someone@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);

        let missing = repo.get_by_email("nobody@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_email_conflict_on_create() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        repo.create(&make_user("dup@example.com")).await.unwrap();
        let err = repo.create(&make_user("dup@example.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_profile_fields() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);
        let mut user = make_user("moll@gmail.com");

        repo.create(&user).await.unwrap();

        user.first_name = Some("Moll".to_string());
        user.last_name = Some("".to_string());
        user.email = "moll@moll.com".to_string();
        user.updated_at = Utc::now();
        repo.update(&user).await.unwrap();

        let found = repo.get_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(found.first_name.as_deref(), Some("Moll"));
        assert_eq!(found.last_name.as_deref(), Some(""));
        assert_eq!(found.email, "moll@moll.com");
    }

    #[tokio::test]
    async fn test_update_email_conflict() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        repo.create(&make_user("first@example.com")).await.unwrap();
        let mut second = make_user("second@example.com");
        repo.create(&second).await.unwrap();

        second.email = "first@example.com".to_string();
        let err = repo.update(&second).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        let err = repo.update(&make_user("ghost@example.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
