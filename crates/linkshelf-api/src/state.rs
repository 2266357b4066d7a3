//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the REST API.
//! Services are generic over repository/crypto traits, but AppState pins
//! them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use linkshelf_core::service::auth::AuthService;
use linkshelf_core::service::bookmark::BookmarkService;
use linkshelf_core::service::user::UserService;
use linkshelf_infra::crypto::password::Argon2PasswordHasher;
use linkshelf_infra::crypto::token::OpaqueTokenIssuer;
use linkshelf_infra::sqlite::bookmark::SqliteBookmarkRepository;
use linkshelf_infra::sqlite::pool::{DatabasePool, resolve_data_dir};
use linkshelf_infra::sqlite::session::SqliteSessionRepository;
use linkshelf_infra::sqlite::user::SqliteUserRepository;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAuthService = AuthService<
    SqliteUserRepository,
    SqliteSessionRepository,
    Argon2PasswordHasher,
    OpaqueTokenIssuer,
>;

pub type ConcreteUserService = UserService<SqliteUserRepository>;

pub type ConcreteBookmarkService = BookmarkService<SqliteBookmarkRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<ConcreteAuthService>,
    pub user_service: Arc<ConcreteUserService>,
    pub bookmark_service: Arc<ConcreteBookmarkService>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state in the default data directory
    /// (`LINKSHELF_DATA_DIR` or `~/.linkshelf`).
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_at(resolve_data_dir()).await
    }

    /// Initialize the application state rooted at an explicit data
    /// directory: connect to the database and wire services.
    pub async fn init_at(data_dir: PathBuf) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("linkshelf.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let auth_service = AuthService::new(
            SqliteUserRepository::new(db_pool.clone()),
            SqliteSessionRepository::new(db_pool.clone()),
            Argon2PasswordHasher::new(),
            OpaqueTokenIssuer::new(),
        );

        let user_service = UserService::new(SqliteUserRepository::new(db_pool.clone()));

        let bookmark_service =
            BookmarkService::new(SqliteBookmarkRepository::new(db_pool.clone()));

        Ok(Self {
            auth_service: Arc::new(auth_service),
            user_service: Arc::new(user_service),
            bookmark_service: Arc::new(bookmark_service),
            data_dir,
            db_pool,
        })
    }
}
