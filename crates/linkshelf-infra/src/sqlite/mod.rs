//! SQLite persistence via sqlx.

pub mod bookmark;
pub mod pool;
pub mod session;
pub mod user;
