//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (linkshelf-infra) implements. The core crate never depends on any
//! specific storage technology.

pub mod bookmark;
pub mod session;
pub mod user;

/// Sort order for list queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}
