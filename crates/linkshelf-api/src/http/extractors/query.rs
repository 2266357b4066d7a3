//! Query parameter extractors for list endpoints.

use serde::Deserialize;

/// Query parameters for the bookmark list endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct BookmarkListQuery {
    /// Sort by field (created_at, updated_at, title, link).
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Sort order (asc, desc).
    #[serde(default = "default_order")]
    pub order: String,
    /// Maximum results.
    pub limit: Option<i64>,
    /// Offset for pagination.
    pub offset: Option<i64>,
}

fn default_sort() -> String {
    "created_at".to_string()
}

fn default_order() -> String {
    "desc".to_string()
}
