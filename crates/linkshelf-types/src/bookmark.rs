use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::user::UserId;

/// Unique identifier for a bookmark, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookmarkId(pub Uuid);

impl BookmarkId {
    /// Create a new BookmarkId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a BookmarkId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for BookmarkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A saved link owned by exactly one user.
///
/// Only the owner can observe or mutate a bookmark; ownership is enforced
/// at the service layer on every read and write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: BookmarkId,
    pub user_id: UserId,
    /// Target URL string.
    pub link: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Build a fresh bookmark for the given owner.
    pub fn new(user_id: UserId, link: String, title: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: BookmarkId::new(),
            user_id,
            link,
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request to create a bookmark. `link` and `title` are required but kept
/// optional here so missing fields surface as validation errors (400), not
/// deserialization rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBookmarkRequest {
    pub link: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Partial bookmark edit. Only supplied fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditBookmarkRequest {
    pub link: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_id_display_roundtrip() {
        let id = BookmarkId::new();
        let parsed: BookmarkId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_bookmark_serializes_camel_case() {
        let bookmark = Bookmark::new(
            UserId::new(),
            "https://google.com".to_string(),
            "Google".to_string(),
            Some("Search engine".to_string()),
        );
        let json = serde_json::to_value(&bookmark).unwrap();

        assert_eq!(json["link"], "https://google.com");
        assert_eq!(json["title"], "Google");
        assert_eq!(json["description"], "Search engine");
        assert!(json.get("userId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_create_request_tolerates_missing_fields() {
        let req: CreateBookmarkRequest = serde_json::from_str("{}").unwrap();
        assert!(req.link.is_none());
        assert!(req.title.is_none());
        assert!(req.description.is_none());
    }
}
