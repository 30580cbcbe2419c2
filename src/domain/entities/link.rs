//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short code mapped to a target URL, with usage metadata.
///
/// `code` and `target_url` never change after creation. `clicks` and
/// `last_clicked_at` are only ever advanced by the store's increment
/// primitive.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a link that has never been resolved.
    pub fn new(id: i64, code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            target_url,
            clicks: 0,
            last_clicked_at: None,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc123");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
        assert_eq!(link.updated_at, now);
        assert!(link.last_clicked_at.is_none());
    }
}
