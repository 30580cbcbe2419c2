//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// Both fields are optional at the serde level so that a missing
/// `targetUrl` is reported as an invalid URL rather than a body rejection.
/// `code: null` and an absent `code` both mean "generate one".
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// The URL to redirect to (must be absolute `http`/`https`).
    ///
    /// Checked by the handler before the rest of the request.
    #[serde(default, alias = "target_url")]
    pub target_url: Option<String>,

    /// Optional requested short code; format is checked by the code issuer.
    #[serde(default, alias = "custom_code")]
    #[validate(length(max = 64, message = "Code is too long"))]
    pub code: Option<String>,
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target_url: link.target_url,
            short_url,
            clicks: link.clicks,
            last_clicked_at: link.last_clicked_at,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}
