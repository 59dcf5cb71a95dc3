//! Link entity representing one short-id-to-destination mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::click::ClickEvent;

/// A short link with its click metadata.
///
/// `short_id`, `destination_url` and `owner_id` are immutable after creation;
/// changing a destination means creating a new link. The counters are
/// monotonically non-decreasing and `click_count` always equals
/// `history.len()` after a successful recorder operation.
///
/// Serialized field names follow the persisted version-0 layout
/// (`originalUrl`, `ownerId`, `clicks`, `qrCount`, ...), so data files
/// written before the `shortId` field existed still load; the store fills
/// the id in from the collection key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "shortId", default)]
    pub short_id: String,
    #[serde(rename = "originalUrl")]
    pub destination_url: String,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "clicks")]
    pub click_count: u64,
    #[serde(rename = "qrCount")]
    pub qr_export_count: u64,
    pub history: Vec<ClickEvent>,
}

impl Link {
    /// Creates a fresh link with zeroed counters and empty history.
    pub fn new(
        short_id: String,
        destination_url: String,
        owner_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            short_id,
            destination_url,
            owner_id,
            created_at,
            click_count: 0,
            qr_export_count: 0,
            history: Vec::new(),
        }
    }

    /// Returns true when `owner_id` matches the given owner key.
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }
}
