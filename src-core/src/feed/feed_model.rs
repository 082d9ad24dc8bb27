use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One already-parsed feed entry: the raw quote payload plus the
/// publication timestamp it applies to. These two fields are the entire
/// surface the import pipeline requires from a feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub description: String,
    pub published_at: DateTime<Utc>,
}
