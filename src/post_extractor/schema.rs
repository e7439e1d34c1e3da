use serde::{Deserialize, Serialize};

/// Who wrote a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub display_name: Option<String>,
    /// Profile handle without the leading `/`
    pub handle: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

/// When a post was made, as rendered by the feed
///
/// Presence of this struct on a record is what distinguishes organic posts
/// from promoted units; its fields may still be individually absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamp {
    /// Machine-readable instant from the time element's `datetime` attribute
    pub iso_datetime: Option<String>,
    /// Human-readable text such as `"2h"` or `"Mar 3"`
    pub display_text: Option<String>,
}

impl Timestamp {
    /// Parse `iso_datetime` into a UTC instant, if it is present and valid RFC 3339
    #[must_use]
    pub fn instant(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.iso_datetime
            .as_deref()
            .and_then(|raw| chrono::DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub replies: u64,
    pub retweets: u64,
    pub likes: u64,
    pub views: u64,
}

/// One organic post extracted from the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub author: Author,
    pub timestamp: Timestamp,
    pub body_text: String,
    pub engagement: Engagement,
    /// Absolute URL of the post itself
    pub permalink: Option<String>,
    /// External destinations, deduplicated, in first-seen order
    pub outbound_links: Vec<String>,
}

impl PostRecord {
    /// Whether the post links anywhere outside the feed
    #[inline]
    #[must_use]
    pub fn has_outbound_links(&self) -> bool {
        !self.outbound_links.is_empty()
    }
}
