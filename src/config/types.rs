//! Core configuration types for feed scraping
//!
//! This module contains the `ScrapeConfig` struct that bounds and paces a
//! scrape-scroll run.

use serde::{Deserialize, Serialize};

use crate::utils::{
    DEFAULT_BOTTOM_THRESHOLD_PX, DEFAULT_MAX_NO_NEW_CONTENT, DEFAULT_MAX_SCROLL_ATTEMPTS,
    DEFAULT_SCROLL_DELAY_MS,
};

/// Main configuration struct for a scrape session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeConfig {
    /// Upper bound on scroll attempts in a session.
    ///
    /// Forced to 0 by `stop()`, which makes the next stop check fire.
    ///
    /// Default: 50
    pub(crate) max_scroll_attempts: u32,

    /// Pause after each successful scroll so the feed can load more posts.
    ///
    /// Default: 2000 ms
    pub(crate) scroll_delay_ms: u64,

    /// Consecutive passes without a new record before giving up.
    ///
    /// Default: 3
    pub(crate) max_no_new_content: u32,

    /// Distance from the content bottom, in pixels, that counts as "at bottom".
    ///
    /// Default: 100
    pub(crate) bottom_threshold_px: f64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            max_scroll_attempts: DEFAULT_MAX_SCROLL_ATTEMPTS,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            max_no_new_content: DEFAULT_MAX_NO_NEW_CONTENT,
            bottom_threshold_px: DEFAULT_BOTTOM_THRESHOLD_PX,
        }
    }
}
