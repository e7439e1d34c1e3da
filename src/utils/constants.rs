//! Shared configuration constants for feedscrape
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default maximum number of scroll attempts per run: 50
///
/// Bounds every run. Together with the monotonic attempt counter this is what
/// guarantees the scrape loop terminates.
pub const DEFAULT_MAX_SCROLL_ATTEMPTS: u32 = 50;

/// Default delay between scrolls: 2000 ms
///
/// Gives the feed time to fetch and render the next batch of posts before the
/// following extraction pass reads the document.
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 2000;

/// Default number of consecutive passes without new records before stopping: 3
pub const DEFAULT_MAX_NO_NEW_CONTENT: u32 = 3;

/// Distance in pixels from the content bottom that counts as "at bottom"
pub const DEFAULT_BOTTOM_THRESHOLD_PX: f64 = 100.0;

/// Number of body-text characters that go into a record identity
///
/// Identities are intentionally coarse. Two long posts from the same handle at
/// the same instant that share this many leading characters collide.
pub const IDENTITY_TEXT_PREFIX_CHARS: usize = 50;

/// Prefix of link-shortener redirect URLs
pub const SHORTENER_PREFIX: &str = "https://t.co";

/// Host of the link-shortener redirect domain
pub const SHORTENER_HOST: &str = "t.co";

/// Origin prepended to relative post permalinks
pub const PERMALINK_ORIGIN: &str = "https://x.com";

/// Chrome user agent string for stealth mode
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
