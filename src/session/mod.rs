//! Scrape-scroll sessions.
//!
//! A session accumulates deduplicated [`PostRecord`](crate::post_extractor::PostRecord)s
//! across repeated extract-then-scroll passes over one feed, and exposes
//! control (start, stop, configure, reset) plus read access (records, stats,
//! export) to its caller.

pub mod controller;
pub mod export;
pub mod progress;
pub mod state;

pub use controller::{FeedScraper, RunOutcome, SessionHandle};
pub use export::records_to_json;
pub use progress::{LogProgress, NoOpProgress, ScrapeProgress};
pub use state::{RunStatus, SessionState, SessionStats, StopDecision, StopReason};
