//! Progress reporting abstraction for scrape-scroll runs
//!
//! Defines the `ScrapeProgress` trait for per-iteration reporting and
//! provides a no-op implementation plus one that logs through `tracing`.

use tracing::info;

use super::state::StopReason;

/// Trait for reporting run progress at key points of each iteration
///
/// Implementations can send updates to channels, log to console, update UI, etc.
pub trait ScrapeProgress: Send + Sync {
    /// Report that a scrape pass finished
    fn report_pass(&self, iteration: u32, new_records: usize, total_records: usize);

    /// Report that a scroll attempt is about to be made
    fn report_scroll(&self, attempt: u32, max_attempts: u32);

    /// Report that the run reached a terminal state
    fn report_stopped(&self, reason: StopReason, total_records: usize);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

impl ScrapeProgress for NoOpProgress {
    #[inline(always)]
    fn report_pass(&self, _iteration: u32, _new_records: usize, _total_records: usize) {}

    #[inline(always)]
    fn report_scroll(&self, _attempt: u32, _max_attempts: u32) {}

    #[inline(always)]
    fn report_stopped(&self, _reason: StopReason, _total_records: usize) {}
}

/// Progress reporter that logs each event at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ScrapeProgress for LogProgress {
    fn report_pass(&self, iteration: u32, new_records: usize, total_records: usize) {
        info!(
            target: "feedscrape::progress",
            "Pass {iteration}: found {new_records} new post(s) with links (total: {total_records})"
        );
    }

    fn report_scroll(&self, attempt: u32, max_attempts: u32) {
        info!(target: "feedscrape::progress", "Scrolling... ({attempt}/{max_attempts})");
    }

    fn report_stopped(&self, reason: StopReason, total_records: usize) {
        info!(
            target: "feedscrape::progress",
            "Stopped: {reason} ({total_records} post(s) collected)"
        );
    }
}
