//! Getter methods for `ScrapeConfig`

use std::time::Duration;

use super::types::ScrapeConfig;

impl ScrapeConfig {
    #[must_use]
    pub fn max_scroll_attempts(&self) -> u32 {
        self.max_scroll_attempts
    }

    #[must_use]
    pub fn scroll_delay_ms(&self) -> u64 {
        self.scroll_delay_ms
    }

    #[must_use]
    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    #[must_use]
    pub fn max_no_new_content(&self) -> u32 {
        self.max_no_new_content
    }

    #[must_use]
    pub fn bottom_threshold_px(&self) -> f64 {
        self.bottom_threshold_px
    }
}
