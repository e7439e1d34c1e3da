//! Fluent builder for `ScrapeConfig`
//!
//! Every field has a default, so the builder has no required states. Zero
//! values are ignored the same way `ConfigPatch` ignores them: the previous
//! (default) value is kept.

use super::types::ScrapeConfig;

#[derive(Debug, Clone, Default)]
pub struct ScrapeConfigBuilder {
    config: ScrapeConfig,
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder {
    #[must_use]
    pub fn max_scroll_attempts(mut self, attempts: u32) -> Self {
        if attempts > 0 {
            self.config.max_scroll_attempts = attempts;
        }
        self
    }

    #[must_use]
    pub fn scroll_delay_ms(mut self, delay_ms: u64) -> Self {
        if delay_ms > 0 {
            self.config.scroll_delay_ms = delay_ms;
        }
        self
    }

    #[must_use]
    pub fn max_no_new_content(mut self, passes: u32) -> Self {
        if passes > 0 {
            self.config.max_no_new_content = passes;
        }
        self
    }

    /// Set the "at bottom" proximity in pixels. Negative or non-finite values are ignored.
    #[must_use]
    pub fn bottom_threshold_px(mut self, threshold: f64) -> Self {
        if threshold.is_finite() && threshold >= 0.0 {
            self.config.bottom_threshold_px = threshold;
        }
        self
    }

    #[must_use]
    pub fn build(self) -> ScrapeConfig {
        self.config
    }
}
