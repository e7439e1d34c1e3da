//! Scroll driver: moves the viewport and reports whether it moved.

use tracing::{debug, warn};

use super::viewport::{Viewport, ViewportMetrics};
use crate::error::ScrapeResult;
use crate::utils::DEFAULT_BOTTOM_THRESHOLD_PX;

/// Advances a [`Viewport`] towards the end of the feed
#[derive(Debug)]
pub struct ScrollDriver<V> {
    viewport: V,
    bottom_threshold: f64,
}

impl<V: Viewport> ScrollDriver<V> {
    #[must_use]
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            bottom_threshold: DEFAULT_BOTTOM_THRESHOLD_PX,
        }
    }

    /// Distance from the content bottom that still counts as "at bottom"
    #[must_use]
    pub fn with_bottom_threshold(mut self, threshold: f64) -> Self {
        self.bottom_threshold = threshold;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    #[must_use]
    pub fn bottom_threshold(&self) -> f64 {
        self.bottom_threshold
    }

    /// Try to move the viewport further down the feed.
    ///
    /// Jumps to the content bottom first. Lazy or virtualized containers that
    /// have not grown yet can leave that jump without effect, so a relative
    /// scroll of twice the viewport height follows when the position did not
    /// change. Returns `false` only when neither moved the viewport, including
    /// when the viewport could not be read or scrolled at all.
    pub async fn advance(&self) -> bool {
        match self.try_advance().await {
            Ok(moved) => moved,
            Err(e) => {
                warn!("Scroll attempt failed, treating as stalled: {e}");
                false
            }
        }
    }

    /// Whether the viewport bottom is within the threshold of the content bottom.
    ///
    /// An unreadable viewport is reported as not at bottom; the other stop
    /// conditions still bound the run.
    pub async fn is_at_bottom(&self) -> bool {
        match self.viewport.metrics().await {
            Ok(metrics) => metrics.is_near_bottom(self.bottom_threshold),
            Err(e) => {
                debug!("Could not read viewport metrics for bottom check: {e}");
                false
            }
        }
    }

    async fn try_advance(&self) -> ScrapeResult<bool> {
        let before = self.viewport.metrics().await?;

        self.viewport.scroll_to(before.content_height).await?;
        let after_jump = self.viewport.metrics().await?;
        if moved(&before, &after_jump) {
            return Ok(true);
        }

        debug!(
            "Jump to content bottom left viewport at {}, scrolling by two viewport heights",
            before.scroll_y
        );
        self.viewport.scroll_by(before.viewport_height * 2.0).await?;
        let after = self.viewport.metrics().await?;

        Ok(moved(&before, &after))
    }
}

fn moved(before: &ViewportMetrics, after: &ViewportMetrics) -> bool {
    (after.scroll_y - before.scroll_y).abs() > f64::EPSILON
}
