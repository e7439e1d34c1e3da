//! Live feed page backed by chromiumoxide

use chromiumoxide::page::Page;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::js_scripts::{
    FEED_READY_SCRIPT, VIEWPORT_METRICS_SCRIPT, scroll_by_script, scroll_to_script,
};
use crate::document::DocumentSource;
use crate::error::{ScrapeError, ScrapeResult};
use crate::scroll::{Viewport, ViewportMetrics};

/// A browser tab showing the feed; both the document source and the viewport
/// of a session.
///
/// `Page` is a cheap handle, so cloning a `PageFeed` shares the same tab.
#[derive(Clone)]
pub struct PageFeed {
    page: Page,
}

impl PageFeed {
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Navigate to `url` and wait until at least one post unit has rendered.
    ///
    /// Feeds render client-side after the HTTP response, so the wait polls
    /// the DOM. Timing out is not an error: the session simply starts with
    /// whatever is there.
    pub async fn navigate(&self, url: &str, max_wait: Duration) -> ScrapeResult<()> {
        info!("Navigating to feed: {url}");
        self.page
            .goto(url)
            .await
            .map_err(|e| ScrapeError::Browser(format!("Failed to navigate to {url}: {e}")))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| ScrapeError::Browser(format!("Navigation to {url} did not finish: {e}")))?;

        let start = Instant::now();
        let poll_interval = Duration::from_millis(200);
        loop {
            let ready = match self.page.evaluate(FEED_READY_SCRIPT).await {
                Ok(result) => result.into_value::<bool>().unwrap_or(false),
                Err(e) => {
                    debug!("Failed to probe feed readiness: {e}, retrying");
                    false
                }
            };
            if ready {
                info!("Feed rendered after {:.2}s", start.elapsed().as_secs_f64());
                return Ok(());
            }
            if start.elapsed() >= max_wait {
                warn!("No post units rendered after {max_wait:?}, starting anyway");
                return Ok(());
            }
            tokio::time::sleep(poll_interval).await;
        }
    }

    async fn run_script(&self, script: String) -> ScrapeResult<()> {
        self.page
            .evaluate(script)
            .await
            .map(drop)
            .map_err(|e| ScrapeError::Viewport(e.to_string()))
    }
}

impl DocumentSource for PageFeed {
    async fn snapshot(&self) -> ScrapeResult<String> {
        self.page
            .content()
            .await
            .map_err(|e| ScrapeError::Document(e.to_string()))
    }
}

impl Viewport for PageFeed {
    async fn metrics(&self) -> ScrapeResult<ViewportMetrics> {
        let result = self
            .page
            .evaluate(VIEWPORT_METRICS_SCRIPT)
            .await
            .map_err(|e| ScrapeError::Viewport(e.to_string()))?;
        result
            .into_value::<ViewportMetrics>()
            .map_err(|e| ScrapeError::Viewport(format!("Unexpected viewport metrics: {e}")))
    }

    async fn scroll_to(&self, y: f64) -> ScrapeResult<()> {
        self.run_script(scroll_to_script(y)).await
    }

    async fn scroll_by(&self, dy: f64) -> ScrapeResult<()> {
        self.run_script(scroll_by_script(dy)).await
    }
}
