//! Viewport abstraction the scroll driver moves.

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::error::ScrapeResult;

/// Geometry of the scrollable document, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportMetrics {
    /// Vertical scroll offset of the viewport's top edge
    pub scroll_y: f64,
    /// Height of the visible viewport
    pub viewport_height: f64,
    /// Total height of the scrollable content
    pub content_height: f64,
}

impl ViewportMetrics {
    /// Whether the viewport's bottom edge is within `threshold` of the content bottom
    #[inline]
    #[must_use]
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.content_height - threshold
    }
}

/// Something that can report its scroll geometry and be scrolled
///
/// Implemented over a live browser page by [`crate::browser::PageFeed`].
pub trait Viewport: Send + Sync {
    /// Current scroll geometry
    fn metrics(&self) -> impl Future<Output = ScrapeResult<ViewportMetrics>> + Send;

    /// Jump to an absolute vertical offset
    fn scroll_to(&self, y: f64) -> impl Future<Output = ScrapeResult<()>> + Send;

    /// Scroll relative to the current offset
    fn scroll_by(&self, dy: f64) -> impl Future<Output = ScrapeResult<()>> + Send;
}
