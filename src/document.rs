//! Document source abstraction.
//!
//! The scrape loop never walks a live DOM. It asks a source for the current
//! document as HTML and parses that snapshot itself, so the source may change
//! freely between passes.

use std::future::Future;

use crate::error::ScrapeResult;

/// Something that can produce the current document as HTML
///
/// Implemented over a live browser page by [`crate::browser::PageFeed`].
pub trait DocumentSource: Send + Sync {
    fn snapshot(&self) -> impl Future<Output = ScrapeResult<String>> + Send;
}
