//! Post record extraction.
//!
//! Turns a document snapshot of the feed into normalized [`PostRecord`]s:
//! author, timestamp, engagement counts, permalink and outbound links.

// Sub-modules
pub mod extractors;
pub mod links;
pub mod schema;
mod selectors;

// Re-exports for public API
pub use extractors::{extract_from_html, extract_posts, harvest_snapshot};
pub use links::{LinkSet, resolve_link};
pub use schema::{Author, Engagement, PostRecord, Timestamp};
