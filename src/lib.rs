pub mod browser;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod error;
pub mod identity;
pub mod post_extractor;
pub mod scroll;
pub mod session;
pub mod utils;

pub use browser::{BrowserWrapper, PageFeed, launch_browser};
pub use clipboard::{Clipboard, NoClipboard, SystemClipboard};
pub use config::{ConfigPatch, ScrapeConfig, ScrapeConfigBuilder};
pub use document::DocumentSource;
pub use error::{ScrapeError, ScrapeResult};
pub use identity::{RecordIdentity, identity_of};
pub use post_extractor::schema::*;
pub use post_extractor::{extract_from_html, extract_posts, harvest_snapshot};
pub use scroll::{ScrollDriver, Viewport, ViewportMetrics};
pub use session::{
    FeedScraper, LogProgress, NoOpProgress, RunOutcome, RunStatus, ScrapeProgress, SessionHandle,
    SessionStats, StopReason, records_to_json,
};
