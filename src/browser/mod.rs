//! Chromium integration: launching the browser and driving a feed tab.

pub mod js_scripts;
pub mod launch;
pub mod page_feed;

pub use launch::{BrowserWrapper, download_managed_browser, find_browser_executable, launch_browser};
pub use page_feed::PageFeed;
