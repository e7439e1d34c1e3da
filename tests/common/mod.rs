//! Test utilities for the feedscrape test suite
//!
//! Feed fixtures are plain HTML shaped like the live feed's post markup, fed
//! through in-memory document sources and a simulated viewport.

use kodegen_tools_feedscrape::{
    Clipboard, DocumentSource, ScrapeError, ScrapeResult, Viewport, ViewportMetrics,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Route library logs to the test writer, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs the subscriber.
/// Run with `RUST_LOG=debug cargo test -- --nocapture` to see the scrape loop.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builder for one rendered post unit
#[derive(Debug, Clone)]
pub struct PostFixture {
    pub handle: String,
    pub display_name: String,
    pub datetime: Option<String>,
    pub text: String,
    pub links: Vec<String>,
    pub likes: String,
}

#[allow(dead_code)]
impl PostFixture {
    pub fn new(handle: &str, datetime: &str, text: &str) -> Self {
        Self {
            handle: handle.to_string(),
            display_name: handle.to_uppercase(),
            datetime: Some(datetime.to_string()),
            text: text.to_string(),
            links: Vec::new(),
            likes: "0".to_string(),
        }
    }

    /// Promoted units carry no time element
    pub fn promoted(mut self) -> Self {
        self.datetime = None;
        self
    }

    /// Append a raw anchor to the body text
    pub fn link(mut self, anchor: &str) -> Self {
        self.links.push(anchor.to_string());
        self
    }

    /// Append an external link whose visible text is the URL itself
    pub fn external(self, url: &str) -> Self {
        self.link(&format!(r#"<a href="{url}">{url}</a>"#))
    }

    pub fn likes(mut self, likes: &str) -> Self {
        self.likes = likes.to_string();
        self
    }

    pub fn render(&self) -> String {
        let time = self
            .datetime
            .as_deref()
            .map(|dt| {
                format!(
                    r#"<a href="/{}/status/1"><time datetime="{dt}">1h</time></a>"#,
                    self.handle
                )
            })
            .unwrap_or_default();

        format!(
            r#"<article>
  <div data-testid="User-Name"><a href="/{handle}" role="link"><span>{name}</span></a></div>
  {time}
  <div data-testid="tweetText">{text} {links}</div>
  <button data-testid="reply"><span>1</span></button>
  <button data-testid="retweet"><span>2</span></button>
  <button data-testid="like"><span>{likes}</span></button>
</article>"#,
            handle = self.handle,
            name = self.display_name,
            text = self.text,
            links = self.links.join(" "),
            likes = self.likes,
        )
    }
}

/// Wrap rendered units in a feed page
pub fn feed_page(posts: &[PostFixture]) -> String {
    let units: Vec<String> = posts.iter().map(PostFixture::render).collect();
    format!(
        "<!DOCTYPE html><html><head><title>Home</title></head><body><main>{}</main></body></html>",
        units.join("\n")
    )
}

/// Three units: two linked and timestamped, one promoted
#[allow(dead_code)]
pub fn three_unit_feed() -> String {
    feed_page(&[
        PostFixture::new("alice", "2025-01-01T10:00:00.000Z", "Read this")
            .external("https://example.com/a"),
        PostFixture::new("bob", "2025-01-01T11:00:00.000Z", "And this")
            .external("https://example.org/b"),
        PostFixture::new("brand", "2025-01-01T12:00:00.000Z", "Buy now")
            .external("https://shop.example.net")
            .promoted(),
    ])
}

/// Source whose document never changes
#[allow(dead_code)]
pub struct StaticSource {
    html: Mutex<String>,
}

#[allow(dead_code)]
impl StaticSource {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: Mutex::new(html.into()),
        }
    }

    pub fn replace(&self, html: impl Into<String>) {
        *self.html.lock() = html.into();
    }
}

impl DocumentSource for StaticSource {
    async fn snapshot(&self) -> ScrapeResult<String> {
        Ok(self.html.lock().clone())
    }
}

/// Endless feed: each snapshot shows one more post than the last
#[allow(dead_code)]
#[derive(Default)]
pub struct GrowingSource {
    served: AtomicU32,
}

impl DocumentSource for GrowingSource {
    async fn snapshot(&self) -> ScrapeResult<String> {
        let n = self.served.fetch_add(1, Ordering::SeqCst) + 1;
        let posts: Vec<PostFixture> = (0..n)
            .map(|i| {
                PostFixture::new("feed", &format!("2025-02-01T00:00:{i:02}.000Z"), &format!("post {i}"))
                    .external(&format!("https://example.com/{i}"))
            })
            .collect();
        Ok(feed_page(&posts))
    }
}

/// Source that cannot be read
#[allow(dead_code)]
pub struct FailingSource;

impl DocumentSource for FailingSource {
    async fn snapshot(&self) -> ScrapeResult<String> {
        Err(ScrapeError::Document("tab crashed".to_string()))
    }
}

/// How a simulated page reacts to scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Content grows after every scroll, like an infinite feed
    Endless,
    /// Content is fixed; scrolling stops at the end
    Fixed,
    /// Nothing moves the viewport
    Stuck,
}

/// In-memory viewport with clamped scrolling
#[allow(dead_code)]
pub struct SimulatedViewport {
    metrics: Mutex<ViewportMetrics>,
    behavior: ScrollBehavior,
    scroll_calls: AtomicU32,
}

#[allow(dead_code)]
impl SimulatedViewport {
    pub fn new(content_height: f64, behavior: ScrollBehavior) -> Self {
        Self {
            metrics: Mutex::new(ViewportMetrics {
                scroll_y: 0.0,
                viewport_height: 1000.0,
                content_height,
            }),
            behavior,
            scroll_calls: AtomicU32::new(0),
        }
    }

    pub fn endless() -> Self {
        Self::new(5000.0, ScrollBehavior::Endless)
    }

    /// Content fits in the viewport, so the page is already at its bottom
    pub fn short_page() -> Self {
        Self::new(900.0, ScrollBehavior::Fixed)
    }

    pub fn stuck() -> Self {
        Self::new(5000.0, ScrollBehavior::Stuck)
    }

    pub fn scroll_calls(&self) -> u32 {
        self.scroll_calls.load(Ordering::SeqCst)
    }

    fn move_to(&self, y: f64) {
        self.scroll_calls.fetch_add(1, Ordering::SeqCst);
        if self.behavior == ScrollBehavior::Stuck {
            return;
        }
        let mut m = self.metrics.lock();
        let max_y = (m.content_height - m.viewport_height).max(0.0);
        m.scroll_y = y.clamp(0.0, max_y);
        if self.behavior == ScrollBehavior::Endless {
            m.content_height += 2000.0;
        }
    }
}

impl Viewport for SimulatedViewport {
    async fn metrics(&self) -> ScrapeResult<ViewportMetrics> {
        Ok(*self.metrics.lock())
    }

    async fn scroll_to(&self, y: f64) -> ScrapeResult<()> {
        self.move_to(y);
        Ok(())
    }

    async fn scroll_by(&self, dy: f64) -> ScrapeResult<()> {
        let current = self.metrics.lock().scroll_y;
        self.move_to(current + dy);
        Ok(())
    }
}

/// Clipboard that keeps everything written to it
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> ScrapeResult<()> {
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails
#[allow(dead_code)]
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&self, _text: &str) -> ScrapeResult<()> {
        Err(ScrapeError::ClipboardUnavailable("no display".to_string()))
    }
}
