//! JavaScript snippets evaluated in the feed page

/// Current scroll position and sizes, as a JSON object matching `ViewportMetrics`
pub const VIEWPORT_METRICS_SCRIPT: &str = r"
    (() => ({
        scrollY: window.scrollY,
        viewportHeight: window.innerHeight,
        contentHeight: Math.max(
            document.body ? document.body.scrollHeight : 0,
            document.documentElement ? document.documentElement.scrollHeight : 0
        )
    }))()
";

/// Readiness probe used after navigation
pub const FEED_READY_SCRIPT: &str = r#"
    (() => document.readyState === 'complete'
        && document.querySelector('article, [data-testid="tweetText"]') !== null)()
"#;

#[must_use]
pub fn scroll_to_script(y: f64) -> String {
    format!("window.scrollTo(0, {y}); true")
}

#[must_use]
pub fn scroll_by_script(dy: f64) -> String {
    format!("window.scrollBy(0, {dy}); true")
}
