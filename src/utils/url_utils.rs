//! URL helpers for feed link handling.
//!
//! Everything here is plain string/URL matching. The body-text scan in
//! particular is a heuristic: it takes whatever follows `http(s)://` up to
//! the next whitespace, trailing punctuation included.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use super::constants::{PERMALINK_ORIGIN, SHORTENER_HOST, SHORTENER_PREFIX};

static URL_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[^\s]+").expect("BUG: hardcoded URL regex is invalid")
});

/// Extract every `http(s)://` run from free text, in order of appearance.
#[must_use]
pub fn extract_urls_from_text(text: &str) -> Vec<&str> {
    URL_IN_TEXT.find_iter(text).map(|m| m.as_str()).collect()
}

/// Check whether a URL points at the link-shortener redirect domain
///
/// Parsed URLs are judged by host so that unrelated domains merely containing
/// the shortener's name (`reddit.com`) are not mistaken for it. Unparsable
/// input falls back to a prefix check.
#[must_use]
pub fn is_shortener_link(url: &str) -> bool {
    match Url::parse(url.trim()) {
        Ok(parsed) => parsed
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(SHORTENER_HOST)),
        Err(_) => url.trim_start().starts_with(SHORTENER_PREFIX),
    }
}

/// Same-site links are written as root-relative paths (`/user/status/1`)
#[inline]
#[must_use]
pub fn is_same_site_path(href: &str) -> bool {
    href.starts_with('/')
}

/// Turn a post's permalink `href` into an absolute URL on the feed's origin
#[must_use]
pub fn permalink_url(href: &str) -> String {
    if is_same_site_path(href) {
        format!("{PERMALINK_ORIGIN}{href}")
    } else if Url::parse(href).is_ok() {
        href.to_string()
    } else {
        format!("{PERMALINK_ORIGIN}/{href}")
    }
}
