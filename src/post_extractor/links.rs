//! Outbound link resolution
//!
//! Shortened links hide their destination. The feed usually annotates the
//! anchor with the expanded form; when it does not, the body text is scanned
//! for the first URL that is not itself shortened. That scan is a best-effort
//! approximation, not a resolver: it never follows redirects.

use crate::utils::{extract_urls_from_text, is_same_site_path, is_shortener_link};

/// Resolve one anchor into an outbound link.
///
/// Returns `None` for same-site relative paths and for anything that is blank
/// after trimming.
///
/// # Arguments
/// * `href` - the anchor's `href`
/// * `expanded` - the anchor's expansion annotation (`data-expanded-url`)
/// * `body_text` - the post text, scanned when a shortened link has no annotation
#[must_use]
pub fn resolve_link(href: &str, expanded: Option<&str>, body_text: &str) -> Option<String> {
    if is_same_site_path(href) {
        return None;
    }

    let resolved = if is_shortener_link(href) {
        match expanded.map(str::trim).filter(|e| !e.is_empty()) {
            Some(expanded) => expanded,
            None => extract_urls_from_text(body_text)
                .into_iter()
                .find(|candidate| !is_shortener_link(candidate))
                .unwrap_or(href),
        }
    } else {
        href
    };

    let resolved = resolved.trim();
    (!resolved.is_empty()).then(|| resolved.to_string())
}

/// Insertion-ordered set of links
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    links: Vec<String>,
}

impl LinkSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, link: String) -> bool {
        if self.links.contains(&link) {
            return false;
        }
        self.links.push(link);
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotated_shortener_link_uses_expansion() {
        assert_eq!(
            resolve_link("https://t.co/abc", Some("https://example.com/x"), ""),
            Some("https://example.com/x".to_string())
        );
    }

    #[test]
    fn blank_annotation_falls_back_to_body_scan() {
        let body = "see https://t.co/abc and https://example.org/post";
        assert_eq!(
            resolve_link("https://t.co/abc", Some("   "), body),
            Some("https://example.org/post".to_string())
        );
    }

    #[test]
    fn unresolvable_shortener_link_is_kept() {
        assert_eq!(
            resolve_link("https://t.co/abc", None, "only https://t.co/abc here"),
            Some("https://t.co/abc".to_string())
        );
    }

    #[test]
    fn relative_and_blank_links_are_dropped() {
        assert_eq!(resolve_link("/hashtag/rust", None, ""), None);
        assert_eq!(resolve_link("   ", None, ""), None);
    }

    #[test]
    fn plain_links_pass_through() {
        assert_eq!(
            resolve_link(" https://example.com/a ", None, ""),
            Some("https://example.com/a".to_string())
        );
    }

    #[test]
    fn link_set_keeps_first_occurrence_order() {
        let mut set = LinkSet::new();
        assert!(set.insert("b".into()));
        assert!(set.insert("a".into()));
        assert!(!set.insert("b".into()));
        assert_eq!(set.into_vec(), vec!["b".to_string(), "a".to_string()]);
    }
}
