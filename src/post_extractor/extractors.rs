//! Post record extraction from a document snapshot
//!
//! Pure reads over a parsed `scraper::Html`. Every optional field degrades to
//! a default when its element is missing; the only thing that drops a unit is
//! the absence of a time element, which marks promoted content.

use scraper::{ElementRef, Html, Selector};

use super::links::{LinkSet, resolve_link};
use super::schema::{Author, Engagement, PostRecord, Timestamp};
use super::selectors::{
    ANCHOR, BODY_TEXT, CARD_LINK, LIKE_BUTTON, PROFILE_LINK, REPLY_BUTTON, RETWEET_BUTTON, SPAN,
    TIME_IN_ANCHOR, USER_NAME_LINK, USER_NAME_SPAN, VERIFIED_BADGE, VIEWS_LINK,
};
use crate::utils::{parse_count, permalink_url};

/// Extract every organic post from a parsed document, in document order.
///
/// Records without outbound links are included; callers that only want
/// linked posts filter on [`PostRecord::has_outbound_links`].
#[must_use]
pub fn extract_posts(document: &Html) -> Vec<PostRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for body in document.select(&BODY_TEXT) {
        match extract_post(body) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    log::debug!(
        target: "feedscrape::extract",
        "Extracted {} post(s), skipped {} without a timestamp",
        records.len(),
        skipped
    );

    records
}

/// Parse an HTML snapshot and extract its posts.
#[must_use]
pub fn extract_from_html(html: &str) -> Vec<PostRecord> {
    let document = Html::parse_document(html);
    extract_posts(&document)
}

/// One-shot harvest: extract and keep only posts that link somewhere.
///
/// No dedup state is involved; the same post rendered twice in one snapshot
/// is returned twice.
#[must_use]
pub fn harvest_snapshot(html: &str) -> Vec<PostRecord> {
    let records: Vec<PostRecord> = extract_from_html(html)
        .into_iter()
        .filter(PostRecord::has_outbound_links)
        .collect();

    log::info!(
        target: "feedscrape::extract",
        "Harvested {} post(s) with outbound links",
        records.len()
    );

    records
}

/// Build a record from one body-text element.
fn extract_post(body: ElementRef<'_>) -> Option<PostRecord> {
    let container = post_container(body);
    let body_text = element_text(body);

    let (timestamp, permalink) = read_timestamp(container)?;

    let author = Author {
        display_name: first_text(container, &USER_NAME_SPAN),
        handle: read_handle(container),
        verified: container.select(&VERIFIED_BADGE).next().is_some(),
    };

    let engagement = Engagement {
        replies: read_count(container, &REPLY_BUTTON),
        retweets: read_count(container, &RETWEET_BUTTON),
        likes: read_count(container, &LIKE_BUTTON),
        views: read_count(container, &VIEWS_LINK),
    };

    let mut links = LinkSet::new();
    for anchor in body.select(&ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if let Some(link) = resolve_link(href, anchor.value().attr("data-expanded-url"), &body_text)
        {
            links.insert(link);
        }
    }

    if let Some(card) = container.select(&CARD_LINK).next()
        && let Some(href) = card.value().attr("href")
        && let Some(link) = resolve_link(href, card.value().attr("data-expanded-url"), &body_text)
    {
        links.insert(link);
    }

    Some(PostRecord {
        author,
        timestamp,
        body_text,
        engagement,
        permalink,
        outbound_links: links.into_vec(),
    })
}

/// Posts are usually wrapped in an `<article>`; otherwise the body's parent
/// element stands in for the post.
fn post_container(body: ElementRef<'_>) -> ElementRef<'_> {
    body.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "article")
        .or_else(|| body.parent().and_then(ElementRef::wrap))
        .unwrap_or(body)
}

/// Timestamp and permalink from the first anchored time element.
fn read_timestamp(container: ElementRef<'_>) -> Option<(Timestamp, Option<String>)> {
    let time = container.select(&TIME_IN_ANCHOR).next()?;

    let timestamp = Timestamp {
        iso_datetime: time.value().attr("datetime").map(str::to_string),
        display_text: non_empty(element_text(time)),
    };

    let permalink = time
        .parent()
        .and_then(ElementRef::wrap)
        .and_then(|anchor| anchor.value().attr("href"))
        .map(permalink_url);

    Some((timestamp, permalink))
}

fn read_handle(container: ElementRef<'_>) -> Option<String> {
    container
        .select(&PROFILE_LINK)
        .next()
        .or_else(|| container.select(&USER_NAME_LINK).next())
        .and_then(|link| link.value().attr("href"))
        .map(|href| href.strip_prefix('/').unwrap_or(href).to_string())
        .and_then(non_empty)
}

/// Count shown in the first `span` of the matched control; 0 when absent.
fn read_count(container: ElementRef<'_>, control: &Selector) -> u64 {
    container
        .select(control)
        .next()
        .and_then(|el| el.select(&SPAN).next())
        .map_or(0, |span| parse_count(&element_text(span)))
}

fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(element_text)
        .and_then(non_empty)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(inner: &str) -> String {
        format!("<html><body><article>{inner}</article></body></html>")
    }

    #[test]
    fn unit_without_time_is_skipped() {
        let html = article(
            r#"<div data-testid="tweetText">Promoted <a href="https://ad.example">x</a></div>"#,
        );
        assert!(extract_from_html(&html).is_empty());
    }

    #[test]
    fn reads_header_fields() {
        let html = article(
            r#"<div data-testid="User-Name"><a href="/alice" role="link"><span>Alice</span></a>
               <svg aria-label="Verified account"></svg></div>
               <a href="/alice/status/7"><time datetime="2025-01-02T03:04:05.000Z">Jan 2</time></a>
               <div data-testid="tweetText">hello</div>"#,
        );
        let records = extract_from_html(&html);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.author.display_name.as_deref(), Some("Alice"));
        assert_eq!(record.author.handle.as_deref(), Some("alice"));
        assert!(record.author.verified);
        assert_eq!(
            record.timestamp.iso_datetime.as_deref(),
            Some("2025-01-02T03:04:05.000Z")
        );
        assert_eq!(record.timestamp.display_text.as_deref(), Some("Jan 2"));
        assert_eq!(
            record.permalink.as_deref(),
            Some("https://x.com/alice/status/7")
        );
        assert!(record.timestamp.instant().is_some());
    }

    #[test]
    fn missing_counts_default_to_zero() {
        let html = article(
            r#"<a href="/a/status/1"><time datetime="2025-01-01T00:00:00Z">1h</time></a>
               <div data-testid="tweetText">text</div>
               <button data-testid="reply"></button>
               <button data-testid="like"><span>not a number</span></button>"#,
        );
        let records = extract_from_html(&html);
        assert_eq!(records[0].engagement, Engagement::default());
    }

    #[test]
    fn reads_counts_and_views() {
        let html = article(
            r#"<a href="/a/status/1"><time datetime="2025-01-01T00:00:00Z">1h</time></a>
               <div data-testid="tweetText">text</div>
               <button data-testid="reply"><div><span>4</span></div></button>
               <button data-testid="retweet"><span>1,024</span></button>
               <button data-testid="like"><span>1.5K</span></button>
               <a aria-label="9812 views. View post analytics" href="/a/status/1/analytics"><span>9812</span></a>"#,
        );
        let engagement = extract_from_html(&html)[0].engagement;
        assert_eq!(engagement.replies, 4);
        assert_eq!(engagement.retweets, 1024);
        assert_eq!(engagement.likes, 1500);
        assert_eq!(engagement.views, 9812);
    }

    #[test]
    fn card_link_is_appended_once() {
        let html = article(
            r#"<a href="/a/status/1"><time datetime="2025-01-01T00:00:00Z">1h</time></a>
               <div data-testid="tweetText">read
                 <a href="https://t.co/abc" data-expanded-url="https://example.com/x">example.com/x</a>
                 <a href="/hashtag/rust">#rust</a></div>
               <div data-testid="card.wrapper">
                 <a href="https://t.co/abc" data-expanded-url="https://example.com/x">card</a>
               </div>"#,
        );
        let records = extract_from_html(&html);
        assert_eq!(records[0].outbound_links, vec!["https://example.com/x"]);
    }

    #[test]
    fn unannotated_card_falls_back_to_body_url() {
        let html = article(
            r#"<a href="/a/status/1"><time datetime="2025-01-01T00:00:00Z">1h</time></a>
               <div data-testid="tweetText">worth a read https://example.org/story</div>
               <div data-testid="card.wrapper"><a href="https://t.co/card">preview</a></div>"#,
        );
        let records = extract_from_html(&html);
        assert_eq!(records[0].outbound_links, vec!["https://example.org/story"]);
    }

    #[test]
    fn unannotated_card_without_body_url_keeps_short_form() {
        let html = article(
            r#"<a href="/a/status/1"><time datetime="2025-01-01T00:00:00Z">1h</time></a>
               <div data-testid="tweetText">no links in here</div>
               <div data-testid="card.wrapper"><a href="https://t.co/card">preview</a></div>"#,
        );
        let records = extract_from_html(&html);
        assert_eq!(records[0].outbound_links, vec!["https://t.co/card"]);
    }

    #[test]
    fn relative_card_href_is_dropped() {
        let html = article(
            r#"<a href="/a/status/1"><time datetime="2025-01-01T00:00:00Z">1h</time></a>
               <div data-testid="tweetText">quoting a post</div>
               <div data-testid="card.wrapper"><a href="/b/status/9">quoted</a></div>"#,
        );
        let records = extract_from_html(&html);
        assert_eq!(records.len(), 1);
        assert!(records[0].outbound_links.is_empty());
        assert!(harvest_snapshot(&html).is_empty());
    }

    #[test]
    fn container_falls_back_to_parent() {
        let html = r#"<html><body><div id="post">
            <a href="/b/status/2"><time datetime="2025-01-01T00:00:00Z">2h</time></a>
            <div data-testid="tweetText">no article <a href="https://example.com">e</a></div>
        </div></body></html>"#;
        let records = extract_from_html(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].outbound_links, vec!["https://example.com"]);
    }

    #[test]
    fn harvest_drops_posts_without_outbound_links() {
        let html = article(
            r#"<a href="/a/status/1"><time datetime="2025-01-01T00:00:00Z">1h</time></a>
               <div data-testid="tweetText">only <a href="/hashtag/rust">#rust</a></div>"#,
        );
        assert_eq!(extract_from_html(&html).len(), 1);
        assert!(harvest_snapshot(&html).is_empty());
    }
}
