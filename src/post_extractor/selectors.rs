//! CSS selectors for the feed's fixed post markup
//!
//! Parsed once at first access and cached forever. Hardcoded selectors should
//! never fail to parse; if one does, it is a bug in this file.

use scraper::Selector;
use std::sync::LazyLock;

fn parse(selector: &str) -> Selector {
    match Selector::parse(selector) {
        Ok(parsed) => parsed,
        Err(e) => panic!("BUG: hardcoded CSS selector '{selector}' is invalid: {e}"),
    }
}

/// Body text of a post; one match per candidate post unit
pub(crate) static BODY_TEXT: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"[data-testid="tweetText"]"#));

pub(crate) static USER_NAME_SPAN: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"[data-testid="User-Name"] span"#));

/// Profile link in the post header
pub(crate) static PROFILE_LINK: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"div.css-175oi2r.r-1wbh5a2.r-dnmrzs a[role="link"]"#));

/// Fallback for the profile link when the header classes change
pub(crate) static USER_NAME_LINK: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"[data-testid="User-Name"] a[href^="/"]"#));

pub(crate) static VERIFIED_BADGE: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"svg[aria-label="Verified account"]"#));

/// Time element wrapped in the post's permalink anchor
pub(crate) static TIME_IN_ANCHOR: LazyLock<Selector> = LazyLock::new(|| parse("a time"));

pub(crate) static REPLY_BUTTON: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"button[data-testid="reply"]"#));

pub(crate) static RETWEET_BUTTON: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"button[data-testid="retweet"]"#));

pub(crate) static LIKE_BUTTON: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"button[data-testid="like"]"#));

/// Analytics link whose accessible label mentions views
pub(crate) static VIEWS_LINK: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"a[aria-label*="views"]"#));

pub(crate) static CARD_LINK: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"[data-testid="card.wrapper"] a"#));

pub(crate) static SPAN: LazyLock<Selector> = LazyLock::new(|| parse("span"));

pub(crate) static ANCHOR: LazyLock<Selector> = LazyLock::new(|| parse("a"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selectors_parse() {
        for selector in [
            &BODY_TEXT,
            &USER_NAME_SPAN,
            &PROFILE_LINK,
            &USER_NAME_LINK,
            &VERIFIED_BADGE,
            &TIME_IN_ANCHOR,
            &REPLY_BUTTON,
            &RETWEET_BUTTON,
            &LIKE_BUTTON,
            &VIEWS_LINK,
            &CARD_LINK,
            &SPAN,
            &ANCHOR,
        ] {
            LazyLock::force(selector);
        }
    }
}
