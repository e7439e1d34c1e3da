//! UTF-8-safe string helpers
//!
//! Truncation that respects character boundaries, and the lenient count parser
//! used for engagement numbers rendered by the feed.

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// This function respects UTF-8 character boundaries and will never panic,
/// even with multi-byte characters like emoji.
///
/// # Examples
/// ```
/// # use kodegen_tools_feedscrape::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("🎉🎊🎈", 2), "🎉🎊");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Parse an engagement count as displayed by the feed.
///
/// Accepts plain integers (`"42"`), thousands separators (`"1,234"`) and
/// compact suffixes (`"1.2K"`, `"3M"`, `"1B"`). A trailing word after a plain
/// number is ignored, so `"12 replies"` is 12. Anything without a leading
/// number yields 0; a missing count is never an error.
///
/// # Examples
/// ```
/// # use kodegen_tools_feedscrape::utils::string_utils::parse_count;
/// assert_eq!(parse_count("1,234"), 1234);
/// assert_eq!(parse_count("1.2K"), 1200);
/// assert_eq!(parse_count(""), 0);
/// ```
#[must_use]
pub fn parse_count(text: &str) -> u64 {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();

    let numeric_len = cleaned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(cleaned.len());
    let (number, rest) = cleaned.split_at(numeric_len);
    if number.is_empty() {
        return 0;
    }

    let mut suffix = rest.chars();
    let multiplier = match suffix.next() {
        Some(c) if suffix.next().is_none_or(|next| !next.is_alphabetic()) => match c {
            'K' | 'k' => Some(1_000.0),
            'M' | 'm' => Some(1_000_000.0),
            'B' | 'b' => Some(1_000_000_000.0),
            _ => None,
        },
        _ => None,
    };

    match multiplier {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(multiplier) => number
            .parse::<f64>()
            .map(|value| (value * multiplier).round() as u64)
            .unwrap_or(0),
        None => number
            .split('.')
            .next()
            .and_then(|integer| integer.parse::<u64>().ok())
            .unwrap_or(0),
    }
}
