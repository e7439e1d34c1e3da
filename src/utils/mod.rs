pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{parse_count, safe_truncate_chars};
pub use url_utils::{extract_urls_from_text, is_same_site_path, is_shortener_link, permalink_url};
