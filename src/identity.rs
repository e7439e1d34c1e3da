//! Record identity used for dedup across extraction passes.
//!
//! An identity is the author's handle, the post's machine-readable instant and
//! the first [`IDENTITY_TEXT_PREFIX_CHARS`] characters of the body text, taken
//! verbatim (no whitespace or case normalization). Engagement counts are not
//! part of it, so a post whose counters change between passes keeps its
//! identity.
//!
//! The truncation is coarse on purpose and is not collision-free: two posts by
//! the same handle at the same instant sharing a 50-character prefix are
//! treated as one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::post_extractor::PostRecord;
use crate::utils::{IDENTITY_TEXT_PREFIX_CHARS, safe_truncate_chars};

/// Dedup key for a [`PostRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordIdentity {
    handle: Option<String>,
    iso_datetime: Option<String>,
    text_prefix: String,
}

impl RecordIdentity {
    /// Derive the identity of a record. Pure and deterministic.
    #[must_use]
    pub fn of(record: &PostRecord) -> Self {
        Self {
            handle: record.author.handle.clone(),
            iso_datetime: record.timestamp.iso_datetime.clone(),
            text_prefix: safe_truncate_chars(&record.body_text, IDENTITY_TEXT_PREFIX_CHARS)
                .to_string(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    #[must_use]
    pub fn iso_datetime(&self) -> Option<&str> {
        self.iso_datetime.as_deref()
    }

    #[must_use]
    pub fn text_prefix(&self) -> &str {
        &self.text_prefix
    }
}

/// Free-function form of [`RecordIdentity::of`]
#[inline]
#[must_use]
pub fn identity_of(record: &PostRecord) -> RecordIdentity {
    RecordIdentity::of(record)
}

impl fmt::Display for RecordIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.handle.as_deref().unwrap_or("null"),
            self.iso_datetime.as_deref().unwrap_or("null"),
            self.text_prefix
        )
    }
}
