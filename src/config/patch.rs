//! Partial configuration updates
//!
//! A `ConfigPatch` carries only the knobs a caller wants to change. Absent and
//! zero values are no-ops: the previous value is retained, never reset.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::types::ScrapeConfig;
use crate::error::{ScrapeError, ScrapeResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(default)]
    pub max_scroll_attempts: Option<u32>,
    #[serde(default, alias = "scrollDelay")]
    pub scroll_delay_ms: Option<u64>,
    #[serde(default)]
    pub max_no_new_content: Option<u32>,
}

impl ConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_scroll_attempts(mut self, attempts: u32) -> Self {
        self.max_scroll_attempts = Some(attempts);
        self
    }

    #[must_use]
    pub fn scroll_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_delay_ms = Some(delay_ms);
        self
    }

    #[must_use]
    pub fn max_no_new_content(mut self, passes: u32) -> Self {
        self.max_no_new_content = Some(passes);
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn merged_with(self, other: ConfigPatch) -> Self {
        Self {
            max_scroll_attempts: other.max_scroll_attempts.or(self.max_scroll_attempts),
            scroll_delay_ms: other.scroll_delay_ms.or(self.scroll_delay_ms),
            max_no_new_content: other.max_no_new_content.or(self.max_no_new_content),
        }
    }

    /// Apply the patch. Returns whether any value changed.
    pub fn apply(&self, config: &mut ScrapeConfig) -> bool {
        let mut changed = false;

        if let Some(attempts) = self.max_scroll_attempts.filter(|v| *v > 0) {
            changed |= config.max_scroll_attempts != attempts;
            config.max_scroll_attempts = attempts;
        }
        if let Some(delay) = self.scroll_delay_ms.filter(|v| *v > 0) {
            changed |= config.scroll_delay_ms != delay;
            config.scroll_delay_ms = delay;
        }
        if let Some(passes) = self.max_no_new_content.filter(|v| *v > 0) {
            changed |= config.max_no_new_content != passes;
            config.max_no_new_content = passes;
        }

        changed
    }

    /// Load a patch from a JSON file such as `{"maxScrollAttempts": 100}`.
    pub fn from_json_file(path: &Path) -> ScrapeResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| ScrapeError::Config(format!("{}: {e}", path.display())))
    }
}
