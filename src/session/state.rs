//! Session state: accumulated records, seen identities and run counters.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::ScrapeConfig;
use crate::identity::RecordIdentity;
use crate::post_extractor::PostRecord;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopReason {
    /// `scroll_attempts` reached `max_scroll_attempts` (also how `stop()` lands)
    MaxAttemptsReached,
    /// Too many consecutive passes found nothing new
    NoNewContentExhausted,
    /// The viewport reached the end of the content
    BottomOfPage,
    /// Neither scrolling strategy moved the viewport
    ScrollStalled,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MaxAttemptsReached => write!(f, "reached maximum scroll attempts"),
            Self::NoNewContentExhausted => write!(f, "no new content in consecutive passes"),
            Self::BottomOfPage => write!(f, "reached bottom of page"),
            Self::ScrollStalled => write!(f, "could not scroll further"),
        }
    }
}

/// Outcome of evaluating the stop conditions after a scrape pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopDecision {
    ContinueScrolling,
    Stop(StopReason),
}

impl StopDecision {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stop(_))
    }
}

/// Lifecycle of a session's controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Stopped(StopReason),
}

/// Read-only counters reported by `stats()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total_records: usize,
    pub scroll_attempts: u32,
    pub unique_identity_count: usize,
}

/// Everything a session accumulates across passes
///
/// Records are kept in discovery order. Every stored record's identity is in
/// `seen`, and nothing else is, so the two always have the same size.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    records: Vec<PostRecord>,
    seen: HashSet<RecordIdentity>,
    scroll_attempts: u32,
    no_new_content_streak: u32,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one extraction pass into the session.
    ///
    /// Records without outbound links are ignored. Of the rest, only the
    /// first record seen for each identity is kept; later duplicates are
    /// dropped, not merged. Updates the no-new-content streak and returns how
    /// many records were new.
    pub fn absorb_pass(&mut self, extracted: impl IntoIterator<Item = PostRecord>) -> usize {
        let mut new_records = 0;

        for record in extracted {
            if !record.has_outbound_links() {
                continue;
            }
            if self.seen.insert(RecordIdentity::of(&record)) {
                self.records.push(record);
                new_records += 1;
            }
        }

        if new_records == 0 {
            self.no_new_content_streak = self.no_new_content_streak.saturating_add(1);
        } else {
            self.no_new_content_streak = 0;
        }

        new_records
    }

    /// The count-based stop checks, in priority order.
    ///
    /// The bottom-of-page check comes after these and needs the viewport, so
    /// the controller performs it.
    #[must_use]
    pub fn limit_decision(&self, config: &ScrapeConfig) -> StopDecision {
        if self.scroll_attempts >= config.max_scroll_attempts() {
            StopDecision::Stop(StopReason::MaxAttemptsReached)
        } else if self.no_new_content_streak >= config.max_no_new_content() {
            StopDecision::Stop(StopReason::NoNewContentExhausted)
        } else {
            StopDecision::ContinueScrolling
        }
    }

    /// Count a scroll attempt and return the new total.
    pub fn record_scroll_attempt(&mut self) -> u32 {
        self.scroll_attempts = self.scroll_attempts.saturating_add(1);
        self.scroll_attempts
    }

    #[must_use]
    pub fn records(&self) -> &[PostRecord] {
        &self.records
    }

    #[must_use]
    pub fn scroll_attempts(&self) -> u32 {
        self.scroll_attempts
    }

    #[must_use]
    pub fn no_new_content_streak(&self) -> u32 {
        self.no_new_content_streak
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total_records: self.records.len(),
            scroll_attempts: self.scroll_attempts,
            unique_identity_count: self.seen.len(),
        }
    }

    /// Clear every field at once.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post_extractor::{Author, Engagement, Timestamp};

    fn nothing() -> Vec<PostRecord> {
        Vec::new()
    }

    fn post(text: &str, links: &[&str]) -> PostRecord {
        PostRecord {
            author: Author {
                display_name: Some("Alice".into()),
                handle: Some("alice".into()),
                verified: false,
            },
            timestamp: Timestamp {
                iso_datetime: Some("2025-01-01T00:00:00Z".into()),
                display_text: Some("1h".into()),
            },
            body_text: text.into(),
            engagement: Engagement::default(),
            permalink: None,
            outbound_links: links.iter().map(|l| (*l).to_string()).collect(),
        }
    }

    #[test]
    fn first_seen_wins_and_duplicates_are_dropped() {
        let mut state = SessionState::new();
        let mut first = post("hello", &["https://a.example"]);
        first.engagement.likes = 1;
        let mut later = first.clone();
        later.engagement.likes = 50;

        assert_eq!(state.absorb_pass([first, later]), 1);
        assert_eq!(state.records().len(), 1);
        assert_eq!(state.records()[0].engagement.likes, 1);
    }

    #[test]
    fn linkless_records_are_not_retained() {
        let mut state = SessionState::new();
        assert_eq!(state.absorb_pass([post("plain", &[])]), 0);
        assert!(state.records().is_empty());
        assert_eq!(state.no_new_content_streak(), 1);
    }

    #[test]
    fn streak_resets_on_new_content() {
        let mut state = SessionState::new();
        state.absorb_pass(nothing());
        state.absorb_pass(nothing());
        assert_eq!(state.no_new_content_streak(), 2);
        state.absorb_pass([post("new", &["https://a.example"])]);
        assert_eq!(state.no_new_content_streak(), 0);
    }

    #[test]
    fn limit_checks_follow_priority_order() {
        let config = ScrapeConfig::builder()
            .max_scroll_attempts(1)
            .max_no_new_content(1)
            .build();
        let mut state = SessionState::new();
        assert_eq!(state.limit_decision(&config), StopDecision::ContinueScrolling);

        state.absorb_pass(nothing());
        assert_eq!(
            state.limit_decision(&config),
            StopDecision::Stop(StopReason::NoNewContentExhausted)
        );

        state.record_scroll_attempt();
        assert_eq!(
            state.limit_decision(&config),
            StopDecision::Stop(StopReason::MaxAttemptsReached)
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = SessionState::new();
        state.absorb_pass([post("x", &["https://a.example"])]);
        state.record_scroll_attempt();
        state.absorb_pass(nothing());
        state.reset();
        assert_eq!(state.stats(), SessionStats::default());
        assert_eq!(state.no_new_content_streak(), 0);
    }
}
