//! Scrape-scroll controller
//!
//! Drives the loop: snapshot → extract → dedup → stop checks → scroll → delay.
//! The only suspension points besides source/viewport I/O are the inter-scroll
//! delay, so each iteration does exactly one extraction pass followed by at
//! most one scroll attempt.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use super::progress::{NoOpProgress, ScrapeProgress};
use super::state::{RunStatus, SessionState, SessionStats, StopDecision, StopReason};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::{ConfigPatch, ScrapeConfig};
use crate::document::DocumentSource;
use crate::error::{ScrapeError, ScrapeResult};
use crate::post_extractor::{PostRecord, extract_from_html};
use crate::scroll::{ScrollDriver, Viewport};

/// Result of one `start()` call
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub reason: StopReason,
    /// Every record the session holds, including those from earlier runs
    pub records: Vec<PostRecord>,
    /// Records first discovered during this run
    pub new_records: usize,
    /// Extraction passes performed during this run
    pub iterations: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub(crate) struct SessionShared {
    pub(crate) state: Mutex<SessionState>,
    pub(crate) config: Mutex<ScrapeConfig>,
    pub(crate) status: Mutex<RunStatus>,
    pub(crate) clipboard: Mutex<Box<dyn Clipboard>>,
    running: AtomicBool,
}

/// Cloneable control surface for a session
///
/// Lets other tasks stop, reconfigure, inspect, export or reset a session
/// while its run is in progress. State is only ever locked briefly and never
/// across an await.
#[derive(Clone)]
pub struct SessionHandle {
    pub(crate) shared: Arc<SessionShared>,
}

impl SessionHandle {
    fn new(config: ScrapeConfig) -> Self {
        Self {
            shared: Arc::new(SessionShared {
                state: Mutex::new(SessionState::new()),
                config: Mutex::new(config),
                status: Mutex::new(RunStatus::Idle),
                clipboard: Mutex::new(Box::new(SystemClipboard)),
                running: AtomicBool::new(false),
            }),
        }
    }

    /// Apply a partial configuration; absent and zero values are ignored.
    /// Returns the resulting configuration.
    pub fn configure(&self, patch: ConfigPatch) -> ScrapeConfig {
        let mut config = self.shared.config.lock();
        if patch.apply(&mut config) {
            info!(
                max_scroll_attempts = config.max_scroll_attempts(),
                scroll_delay_ms = config.scroll_delay_ms(),
                max_no_new_content = config.max_no_new_content(),
                "Configuration updated"
            );
        }
        config.clone()
    }

    #[must_use]
    pub fn config(&self) -> ScrapeConfig {
        self.shared.config.lock().clone()
    }

    /// Ask the running loop to stop at its next stop check.
    ///
    /// Forces `max_scroll_attempts` to 0; the run then ends with
    /// [`StopReason::MaxAttemptsReached`] after finishing its current
    /// iteration. A later run also stops after one pass unless
    /// `configure` raises the limit again.
    pub fn stop(&self) {
        self.shared.config.lock().max_scroll_attempts = 0;
        info!("Scraping stopped by user");
    }

    /// Snapshot of the accumulated records, in discovery order
    #[must_use]
    pub fn records(&self) -> Vec<PostRecord> {
        self.shared.state.lock().records().to_vec()
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.shared.state.lock().stats()
    }

    #[must_use]
    pub fn status(&self) -> RunStatus {
        *self.shared.status.lock()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Discard all accumulated records and counters.
    pub fn reset(&self) {
        self.shared.state.lock().reset();
        info!("Scraper reset");
    }

    /// Replace the clipboard used by `export`.
    pub fn set_clipboard(&self, clipboard: impl Clipboard + 'static) {
        *self.shared.clipboard.lock() = Box::new(clipboard);
    }
}

/// Marks a session as running for the lifetime of one `start()` call,
/// including when the run future is dropped part-way.
///
/// A run dropped before reaching a stop reason leaves the session `Idle`.
struct RunGuard<'a> {
    shared: &'a SessionShared,
}

impl<'a> RunGuard<'a> {
    fn acquire(shared: &'a SessionShared) -> ScrapeResult<Self> {
        shared
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ScrapeError::AlreadyRunning)?;
        Ok(Self { shared })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        {
            let mut status = self.shared.status.lock();
            if *status == RunStatus::Running {
                warn!("Scrape run cancelled before reaching a stop condition");
                *status = RunStatus::Idle;
            }
        }
        self.shared.running.store(false, Ordering::Release);
    }
}

/// Incremental scrape-scroll session over one feed
///
/// Owns the document source and scroll driver; everything else lives behind
/// a [`SessionHandle`], so several independent sessions can coexist.
pub struct FeedScraper<S, V> {
    source: S,
    driver: ScrollDriver<V>,
    handle: SessionHandle,
    progress: Arc<dyn ScrapeProgress>,
}

impl<S: DocumentSource, V: Viewport> FeedScraper<S, V> {
    /// Create an idle session with empty state.
    pub fn new(source: S, viewport: V, config: ScrapeConfig) -> Self {
        let driver = ScrollDriver::new(viewport).with_bottom_threshold(config.bottom_threshold_px());
        Self {
            source,
            driver,
            handle: SessionHandle::new(config),
            progress: Arc::new(NoOpProgress),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: impl ScrapeProgress + 'static) -> Self {
        self.progress = Arc::new(progress);
        self
    }

    #[must_use]
    pub fn with_clipboard(self, clipboard: impl Clipboard + 'static) -> Self {
        self.handle.set_clipboard(clipboard);
        self
    }

    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn driver(&self) -> &ScrollDriver<V> {
        &self.driver
    }

    /// Run the scrape-scroll loop until a stop condition fires.
    ///
    /// `patch` is applied first, as with [`SessionHandle::configure`]. The run
    /// resumes from whatever the session already holds; call `reset()` first
    /// for a fresh start. Fails only if another run is in progress on this
    /// session.
    pub async fn start(&self, patch: ConfigPatch) -> ScrapeResult<RunOutcome> {
        let _guard = RunGuard::acquire(&self.handle.shared)?;
        let config = self.handle.configure(patch);

        info!(
            max_scroll_attempts = config.max_scroll_attempts(),
            scroll_delay_ms = config.scroll_delay_ms(),
            max_no_new_content = config.max_no_new_content(),
            "Starting scrape-scroll run"
        );

        *self.handle.shared.status.lock() = RunStatus::Running;
        let started_at = Utc::now();
        let mut iterations = 0u32;
        let mut new_records = 0usize;

        let reason = loop {
            iterations = iterations.saturating_add(1);
            new_records += self.scrape_pass(iterations).await;

            // Re-read every iteration so stop() and configure() take effect.
            let config = self.handle.config();
            let decision = self.handle.shared.state.lock().limit_decision(&config);
            if let StopDecision::Stop(reason) = decision {
                break reason;
            }

            if self.driver.is_at_bottom().await {
                break StopReason::BottomOfPage;
            }

            let attempt = self.handle.shared.state.lock().record_scroll_attempt();
            self.progress
                .report_scroll(attempt, config.max_scroll_attempts());

            if !self.driver.advance().await {
                break StopReason::ScrollStalled;
            }

            tokio::time::sleep(config.scroll_delay()).await;
        };

        *self.handle.shared.status.lock() = RunStatus::Stopped(reason);
        let records = self.handle.records();
        self.progress.report_stopped(reason, records.len());
        info!(
            %reason,
            iterations,
            new_records,
            total_records = records.len(),
            "Scrape-scroll run finished"
        );

        Ok(RunOutcome {
            reason,
            records,
            new_records,
            iterations,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// One extraction pass folded into the session. Returns the new-record count.
    ///
    /// A snapshot that cannot be read counts as a pass with nothing new.
    async fn scrape_pass(&self, iteration: u32) -> usize {
        debug!("Scraping current view (pass {iteration})");

        let extracted = match self.source.snapshot().await {
            Ok(html) => extract_from_html(&html),
            Err(e) => {
                warn!("Could not read document snapshot, treating pass as empty: {e}");
                Vec::new()
            }
        };

        let (new_records, total_records) = {
            let mut state = self.handle.shared.state.lock();
            let new_records = state.absorb_pass(extracted);
            (new_records, state.records().len())
        };

        self.progress
            .report_pass(iteration, new_records, total_records);
        new_records
    }

    pub fn configure(&self, patch: ConfigPatch) -> ScrapeConfig {
        self.handle.configure(patch)
    }

    #[must_use]
    pub fn config(&self) -> ScrapeConfig {
        self.handle.config()
    }

    pub fn stop(&self) {
        self.handle.stop();
    }

    #[must_use]
    pub fn records(&self) -> Vec<PostRecord> {
        self.handle.records()
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.handle.stats()
    }

    #[must_use]
    pub fn status(&self) -> RunStatus {
        self.handle.status()
    }

    pub fn export(&self) -> Vec<PostRecord> {
        self.handle.export()
    }

    pub fn reset(&self) {
        self.handle.reset();
    }
}
