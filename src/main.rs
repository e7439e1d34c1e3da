// Category CLI: Feed Scrape
//
// Scrolls an infinite social feed in Chromium, harvesting posts that carry
// outbound links, or harvests a saved page once.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kodegen_tools_feedscrape::{
    ConfigPatch, FeedScraper, LogProgress, NoClipboard, PageFeed, PostRecord, ScrapeConfig,
    harvest_snapshot, launch_browser, records_to_json,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How long to wait for the first post units after navigation
const FEED_READY_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Parser)]
#[command(name = "kodegen-feedscrape")]
#[command(about = "Harvest link-bearing posts from an infinite-scroll feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a feed in Chromium and scroll it until a stop condition fires
    Scrape {
        url: String,

        /// Stop after this many scroll attempts
        #[arg(long)]
        max_scroll_attempts: Option<u32>,

        /// Delay between scrolls in milliseconds
        #[arg(long)]
        scroll_delay_ms: Option<u64>,

        /// Stop after this many consecutive passes with nothing new
        #[arg(long)]
        max_no_new_content: Option<u32>,

        /// JSON file with a partial configuration; flags override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show the browser window
        #[arg(long)]
        headed: bool,

        /// Chrome profile directory to reuse (for an already signed-in session)
        #[arg(long)]
        profile_dir: Option<PathBuf>,

        /// Write records here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Do not copy the export to the clipboard
        #[arg(long)]
        no_clipboard: bool,
    },

    /// Harvest link-bearing posts from a saved HTML page
    Extract {
        file: PathBuf,

        /// Write records here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Scrape {
            url,
            max_scroll_attempts,
            scroll_delay_ms,
            max_no_new_content,
            config,
            headed,
            profile_dir,
            output,
            no_clipboard,
        } => {
            let mut patch = match config {
                Some(path) => ConfigPatch::from_json_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ConfigPatch::new(),
            };
            patch = patch.merged_with(ConfigPatch {
                max_scroll_attempts,
                scroll_delay_ms,
                max_no_new_content,
            });

            let records = scrape(&url, patch, !headed, profile_dir, no_clipboard).await?;
            write_records(&records, output.as_deref())
        }
        Commands::Extract { file, output } => {
            let html = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let records = harvest_snapshot(&html);
            write_records(&records, output.as_deref())
        }
    }
}

async fn scrape(
    url: &str,
    patch: ConfigPatch,
    headless: bool,
    profile_dir: Option<PathBuf>,
    no_clipboard: bool,
) -> Result<Vec<PostRecord>> {
    let browser = launch_browser(headless, profile_dir).await?;
    let page = browser
        .browser()
        .new_page("about:blank")
        .await
        .context("Failed to create page")?;

    let feed = PageFeed::new(page);
    feed.navigate(url, FEED_READY_TIMEOUT).await?;

    let mut scraper =
        FeedScraper::new(feed.clone(), feed, ScrapeConfig::default()).with_progress(LogProgress);
    if no_clipboard {
        scraper = scraper.with_clipboard(NoClipboard);
    }

    let handle = scraper.handle();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, stopping after the current pass");
            handle.stop();
        }
    });

    let outcome = scraper.start(patch).await?;
    interrupt.abort();
    info!(
        reason = %outcome.reason,
        iterations = outcome.iterations,
        new_records = outcome.new_records,
        elapsed_ms = (outcome.finished_at - outcome.started_at).num_milliseconds(),
        "Scrape finished"
    );

    let records = scraper.export();
    if let Err(e) = browser.shutdown().await {
        warn!("Browser shutdown failed: {e:#}");
    }
    Ok(records)
}

fn write_records(records: &[PostRecord], output: Option<&Path>) -> Result<()> {
    let json = records_to_json(records)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} records to {}", records.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
