//! Configuration module for feed scraping
//!
//! This module provides the `ScrapeConfig` struct, its fluent builder and the
//! `ConfigPatch` used to change a live session's settings.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod patch;
pub mod types;

// Re-exports for public API
pub use builder::ScrapeConfigBuilder;
pub use patch::ConfigPatch;
pub use types::ScrapeConfig;
