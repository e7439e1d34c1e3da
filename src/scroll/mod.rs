//! Viewport scrolling for infinite feeds.

pub mod driver;
pub mod viewport;

pub use driver::ScrollDriver;
pub use viewport::{Viewport, ViewportMetrics};
