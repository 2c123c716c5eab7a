//! Logging facilities for the gophermap crates.
//!
//! This module provides:
//! - Target names for filtering the `tracing` output of each subsystem
//! - Span names used when timing a parse or a render
//! - [`PerfSpan`], a guard that keeps a timing span entered
//!
//! # Tracing Integration
//!
//! Nothing is printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Skipped gophermap lines are reported at `trace` level, so an
//! `RUST_LOG=gophermap_core::parser=trace` filter shows exactly which lines
//! of a listing were dropped and why.

/// Span names used throughout the gophermap crates.
pub mod span_names {
    /// Parsing raw gophermap bytes.
    pub const PARSE: &str = "gophermap::parse";
    /// Building a document from parsed items.
    pub const BUILD: &str = "gophermap::build";
    /// The full bytes-to-document render.
    pub const RENDER: &str = "gophermap::render";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "gophermap_core";
    /// Line parser target.
    pub const PARSER: &str = "gophermap_core::parser";
    /// Document builder target.
    pub const BUILDER: &str = "gophermap_render::builder";
    /// End-to-end renderer target.
    pub const RENDERER: &str = "gophermap_render::renderer";
    /// Icon resource registration target.
    pub const RESOURCES: &str = "gophermap_render::resources";
    /// Configuration loading target.
    pub const CONFIG: &str = "gophermap_render::config";
    /// Performance spans target.
    pub const PERF: &str = "gophermap::perf";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// Useful for measuring how long a parse or render takes with a
/// span-timing subscriber.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "gophermap::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// `tracing::trace!` with the core target.
#[macro_export]
macro_rules! gophermap_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "gophermap_core", $($arg)*)
    };
}
