//! # dar-adapters
//!
//! Converters from capture formats into the DAR format.
//!
//! This crate provides adapters for:
//! - HAR (HTTP Archive) captures
//!
//! ## Example
//!
//! ```rust,no_run
//! use dar_adapters::har;
//!
//! let report = har::convert("capture.har", "capture.dar")?;
//! println!("{} entries", report.entry_count);
//! # Ok::<(), dar_format::DarError>(())
//! ```

pub mod har;

use std::path::PathBuf;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Source capture
    pub input: PathBuf,
    /// Written DAR file
    pub output: PathBuf,
    /// Number of request entries carried over
    pub entry_count: usize,
    /// `log` members that existed in the input and were overwritten
    pub replaced: Vec<&'static str>,
}
