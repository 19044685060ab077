//! Data models for the badge rewriter.
//!
//! - [`RewriterConfig`]: target directory, naming convention, marker/closing tokens and template path
//! - [`Outcome`]: per-file classification (updated, no match, no marker, errored)
//! - [`RunSummary`] / [`RunReport`]: aggregate counts and the full result of one run

pub mod config;
pub mod outcome;

pub use self::config::{
    DEFAULT_CLOSING_TOKEN, DEFAULT_FILE_EXTENSION, DEFAULT_FILE_PREFIX, DEFAULT_MARKER, Locale,
    RewriterConfig,
};
pub use outcome::{FileReport, Outcome, RunReport, RunSummary};
