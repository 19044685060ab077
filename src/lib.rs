// Badge Rewriter - batch replace the marked icon block in badge SVG files
//
// This is the library crate containing discovery, matching and rewriting.
// The binary crate (main.rs) provides the command line entry point.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;

// Re-export commonly used types for convenience
pub use self::config::{ConfigManager, ConfigOverrides};
pub use error::RewriteError;
pub use models::{FileReport, Locale, Outcome, RewriterConfig, RunReport, RunSummary};
pub use services::{FileStore, FsStore, IconReplacer, IconTemplate, run};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
