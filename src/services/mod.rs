//! Services module - the rewriting pipeline.
//!
//! The services hold no UI or CLI code; every input is an explicit parameter so
//! they can be driven from the binary or from tests against temporary directories.
//!
//! # Components
//!
//! - [`discover_candidates`]: lists `badge-*.svg` (or the configured convention) in
//!   lexicographic order; a directory that cannot be listed aborts the run
//! - [`IconReplacer`]: pure text transformation replacing the first
//!   marker-to-closing-token span with the [`IconTemplate`]
//! - [`rewrite_file`]: read, replace, atomic write-back for one file; I/O failures
//!   become [`Outcome::Errored`](crate::models::Outcome::Errored)
//! - [`run`]: drives the above over a directory and builds the [`RunReport`](crate::models::RunReport);
//!   [`run_candidates`] does the same for names the caller already discovered
//! - [`FileStore`]: file access seam, [`FsStore`] in production
//!
//! # Flow
//!
//! directory listing → per-file read → substitution → conditional write → summary
//!
//! Everything runs sequentially on the calling thread.

pub mod coordinator;
pub mod discovery;
pub mod replacer;
pub mod rewriter;
pub mod store;

pub use coordinator::{run, run_candidates};
pub use discovery::discover_candidates;
pub use replacer::{DEFAULT_ICON_TEMPLATE, IconReplacer, IconTemplate, Replacement};
pub use rewriter::rewrite_file;
pub use store::{FileStore, FsStore};
