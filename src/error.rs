use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by the rewriter library.
///
/// Only [`RewriteError::Discovery`] escapes a run; read and write failures are
/// converted into [`Outcome::Errored`](crate::models::Outcome::Errored) by the
/// per-file orchestrator.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Failed to list target directory {path}: {source}")]
    Discovery {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid icon template: {0}")]
    Template(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, RewriteError>;
