//! Candidate file discovery.
//!
//! Lists the target directory and keeps regular files whose name starts with the
//! configured prefix and ends with the configured extension, sorted
//! lexicographically so repeated runs report in the same order.

use crate::error::{Result, RewriteError};
use crate::models::RewriterConfig;
use camino::Utf8Path;
use std::fs;

/// Lists candidate file names in `dir`.
///
/// # Errors
///
/// Returns [`RewriteError::Discovery`] if the directory is missing, unreadable or
/// not a directory. Entries that fail individually (vanished between listing and
/// stat, non-UTF-8 names) are skipped with a debug log.
pub fn discover_candidates(dir: &Utf8Path, config: &RewriterConfig) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|source| RewriteError::Discovery {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RewriteError::Discovery {
            path: dir.to_path_buf(),
            source,
        })?;

        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!("Skipping non UTF-8 entry in {}", dir);
            continue;
        };

        if !config.is_candidate_name(&name) {
            continue;
        }

        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => {
                tracing::debug!("Skipping directory {}", name);
            }
            Ok(_) => names.push(name),
            Err(e) => tracing::debug!("Skipping {}: {}", name, e),
        }
    }

    names.sort();

    tracing::info!("Discovered {} candidate files in {}", names.len(), dir);
    Ok(names)
}
