use crate::models::Outcome;
use crate::services::replacer::{IconReplacer, Replacement};
use crate::services::store::FileStore;
use camino::Utf8Path;

/// Processes a single badge file: read, replace, write back if changed.
///
/// Read and write failures become [`Outcome::Errored`] so the caller can move on
/// to the next file. With `dry_run` set the write is skipped and a changed file is
/// still reported as [`Outcome::Updated`].
pub fn rewrite_file<S: FileStore + ?Sized>(
    store: &S,
    replacer: &IconReplacer,
    path: &Utf8Path,
    dry_run: bool,
) -> Outcome {
    let content = match store.read(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("{}", e);
            return Outcome::Errored(e.to_string());
        }
    };

    match replacer.replace(&content) {
        Replacement::NoMarker => Outcome::NoMarker,
        Replacement::NoMatch => Outcome::NoMatch,
        Replacement::Changed(_) if dry_run => {
            tracing::debug!("Dry run, leaving {} untouched", path);
            Outcome::Updated
        }
        Replacement::Changed(new_content) => match store.write(path, &new_content) {
            Ok(()) => Outcome::Updated,
            Err(e) => {
                tracing::warn!("{}", e);
                Outcome::Errored(e.to_string())
            }
        },
    }
}
