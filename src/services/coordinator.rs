use crate::error::Result;
use crate::models::{FileReport, RewriterConfig, RunReport, RunSummary};
use crate::services::discovery::discover_candidates;
use crate::services::replacer::IconReplacer;
use crate::services::rewriter::rewrite_file;
use crate::services::store::FileStore;

/// Runs the rewriter over every candidate file in `config.target_dir`.
///
/// Files are processed one at a time in lexicographic order and every discovered
/// file gets exactly one [`FileReport`]. `on_file` is called after each file so the
/// caller can print progress; it has no influence on the run.
///
/// # Errors
///
/// Only discovery failures are returned. Per-file failures are reported as
/// [`Outcome::Errored`](crate::models::Outcome::Errored).
pub fn run<S, F>(
    config: &RewriterConfig,
    replacer: &IconReplacer,
    store: &S,
    on_file: F,
) -> Result<RunReport>
where
    S: FileStore + ?Sized,
    F: FnMut(&FileReport),
{
    let names = discover_candidates(&config.target_dir, config)?;
    Ok(run_candidates(config, names, replacer, store, on_file))
}

/// Processes already discovered file names from `config.target_dir`.
///
/// Lets the caller report the number of files before processing starts.
pub fn run_candidates<S, F>(
    config: &RewriterConfig,
    names: Vec<String>,
    replacer: &IconReplacer,
    store: &S,
    mut on_file: F,
) -> RunReport
where
    S: FileStore + ?Sized,
    F: FnMut(&FileReport),
{
    tracing::info!(
        "Processing {} files in {} (dry_run={})",
        names.len(),
        config.target_dir,
        config.dry_run
    );

    let mut files = Vec::with_capacity(names.len());
    for name in names {
        let path = config.target_dir.join(&name);
        let outcome = rewrite_file(store, replacer, &path, config.dry_run);
        tracing::debug!("{}: {:?}", name, outcome);

        let report = FileReport {
            file: name,
            outcome,
        };
        on_file(&report);
        files.push(report);
    }

    let summary = RunSummary::from_reports(&files);
    tracing::info!(
        "Run complete - updated: {}, errored: {}, unchanged: {}",
        summary.updated,
        summary.errored,
        summary.unchanged
    );

    RunReport {
        target_dir: config.target_dir.to_string(),
        dry_run: config.dry_run,
        files,
        summary,
    }
}
