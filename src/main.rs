//! Badge Rewriter - command line entry point.
//!
//! # Execution Flow
//!
//! 1. Parse arguments and initialize logging (stderr, optional rotating file)
//! 2. Resolve configuration: defaults → YAML file → `BADGE_REWRITER_*` env → flags
//! 3. Load the icon template and build the replacer
//! 4. Discover candidate files and print the header with their count
//! 5. Rewrite every candidate, printing per-file lines and the summary (or a JSON report)
//!
//! # Exit Codes
//!
//! - `0`: the run completed, even if individual files errored
//! - non-zero: configuration, template or directory discovery failed

use anyhow::{Context, Result};
use badge_rewriter::cli::Args;
use badge_rewriter::config::load_template;
use badge_rewriter::report::{self, Messages, OutputFormat};
use badge_rewriter::services::{discover_candidates, run_candidates};
use badge_rewriter::{APP_NAME, ConfigManager, FsStore, IconReplacer, VERSION};
use clap::Parser;
use std::io::{self, Write};

fn main() -> Result<()> {
    let args = Args::parse();

    let _guard = badge_rewriter::logging::setup_logging(args.log_dir.as_deref(), APP_NAME, args.debug)?;

    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);

    let config_manager = ConfigManager::new(args.config.as_deref());
    let config = config_manager.load(args.overrides())?;

    if let Some(path) = &args.write_config {
        config_manager.save(&config, path)?;
        return Ok(());
    }

    let template = load_template(&config)?;
    let replacer = IconReplacer::new(&config.marker, &config.closing_token, template)?;
    if !replacer.template_is_fixed_point() {
        tracing::warn!(
            "Icon template is not a single {}...{} block; rewritten files will change again on the next run",
            config.marker,
            config.closing_token
        );
    }

    let messages = Messages::new(config.locale);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let names = discover_candidates(&config.target_dir, &config).context("Run aborted")?;

    match args.format {
        OutputFormat::Text => {
            writeln!(
                out,
                "{}",
                messages.header(&config.target_dir, names.len(), config.dry_run)
            )?;
            writeln!(out, "{}", report::separator())?;

            let run_report = run_candidates(&config, names, &replacer, &FsStore, |file| {
                // Report output is best effort, a closed stdout must not stop the run
                let _ = writeln!(out, "{}", report::file_line(&messages, file, config.dry_run));
            });

            report::write_summary(&mut out, &messages, &run_report.summary)?;
        }
        OutputFormat::Json => {
            let run_report = run_candidates(&config, names, &replacer, &FsStore, |_| {});
            report::write_json(&mut out, &run_report)?;
        }
    }

    Ok(())
}
