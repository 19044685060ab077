//! Command line arguments.

use crate::config::ConfigOverrides;
use crate::models::Locale;
use crate::report::OutputFormat;
use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "badge-rewriter", version, about = "Replace the icon block of badge SVG files")]
pub struct Args {
    /// Directory holding the badge files (or BADGE_REWRITER_TARGET_DIR)
    pub target_dir: Option<Utf8PathBuf>,

    /// YAML config file
    #[arg(long, short = 'c')]
    pub config: Option<Utf8PathBuf>,

    /// Replacement icon template file (defaults to the bundled gem icon)
    #[arg(long, short = 't')]
    pub template: Option<Utf8PathBuf>,

    /// File name prefix of candidate files
    #[arg(long)]
    pub prefix: Option<String>,

    /// File name extension of candidate files
    #[arg(long)]
    pub extension: Option<String>,

    /// Token opening the icon block
    #[arg(long)]
    pub marker: Option<String>,

    /// Token closing the icon block
    #[arg(long)]
    pub closing_token: Option<String>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Message language
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write a daily rotating log file into this directory
    #[arg(long)]
    pub log_dir: Option<Utf8PathBuf>,

    /// Debug logging
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Save the resolved configuration as YAML to this path and exit
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<Utf8PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            target_dir: self.target_dir.clone(),
            file_prefix: self.prefix.clone(),
            file_extension: self.extension.clone(),
            marker: self.marker.clone(),
            closing_token: self.closing_token.clone(),
            template_path: self.template.clone(),
            locale: self.locale,
            dry_run: self.dry_run,
        }
    }
}
