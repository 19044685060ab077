use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Default candidate file prefix
pub const DEFAULT_FILE_PREFIX: &str = "badge-";

/// Default candidate file extension
pub const DEFAULT_FILE_EXTENSION: &str = ".svg";

/// Default marker opening the icon block
pub const DEFAULT_MARKER: &str = "<!-- Icon:";

/// Default token closing the icon block
pub const DEFAULT_CLOSING_TOKEN: &str = "</g>";

/// Language used for per-file and summary messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Rewriter configuration.
///
/// Assembled by [`ConfigManager`](crate::config::ConfigManager) from defaults, an
/// optional YAML file, `BADGE_REWRITER_*` environment variables and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriterConfig {
    /// Directory holding the badge files
    pub target_dir: Utf8PathBuf,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default = "default_closing_token")]
    pub closing_token: String,

    /// Replacement icon template; the bundled gem icon when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<Utf8PathBuf>,

    #[serde(default)]
    pub locale: Locale,

    /// Classify files without writing anything
    #[serde(default)]
    pub dry_run: bool,
}

impl RewriterConfig {
    /// Configuration with every default applied for the given directory.
    pub fn new(target_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            file_prefix: default_file_prefix(),
            file_extension: default_file_extension(),
            marker: default_marker(),
            closing_token: default_closing_token(),
            template_path: None,
            locale: Locale::default(),
            dry_run: false,
        }
    }

    /// Whether a file name follows the candidate naming convention
    pub fn is_candidate_name(&self, name: &str) -> bool {
        name.starts_with(&self.file_prefix) && name.ends_with(&self.file_extension)
    }
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_closing_token() -> String {
    DEFAULT_CLOSING_TOKEN.to_string()
}
