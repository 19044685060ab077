use crate::models::{
    DEFAULT_CLOSING_TOKEN, DEFAULT_FILE_EXTENSION, DEFAULT_FILE_PREFIX, DEFAULT_MARKER, Locale,
    RewriterConfig,
};
use crate::services::IconTemplate;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, Environment, File, FileFormat};
use std::fs;

/// Prefix of environment variables read into the configuration
pub const ENV_PREFIX: &str = "BADGE_REWRITER";

/// Values given on the command line. They take precedence over every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub target_dir: Option<Utf8PathBuf>,
    pub file_prefix: Option<String>,
    pub file_extension: Option<String>,
    pub marker: Option<String>,
    pub closing_token: Option<String>,
    pub template_path: Option<Utf8PathBuf>,
    pub locale: Option<Locale>,
    pub dry_run: bool,
}

/// Configuration manager for assembling and saving [`RewriterConfig`].
///
/// Sources, lowest to highest precedence:
/// - built-in defaults
/// - optional YAML file
/// - `BADGE_REWRITER_*` environment variables (e.g. `BADGE_REWRITER_TARGET_DIR`)
/// - [`ConfigOverrides`] from the command line
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Option<Utf8PathBuf>,
    env_prefix: String,
}

impl ConfigManager {
    /// Create a ConfigManager reading the given YAML file, if any.
    pub fn new<P: AsRef<Utf8Path>>(config_path: Option<P>) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Use a different environment variable prefix.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load the layered configuration.
    ///
    /// # Errors
    /// Fails if the config file is missing or invalid, or if no source provides a
    /// target directory.
    pub fn load(&self, overrides: ConfigOverrides) -> Result<RewriterConfig> {
        let mut builder = Config::builder()
            .set_default("file_prefix", DEFAULT_FILE_PREFIX)?
            .set_default("file_extension", DEFAULT_FILE_EXTENSION)?
            .set_default("marker", DEFAULT_MARKER)?
            .set_default("closing_token", DEFAULT_CLOSING_TOKEN)?
            .set_default("locale", "en")?
            .set_default("dry_run", false)?;

        if let Some(path) = &self.config_path {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path);
            }
            builder = builder.add_source(File::new(path.as_str(), FileFormat::Yaml));
            tracing::info!("Loading config from {}", path);
        }

        builder = builder
            .add_source(Environment::with_prefix(&self.env_prefix).try_parsing(true))
            .set_override_option("target_dir", overrides.target_dir.map(String::from))?
            .set_override_option("file_prefix", overrides.file_prefix)?
            .set_override_option("file_extension", overrides.file_extension)?
            .set_override_option("marker", overrides.marker)?
            .set_override_option("closing_token", overrides.closing_token)?
            .set_override_option("template_path", overrides.template_path.map(String::from))?
            .set_override_option("locale", overrides.locale.map(locale_key))?
            .set_override_option("dry_run", overrides.dry_run.then_some(true))?;

        let config: RewriterConfig = builder
            .build()
            .context("Failed to assemble configuration")?
            .try_deserialize()
            .context("Invalid configuration (is the target directory set?)")?;

        tracing::debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    /// Save a configuration as YAML.
    pub fn save(&self, config: &RewriterConfig, path: &Utf8Path) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", path))?;

        tracing::info!("Saved config to {}", path);
        Ok(())
    }
}

fn locale_key(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "en",
        Locale::Es => "es",
    }
}

/// Load the replacement icon: the configured template file, or the bundled gem icon.
pub fn load_template(config: &RewriterConfig) -> Result<IconTemplate> {
    let Some(path) = &config.template_path else {
        return Ok(IconTemplate::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read icon template: {}", path))?;
    let template =
        IconTemplate::new(text).with_context(|| format!("Invalid icon template: {}", path))?;

    tracing::info!("Loaded icon template from {}", path);
    Ok(template)
}
