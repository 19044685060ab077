use crate::error::{Result, RewriteError};
use regex::{NoExpand, Regex};

/// Bundled replacement icon: a faceted gem.
pub const DEFAULT_ICON_TEMPLATE: &str = include_str!("../../templates/gem-icon.svg");

/// Result of running the replacer over one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// The icon block was replaced; carries the new content
    Changed(String),
    /// Marker present, but no span matched or the substitution was a no-op
    NoMatch,
    /// The marker does not occur in the content
    NoMarker,
}

/// Replacement icon markup, normalised for idempotent substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTemplate {
    text: String,
}

impl IconTemplate {
    /// Trailing whitespace is trimmed: anything after the closing token would be
    /// inserted again on every run.
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref().trim_end();
        if text.trim().is_empty() {
            return Err(RewriteError::Template("template is empty".to_string()));
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for IconTemplate {
    fn default() -> Self {
        Self {
            text: DEFAULT_ICON_TEMPLATE.trim_end().to_string(),
        }
    }
}

/// Replaces the icon block of a badge file with the configured template.
///
/// The block starts at the marker token and runs, across lines, to the first
/// closing token after it. Spaces and tabs directly before the marker belong to
/// the block so the template's own indentation replaces the old one.
///
/// Nested closing tokens inside a block are not supported: the match stops at
/// the first one.
///
/// # Fields
///
/// - `marker`: literal token opening the block, checked before any regex work
/// - `pattern`: `(?s)[ \t]*<marker>.*?<closing>` with both tokens escaped
/// - `template`: replacement text, inserted literally
#[derive(Debug, Clone)]
pub struct IconReplacer {
    marker: String,
    pattern: Regex,
    template: IconTemplate,
}

impl IconReplacer {
    pub fn new(marker: &str, closing_token: &str, template: IconTemplate) -> Result<Self> {
        if marker.is_empty() || closing_token.is_empty() {
            return Err(RewriteError::Template(
                "marker and closing token must not be empty".to_string(),
            ));
        }

        let pattern = Regex::new(&format!(
            r"(?s)[ \t]*{}.*?{}",
            regex::escape(marker),
            regex::escape(closing_token)
        ))?;

        Ok(Self {
            marker: marker.to_string(),
            pattern,
            template,
        })
    }

    /// Classifies `content` and, when the block is found, returns the rewritten text.
    pub fn replace(&self, content: &str) -> Replacement {
        if !content.contains(&self.marker) {
            return Replacement::NoMarker;
        }

        let replaced = self
            .pattern
            .replacen(content, 1, NoExpand(self.template.as_str()));

        if replaced == content {
            Replacement::NoMatch
        } else {
            Replacement::Changed(replaced.into_owned())
        }
    }

    /// Whether the template maps onto itself, i.e. a second run leaves
    /// rewritten files alone.
    pub fn template_is_fixed_point(&self) -> bool {
        let template = self.template.as_str();
        match self.pattern.find(template) {
            Some(m) => m.start() == 0 && m.end() == template.len(),
            None => false,
        }
    }

    pub fn template(&self) -> &IconTemplate {
        &self.template
    }
}
