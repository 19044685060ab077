//! Localized message catalog for console output.

use crate::models::{Locale, Outcome, RunSummary};
use camino::Utf8Path;

/// Console strings for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn header(&self, dir: &Utf8Path, count: usize, dry_run: bool) -> String {
        match (self.locale, dry_run) {
            (Locale::En, false) => format!("🔄 Processing {} badge files in {}...", count, dir),
            (Locale::En, true) => {
                format!("🔄 Processing {} badge files in {} (dry run)...", count, dir)
            }
            (Locale::Es, false) => {
                format!("🔄 Procesando {} archivos de badges en {}...", count, dir)
            }
            (Locale::Es, true) => format!(
                "🔄 Procesando {} archivos de badges en {} (simulación)...",
                count, dir
            ),
        }
    }

    /// Message shown next to the file name; `None` for a plain success line.
    pub fn outcome(&self, outcome: &Outcome, dry_run: bool) -> Option<String> {
        let text = match (self.locale, outcome) {
            (_, Outcome::Updated) if !dry_run => return None,
            (Locale::En, Outcome::Updated) => "would update".to_string(),
            (Locale::Es, Outcome::Updated) => "se actualizaría".to_string(),
            (Locale::En, Outcome::NoMatch) => "Unchanged (pattern did not match)".to_string(),
            (Locale::Es, Outcome::NoMatch) => "Sin cambios (patrón no coincidió)".to_string(),
            (Locale::En, Outcome::NoMarker) => "No icon to replace".to_string(),
            (Locale::Es, Outcome::NoMarker) => "Sin ícono para reemplazar".to_string(),
            (Locale::En, Outcome::Errored(reason)) => format!("Error: {}", reason),
            (Locale::Es, Outcome::Errored(reason)) => format!("Error: {}", reason),
        };
        Some(text)
    }

    pub fn summary(&self, summary: &RunSummary) -> String {
        match self.locale {
            Locale::En => format!(
                "📊 Summary: {} updated, {} errors, {} unchanged",
                summary.updated, summary.errored, summary.unchanged
            ),
            Locale::Es => format!(
                "📊 Resumen: {} actualizados, {} errores, {} sin cambios",
                summary.updated, summary.errored, summary.unchanged
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updated_has_no_message() {
        let messages = Messages::new(Locale::En);
        assert_eq!(messages.outcome(&Outcome::Updated, false), None);
        assert_eq!(
            messages.outcome(&Outcome::Updated, true),
            Some("would update".to_string())
        );
    }

    #[test]
    fn test_header_reports_file_count() {
        let dir = Utf8Path::new("assets");
        assert_eq!(
            Messages::new(Locale::En).header(dir, 12, false),
            "🔄 Processing 12 badge files in assets..."
        );
        assert_eq!(
            Messages::new(Locale::Es).header(dir, 3, true),
            "🔄 Procesando 3 archivos de badges en assets (simulación)..."
        );
    }

    #[test]
    fn test_spanish_catalog() {
        let messages = Messages::new(Locale::Es);
        assert_eq!(
            messages.outcome(&Outcome::NoMarker, false),
            Some("Sin ícono para reemplazar".to_string())
        );

        let summary = RunSummary {
            updated: 2,
            errored: 1,
            unchanged: 3,
            total: 6,
        };
        assert_eq!(
            messages.summary(&summary),
            "📊 Resumen: 2 actualizados, 1 errores, 3 sin cambios"
        );
    }
}
