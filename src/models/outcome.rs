use serde::Serialize;

/// Classification of what happened to one candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    /// The icon block was replaced (or would be, in a dry run)
    Updated,
    /// The marker is present but no marker-to-closing span changed anything
    NoMatch,
    /// The file has no marker at all
    NoMarker,
    /// Reading or writing the file failed
    Errored(String),
}

impl Outcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Outcome::Updated)
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Outcome::Errored(_))
    }

    /// NoMatch and NoMarker share the "unchanged" bucket of the summary
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Outcome::NoMatch | Outcome::NoMarker)
    }
}

/// Outcome of a single file, keyed by its file name within the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Aggregate counts across one run.
///
/// `updated + errored + unchanged == total` always holds because every report
/// lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub updated: usize,
    pub errored: usize,
    pub unchanged: usize,
    pub total: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        if outcome.is_updated() {
            self.updated += 1;
        } else if outcome.is_unchanged() {
            self.unchanged += 1;
        } else {
            debug_assert!(outcome.is_errored());
            self.errored += 1;
        }
    }

    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            summary.record(&report.outcome);
        }
        summary
    }
}

/// Everything one run produced: per-file outcomes in discovery order plus the summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub target_dir: String,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_buckets() {
        let mut summary = RunSummary::default();
        summary.record(&Outcome::Updated);
        summary.record(&Outcome::NoMatch);
        summary.record(&Outcome::NoMarker);
        summary.record(&Outcome::Errored("denied".to_string()));

        assert_eq!(summary.updated, 1);
        assert_eq!(summary.errored, 1);
        assert_eq!(summary.unchanged, 2);
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn test_outcome_predicates_partition() {
        let outcomes = [
            Outcome::Updated,
            Outcome::NoMatch,
            Outcome::NoMarker,
            Outcome::Errored("x".to_string()),
        ];
        for outcome in &outcomes {
            let buckets = [outcome.is_updated(), outcome.is_unchanged(), outcome.is_errored()];
            assert_eq!(buckets.iter().filter(|b| **b).count(), 1, "{:?}", outcome);
        }
        assert!(Outcome::NoMatch.is_unchanged());
        assert!(Outcome::NoMarker.is_unchanged());
        assert!(!Outcome::Errored("x".to_string()).is_unchanged());
    }

    #[test]
    fn test_outcome_json_shape() {
        let report = FileReport {
            file: "badge-a.svg".to_string(),
            outcome: Outcome::Errored("boom".to_string()),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["file"], "badge-a.svg");
        assert_eq!(json["outcome"], "errored");
        assert_eq!(json["reason"], "boom");

        let report = FileReport {
            file: "badge-b.svg".to_string(),
            outcome: Outcome::NoMarker,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], "no_marker");
        assert!(json.get("reason").is_none());
    }
}
