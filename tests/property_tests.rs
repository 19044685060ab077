//! Property tests for the replacer and full runs
//!
//! - Summary counts always add up to the number of discovered files
//! - Rewriting is idempotent: replaced content is left alone by a second pass

use badge_rewriter::services::{FsStore, IconReplacer, IconTemplate, Replacement};
use badge_rewriter::{RewriterConfig, run};
use camino::Utf8PathBuf;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn replacer() -> IconReplacer {
    IconReplacer::new("<!-- Icon:", "</g>", IconTemplate::default()).unwrap()
}

/// Badge-like content built from fragments that may or may not form an icon block.
fn badge_content() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("<svg>".to_string()),
        Just("</svg>".to_string()),
        Just("\n".to_string()),
        Just("  ".to_string()),
        Just("<!-- Icon: Old -->".to_string()),
        Just("<g>".to_string()),
        Just("</g>".to_string()),
        Just("<text>Label</text>".to_string()),
        "[a-z ]{0,8}",
    ];
    prop::collection::vec(fragment, 0..16).prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn replacement_is_idempotent(content in badge_content()) {
        let replacer = replacer();
        if let Replacement::Changed(once) = replacer.replace(&content) {
            prop_assert_eq!(replacer.replace(&once), Replacement::NoMatch);
        }
    }

    #[test]
    fn no_marker_means_no_marker_outcome(content in "[a-z<>/ \n]{0,64}") {
        prop_assume!(!content.contains("<!-- Icon:"));
        prop_assert_eq!(replacer().replace(&content), Replacement::NoMarker);
    }

    #[test]
    fn summary_counts_are_conserved(contents in prop::collection::vec(badge_content(), 0..8)) {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        for (i, content) in contents.iter().enumerate() {
            fs::write(dir.join(format!("badge-{i}.svg")), content).unwrap();
        }
        fs::write(dir.join("notes.txt"), "<!-- Icon: x --><g></g>").unwrap();

        let config = RewriterConfig::new(&dir);
        let report = run(&config, &replacer(), &FsStore, |_| {}).unwrap();
        let summary = report.summary;

        prop_assert_eq!(summary.total, contents.len());
        prop_assert_eq!(report.files.len(), contents.len());
        prop_assert_eq!(summary.updated + summary.errored + summary.unchanged, summary.total);
    }
}
