//! Property tests for sync output classification.

use proptest::prelude::*;

use skyhook::domain::progress::IGNORE_PATTERNS;
use skyhook::{classify_line, ProgressEvent};

fn folder_name() -> impl Strategy<Value = String> {
    // Prefixed so the name cannot occur earlier in the generated path.
    proptest::string::string_regex("dag_[a-z0-9_]{1,20}").unwrap()
}

fn relative_file() -> impl Strategy<Value = String> {
    proptest::string::string_regex("([a-z0-9_]{1,8}/){0,3}[a-z0-9_]{1,12}\\.py").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: classification never panics on arbitrary input.
    #[test]
    fn property_classify_never_panics(line in "(?s).{0,256}", folder in "(?s).{0,32}") {
        let _ = classify_line(&line, &folder);
    }

    /// PROPERTY: whitespace-only lines are always ignored.
    #[test]
    fn property_blank_lines_are_ignored(line in "[ \t\r\n]{0,16}", folder in folder_name()) {
        prop_assert_eq!(classify_line(&line, &folder), ProgressEvent::Ignored);
    }

    /// PROPERTY: known tool noise is ignored wherever it appears in a line.
    #[test]
    fn property_noise_is_ignored(
        idx in 0..IGNORE_PATTERNS.len(),
        prefix in "[A-Za-z0-9 :]{0,24}",
        suffix in "[A-Za-z0-9 .]{0,24}",
        folder in folder_name(),
    ) {
        let line = format!("{}{}{}", prefix, IGNORE_PATTERNS[idx], suffix);
        prop_assert_eq!(classify_line(&line, &folder), ProgressEvent::Ignored);
    }

    /// PROPERTY: a copy of a file inside the folder reports the path from the folder onward.
    #[test]
    fn property_copying_reports_folder_relative_path(
        folder in folder_name(),
        file in relative_file(),
    ) {
        let line = format!(
            "Copying file:///workspace/dags/{}/{} [Content-Type=text/x-python]...",
            folder, file
        );
        let expected = format!("{}/{}", folder, file);
        prop_assert_eq!(classify_line(&line, &folder), ProgressEvent::FileSyncing(expected));
    }
}
