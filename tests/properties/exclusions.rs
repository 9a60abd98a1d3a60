//! Property tests for sync exclusions.

use proptest::prelude::*;

use skyhook::domain::Exclusions;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every configured name is excluded by its own kind only.
    #[test]
    fn property_configured_names_are_excluded(
        dirs in proptest::collection::vec(name(), 0..=4),
        files in proptest::collection::vec(name(), 0..=4),
    ) {
        let exclusions = Exclusions::new(dirs.clone(), files.clone());
        for dir in &dirs {
            prop_assert!(exclusions.excludes_dir(dir));
        }
        for file in &files {
            prop_assert!(exclusions.excludes_file(file));
        }
    }

    /// PROPERTY: the sync pattern exists exactly when something is excluded.
    #[test]
    fn property_pattern_present_iff_nonempty(
        dirs in proptest::collection::vec(name(), 0..=3),
        files in proptest::collection::vec(name(), 0..=3),
    ) {
        let empty = dirs.is_empty() && files.is_empty();
        let pattern = Exclusions::new(dirs, files).to_sync_pattern();
        prop_assert_eq!(pattern.is_none(), empty);
    }
}
