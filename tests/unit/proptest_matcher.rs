//! Property-based tests for pattern parsing and matching
//!
//! Uses proptest to verify properties that should hold for all inputs.

use file_filter::core::models::{MatchMode, PatternSet, parse_patterns, split_patterns};
use file_filter::core::services::match_files;
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,6}", 1..4)
        .prop_flat_map(|dirs| ("[a-z]{1,3}".prop_map(String::from), Just(dirs)))
        .prop_map(|(ext, dirs)| format!("{}.{ext}", dirs.join("/")))
}

fn files_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_strategy(), 0..12)
}

fn patterns_strategy() -> impl Strategy<Value = PatternSet> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,3}".prop_map(|ext| format!("*.{ext}")),
            "[a-z]{1,6}".prop_map(|dir| format!("{dir}/**")),
            "[a-z]{1,2}".prop_map(|s| format!("*{s}*")),
        ],
        1..4,
    )
    .prop_map(|patterns| PatternSet::compile(&patterns).unwrap())
}

/// Whether `sub` appears in `full` in order (not necessarily contiguously)
fn is_subsequence(sub: &[String], full: &[String]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|item| rest.any(|candidate| candidate == item))
}

proptest! {
    /// Rejoining tokens with single spaces gives the whitespace-normalized input
    #[test]
    fn parse_round_trips_normalized_text(
        tokens in prop::collection::vec("[a-z*?./]{1,8}", 1..6),
        separators in prop::collection::vec(prop_oneof![
            Just(" "), Just("  "), Just("\n"), Just("\t"), Just(" \n\t ")
        ], 6),
    ) {
        let mut text = String::from(separators[0]);
        for (i, token) in tokens.iter().enumerate() {
            text.push_str(token);
            text.push_str(separators[(i + 1) % separators.len()]);
        }

        let parsed = split_patterns(&text).unwrap();
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(parsed.join(" "), normalized);
    }

    /// Whitespace-only input is always an error
    #[test]
    fn whitespace_only_is_error(text in "[ \t\n\r]{1,10}") {
        prop_assert!(parse_patterns(&text).is_err());
    }

    /// No patterns means nothing matches
    #[test]
    fn empty_patterns_match_nothing(files in files_strategy()) {
        let result = match_files(&files, &PatternSet::default(), MatchMode::Include);
        prop_assert!(result.files().is_empty());
    }

    /// Output keeps the input order
    #[test]
    fn output_is_subsequence(files in files_strategy(), patterns in patterns_strategy()) {
        let result = match_files(&files, &patterns, MatchMode::Include);
        prop_assert!(is_subsequence(result.files(), &files));
    }

    /// Matching the matched files again changes nothing
    #[test]
    fn matching_is_idempotent(files in files_strategy(), patterns in patterns_strategy()) {
        let once = match_files(&files, &patterns, MatchMode::Include);
        let twice = match_files(once.files(), &patterns, MatchMode::Include);
        prop_assert_eq!(once, twice);
    }

    /// Flag and count always agree with the file list
    #[test]
    fn flag_and_count_agree(files in files_strategy(), patterns in patterns_strategy()) {
        let result = match_files(&files, &patterns, MatchMode::Include);
        prop_assert_eq!(result.count(), result.files().len());
        prop_assert_eq!(result.matches(), result.count() > 0);
    }

    /// Include and exclude partition the change-set
    #[test]
    fn include_and_exclude_partition(files in files_strategy(), patterns in patterns_strategy()) {
        let included = match_files(&files, &patterns, MatchMode::Include);
        let excluded = match_files(&files, &patterns, MatchMode::Exclude);
        prop_assert_eq!(included.count() + excluded.count(), files.len());
    }

    /// An extension glob matches that extension at any depth
    #[test]
    fn extension_glob_matches_any_depth(path in path_strategy()) {
        let ext = path.rsplit('.').next().unwrap().to_string();
        let patterns = parse_patterns(&format!("*.{ext}")).unwrap();
        prop_assert!(patterns.matches_any(&path));
    }
}
