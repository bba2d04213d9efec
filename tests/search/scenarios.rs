//! The worked examples: the behaviors front ends rely on.

use super::common::{fixture, fixture_entry, make_entry_with, titles};
use nexus_search::{score, search, search_scored, Category, Index};

#[test]
fn test_title_prefix_beats_description_match() {
    let index = Index::from_entries(vec![
        make_entry_with("Memory Subsystem", Category::Section, "How the architecture maps pages", &[]),
        make_entry_with("Architecture", Category::Page, "Layered kernel design", &[]),
    ]);

    let results = search_scored("arch", &index);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].entry.title(), "Architecture");
    assert_eq!(results[0].score, 180.0); // prefix 150 + page bonus 30
    assert_eq!(results[1].entry.title(), "Memory Subsystem");
    assert_eq!(results[1].score, 70.0);
}

#[test]
fn test_empty_query_returns_fallback_unscored() {
    let index = fixture();
    let fallback = index.pages();
    assert_eq!(search("", index, &fallback), fallback);

    // a curated fallback is returned as-is, not re-sorted
    let curated = vec![fixture_entry("Blog"), fixture_entry("NEXUS")];
    assert_eq!(search("", index, &curated), curated);
}

#[test]
fn test_one_missing_term_excludes_entry() {
    let entry = make_entry_with("GPU", Category::Section, "Graphics pipeline", &["rendering"]);
    assert!(score("gpu", &entry) > 0.0);
    assert_eq!(score("gpu driver", &entry), 0.0);
}

#[test]
fn test_gpu_driver_on_fixture() {
    // gpu is a keyword (corpus, 50), driver a word prefix of "Drivers" (120)
    let results = search_scored("gpu driver", fixture());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.title(), "Device Drivers");
    assert_eq!(results[0].score, 85.0);
}

#[test]
fn test_transposed_typo_is_not_tolerated() {
    let nexus = fixture_entry("NEXUS");
    assert_eq!(score("nexsu", nexus), 0.0);

    let results = search("nexsu", fixture(), &[]);
    assert!(!titles(&results).contains(&"NEXUS"));
}

#[test]
fn test_exact_title_on_fixture() {
    let results = search_scored("nexus", fixture());
    assert_eq!(results[0].entry.title(), "NEXUS");
    assert_eq!(results[0].score, 230.0);
}

#[test]
fn test_fuzzy_subsequence_finds_abbreviation() {
    // "schdlr" is nowhere as a substring, only as a subsequence of "scheduler"
    let results = search_scored("schdlr", fixture());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.title(), "Scheduler");
    assert_eq!(results[0].score, 27.0);
}

#[test]
fn test_destination_is_passed_through() {
    let results = search("sys_spawn", fixture(), &[]);
    assert_eq!(results[0].destination(), "/docs/api#sys_spawn");
}
