//! Inputs that should never break the query processor.

use super::common::{fixture, make_entry, titles};
use nexus_search::{search, search_scored, search_with, Category, Index, SearchOptions, MAX_RESULTS};

#[test]
fn test_whitespace_only_queries_return_fallback() {
    let index = fixture();
    let fallback = index.pages();
    for query in ["", " ", "\t", "\n\n", " \t \r\n "] {
        assert_eq!(search(query, index, &fallback), fallback, "query {:?}", query);
    }
}

#[test]
fn test_punctuation_and_symbols() {
    let index = fixture();
    for query in ["(", ")", "[", "*", "+?", "\\", "$^", "|", "...", "#", "🦀", "\u{0}", "ß", "İ"] {
        let results = search(query, index, &[]);
        assert!(results.len() <= MAX_RESULTS, "query {:?}", query);
    }
}

#[test]
fn test_underscore_term_matches_api_names() {
    let results = search("sys_", fixture(), &[]);
    let found = titles(&results);
    for name in ["sys_spawn", "sys_yield", "sys_map", "sys_send", "sys_recv"] {
        assert!(found.contains(&name), "missing {}", name);
    }
}

#[test]
fn test_very_long_query() {
    let query = "kernel ".repeat(500);
    let results = search(&query, fixture(), &[]);
    assert!(!results.is_empty());
    assert!(results.len() <= MAX_RESULTS);
}

#[test]
fn test_empty_index() {
    let index = Index::default();
    assert!(search("anything", &index, &[]).is_empty());
    assert!(search("", &index, &[]).is_empty());
}

#[test]
fn test_limit_is_capped_at_twenty() {
    let entries = (0..50)
        .map(|i| make_entry(&format!("Port {}", i), Category::Section))
        .collect();
    let index = Index::from_entries(entries);

    let results = search_scored("port", &index);
    assert_eq!(results.len(), MAX_RESULTS);
    let positions: Vec<usize> = results.iter().map(|r| r.position).collect();
    assert_eq!(positions, (0..MAX_RESULTS).collect::<Vec<_>>());
}

#[test]
fn test_custom_limit_and_threshold() {
    let index = fixture();
    let options = SearchOptions::with_limit(3);
    assert!(search_with("s", index, &[], &options).len() <= 3);

    let strict = SearchOptions {
        min_score: 199.0,
        ..SearchOptions::default()
    };
    let results = search_with("scheduler", index, &[], &strict);
    assert_eq!(titles(&results), vec!["Scheduler"]);
}
