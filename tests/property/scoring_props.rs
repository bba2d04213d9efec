//! Scoring properties.
//!
//! - Case never changes a score
//! - One unmatched term zeroes the entry
//! - Exact > prefix > substring > fuzzy for a single entry
//! - The fuzzy tier agrees with a plain subsequence oracle

use super::common::{fixture, make_entry_with};
use nexus_search::{fuzzy_subsequence_score, score, Category};
use proptest::prelude::*;

/// Oracle: is `needle` an ordered subsequence of `haystack`?
fn oracle_is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_ ]{0,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_case_insensitive(query in query_strategy()) {
        for entry in fixture().iter() {
            prop_assert_eq!(
                score(&query.to_uppercase(), entry),
                score(&query.to_lowercase(), entry)
            );
        }
    }

    /// Digits never appear in fixture titles, so "<word>9q9" can't even
    /// fuzzy-match, and must drag every entry to zero.
    #[test]
    fn prop_conjunctive(query in "[a-z]{1,8}") {
        let impossible = format!("{} 9q9", query);
        for entry in fixture().iter() {
            prop_assert_eq!(score(&impossible, entry), 0.0);
        }
    }

    #[test]
    fn prop_scores_bounded(query in query_strategy()) {
        for entry in fixture().iter() {
            let s = score(&query, entry);
            prop_assert!(s.is_finite());
            prop_assert!((0.0..=230.0).contains(&s), "score {} out of range", s);
        }
    }

    #[test]
    fn prop_tier_ordering(title in "[a-z]{4,10}") {
        let entry = make_entry_with(&title, Category::Section, "", &[]);
        let chars: Vec<char> = title.chars().collect();

        let exact = score(&title, &entry);
        let prefix: String = chars[..chars.len() - 1].iter().collect();
        let inner: String = chars[1..chars.len() - 1].iter().collect();
        let gapped: String = [chars[0], chars[chars.len() - 1]].iter().collect();

        prop_assert!(exact > score(&prefix, &entry));
        if !title.starts_with(&inner) {
            prop_assert!(score(&prefix, &entry) > score(&inner, &entry));
        }
        if !entry.corpus().contains(&gapped) {
            let fuzzy = score(&gapped, &entry);
            prop_assert!(fuzzy > 0.0);
            prop_assert!(score(&inner, &entry) > fuzzy);
        }
    }

    #[test]
    fn prop_fuzzy_matches_oracle(term in "[a-e]{1,6}", title in "[a-e ]{0,20}") {
        let fuzzy = fuzzy_subsequence_score(&term, &title);
        prop_assert_eq!(fuzzy > 0.0, oracle_is_subsequence(&term, &title));
        prop_assert!(fuzzy <= 40.0);
        if fuzzy > 0.0 {
            // each matched character is worth at least 3
            let floor = (3.0 * term.chars().count() as f64).min(40.0);
            prop_assert!(fuzzy >= floor);
        }
    }
}
