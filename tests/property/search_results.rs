//! Query processor properties: bounded, filtered, sorted, deterministic.

use super::common::fixture;
use nexus_search::{search, search_scored, MAX_RESULTS, MIN_SCORE};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_results_bounded_and_filtered(query in "[a-z_ ]{1,12}") {
        let results = search_scored(&query, fixture());
        prop_assert!(results.len() <= MAX_RESULTS);
        for result in &results {
            prop_assert!(result.score > MIN_SCORE);
            prop_assert!(std::ptr::eq(
                result.entry,
                fixture().get(result.position).unwrap()
            ));
        }
    }

    #[test]
    fn prop_results_sorted(query in "[a-z ]{1,12}") {
        let results = search_scored(&query, fixture());
        for pair in results.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].position < pair[1].position)
            );
        }
    }

    #[test]
    fn prop_search_deterministic(query in "\\PC{0,12}") {
        let index = fixture();
        let fallback = index.pages();
        prop_assert_eq!(search(&query, index, &fallback), search(&query, index, &fallback));
    }

    #[test]
    fn prop_empty_query_identity(query in "[ \t\r\n]{0,6}") {
        let index = fixture();
        let fallback = index.pages();
        prop_assert_eq!(search(&query, index, &fallback), fallback);
    }

    #[test]
    fn prop_search_matches_scored(query in "[a-z ]{1,12}") {
        prop_assume!(!query.trim().is_empty());
        let plain: Vec<_> = search(&query, fixture(), &[])
            .into_iter()
            .map(|e| e.title())
            .collect();
        let scored: Vec<_> = search_scored(&query, fixture())
            .into_iter()
            .map(|r| r.entry.title())
            .collect();
        prop_assert_eq!(plain, scored);
    }
}
