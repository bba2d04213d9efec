//! Highlighting properties.
//!
//! - Concatenated segments always rebuild the input
//! - A segment is matched iff it is an occurrence of a query term

use nexus_search::{highlight, parse_query};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_segments_rebuild_text(text in "\\PC{0,40}", query in "\\PC{0,12}") {
        let segments = highlight(&text, &query);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn prop_matched_iff_term(text in "[a-zA-Z .()*+]{0,40}", query in "[a-zA-Z.()*+ ]{0,10}") {
        let terms = parse_query(&query);
        let segments = highlight(&text, &query);

        for segment in &segments {
            let lowered = segment.text.to_lowercase();
            if segment.matched {
                prop_assert!(terms.contains(&lowered), "{:?} not a term of {:?}", segment.text, query);
            } else {
                for term in &terms {
                    prop_assert!(!lowered.contains(term.as_str()), "{:?} left unmarked in {:?}", term, segment.text);
                }
            }
        }
    }

    #[test]
    fn prop_no_empty_segments(text in "[a-z ]{1,30}", query in "[a-z]{1,4}( [a-z]{1,4})?") {
        let segments = highlight(&text, &query);
        prop_assert!(segments.iter().all(|s| !s.text.is_empty()));
    }
}
