// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary bytes go in as a query. The processor must not panic, must stay
//! within its limit and threshold, and must keep results in rank order.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nexus_search::{load_manifest, search, search_scored, Index, MAX_RESULTS, MIN_SCORE};

fuzz_target!(|query: &[u8]| {
    // fuzz runs from fuzz/, so the manifest may be one level up
    static INDEX: std::sync::OnceLock<Index> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(|| {
        ["data/nexus.json", "../data/nexus.json"]
            .iter()
            .find_map(|p| load_manifest(p).ok())
            .expect("Failed to load sample manifest from any path")
    });

    let query: String = String::from_utf8_lossy(query).chars().take(256).collect();
    let query = query.as_str();

    let fallback = index.pages();
    let results = search(query, index, &fallback);
    if query.trim().is_empty() {
        assert_eq!(results, fallback);
        return;
    }
    assert!(results.len() <= MAX_RESULTS);

    let scored = search_scored(query, index);
    for pair in scored.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].position < pair[1].position),
            "results out of order"
        );
    }
    assert!(scored.iter().all(|r| r.score > MIN_SCORE && r.score.is_finite()));
});
