// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored entries get sorted.
//!
//! Higher score first. Equal scores fall back to index position, so the
//! curated order of the index decides ties and the output never depends on
//! sort-algorithm internals.

use crate::types::ScoredResult;
use std::cmp::Ordering;

/// Compare two scored results for ranking.
///
/// Sort order:
/// 1. **Score**, descending
/// 2. **Position** in the index, ascending
///
/// Scores are finite by construction, but `total_cmp` keeps this a total
/// order even if a NaN ever slipped through.
pub fn compare_results(a: &ScoredResult<'_>, b: &ScoredResult<'_>) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}
