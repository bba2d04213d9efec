// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query processor.
//!
//! Every entry gets scored on every call. Indexes here are a few hundred
//! curated entries at most, so a linear scan with no caching is both the
//! simplest and the fastest thing that works.

use crate::index::Index;
use crate::scoring::ranking::compare_results;
use crate::scoring::score_terms;
use crate::search::utils::parse_query;
use crate::types::{Entry, ScoredResult};

/// Entries must score strictly above this to be returned.
pub const MIN_SCORE: f64 = 15.0;

/// Maximum number of results for a non-empty query.
pub const MAX_RESULTS: usize = 20;

/// Knobs for the query processor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Exclusive lower bound on score.
    pub min_score: f64,
    /// Truncation limit.
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_score: MIN_SCORE,
            max_results: MAX_RESULTS,
        }
    }
}

impl SearchOptions {
    /// Default threshold with a custom limit.
    pub fn with_limit(max_results: usize) -> Self {
        Self {
            max_results,
            ..Self::default()
        }
    }
}

/// Search the index, returning `fallback` for an empty query.
///
/// At most 20 results, each scoring above 15, best first, ties in index
/// order. Never fails: queries of pure whitespace or punctuation just produce
/// the fallback or an empty list.
///
/// # Example
///
/// ```
/// use nexus_search::{search, testing::make_entry, Category, Index};
///
/// let index = Index::from_entries(vec![
///     make_entry("Architecture", Category::Page),
///     make_entry("Boot Sequence", Category::Section),
/// ]);
/// let fallback = index.pages();
///
/// assert_eq!(search("", &index, &fallback), fallback);
/// assert_eq!(search("boot", &index, &fallback)[0].title(), "Boot Sequence");
/// ```
pub fn search<'a>(query: &str, index: &'a Index, fallback: &[&'a Entry]) -> Vec<&'a Entry> {
    search_with(query, index, fallback, &SearchOptions::default())
}

/// [`search`] with caller-supplied threshold and limit.
pub fn search_with<'a>(
    query: &str,
    index: &'a Index,
    fallback: &[&'a Entry],
    options: &SearchOptions,
) -> Vec<&'a Entry> {
    if query.trim().is_empty() {
        return fallback.to_vec();
    }
    rank(query, index, options)
        .into_iter()
        .map(|result| result.entry)
        .collect()
}

/// Ranked results with their scores, using default options.
///
/// An empty query yields an empty list here: there is nothing to score.
pub fn search_scored<'a>(query: &str, index: &'a Index) -> Vec<ScoredResult<'a>> {
    rank(query, index, &SearchOptions::default())
}

/// Ranked results with their scores and custom options.
pub fn search_scored_with<'a>(
    query: &str,
    index: &'a Index,
    options: &SearchOptions,
) -> Vec<ScoredResult<'a>> {
    rank(query, index, options)
}

fn rank<'a>(query: &str, index: &'a Index, options: &SearchOptions) -> Vec<ScoredResult<'a>> {
    let terms = parse_query(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredResult<'a>> = index
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let score = score_terms(&terms, entry);
            (score > options.min_score).then_some(ScoredResult {
                entry,
                score,
                position,
            })
        })
        .collect();

    let matched = results.len();
    results.sort_by(compare_results);
    results.truncate(options.max_results);

    tracing::debug!(
        terms = terms.len(),
        matched,
        returned = results.len(),
        "search complete"
    );

    results
}
