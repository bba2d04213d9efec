// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search and highlighting.
//!
//! Scoring and highlighting must agree on what a term is, so both call
//! `parse_query` and nothing else.

use crate::util::normalize::normalize;

/// Parse a query string into lower-cased, whitespace-separated terms.
///
/// # Example
///
/// ```
/// use nexus_search::parse_query;
///
/// assert_eq!(parse_query("  Page   TABLE "), vec!["page", "table"]);
/// assert!(parse_query(" \t ").is_empty());
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    query.split_whitespace().map(normalize).collect()
}

/// Same as [`parse_query`] with duplicates removed, first occurrence wins.
pub fn distinct_terms(query: &str) -> Vec<String> {
    let mut terms = parse_query(query);
    let mut seen = std::collections::HashSet::with_capacity(terms.len());
    terms.retain(|term| seen.insert(term.clone()));
    terms
}
