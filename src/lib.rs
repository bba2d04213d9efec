// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tiered fuzzy search over a small, curated documentation index.
//!
//! Built for site search: a few hundred hand-written entries (pages,
//! sections, API references, concepts), searched on every keystroke.
//! Every entry is scored on every query. At this size a linear scan with a
//! good scoring function beats any inverted index on both latency and
//! predictability.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  index/      │────▶│  search/     │
//! │ (Entry,     │     │ (Index,      │     │ (search,     │
//! │  Category)  │     │  pages)      │     │  group)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  build/     │     │  scoring/    │     │ highlight.rs │
//! │ (manifest)  │     │ (tiers,      │     │ (Segment)    │
//! │             │     │  fuzzy)      │     │              │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Scoring and highlighting share `parse_query`, so they always agree on
//! what the terms of a query are.
//!
//! # Usage
//!
//! ```
//! use nexus_search::{highlight, parse_manifest, search};
//!
//! let index = parse_manifest(r#"{"version": 1, "entries": [
//!     {"title": "Architecture", "destination": "/docs/architecture",
//!      "groupName": "Docs", "category": "page",
//!      "description": "Layered kernel design"}
//! ]}"#).unwrap();
//! let fallback = index.pages();
//!
//! let results = search("arch", &index, &fallback);
//! assert_eq!(results[0].destination(), "/docs/architecture");
//!
//! let segments = highlight(results[0].title(), "arch");
//! assert!(segments[0].matched);
//! ```

pub mod build;
pub mod error;
pub mod highlight;
mod index;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use build::{load_manifest, parse_manifest, IndexManifest, MANIFEST_VERSION};
pub use error::IndexError;
pub use highlight::{highlight, Highlighter};
pub use index::Index;
pub use scoring::fuzzy::fuzzy_subsequence_score;
pub use scoring::{
    match_tier, score, score_terms, term_score, MatchTier, CORPUS_SUBSTRING_SCORE,
    DESCRIPTION_SUBSTRING_SCORE, EXACT_TITLE_SCORE, PAGE_BONUS, TITLE_PREFIX_SCORE,
    TITLE_SUBSTRING_SCORE, TITLE_WORD_PREFIX_SCORE,
};
pub use search::utils::parse_query;
pub use search::{
    group_by_category, group_by_category_with, search, search_scored, search_scored_with,
    search_with, SearchOptions, MAX_RESULTS, MIN_SCORE,
};
pub use types::{Category, Entry, EntryInput, ScoredResult, Segment};
