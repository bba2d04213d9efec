// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A term is scored against an entry by the strongest tier it reaches. The
//! tier values are spaced so that every title tier beats every non-title
//! tier, and every substring tier beats the capped fuzzy fallback:
//!
//! ```text
//! Exact(200) > Prefix(150) > WordPrefix(120) > Title(100)
//!            > Description(70) > Corpus(50) > Fuzzy(≤40)
//! ```
//!
//! Multi-term queries are conjunctive. One term that hits nothing zeroes the
//! whole entry, otherwise the entry gets the mean of its term scores plus a
//! flat bonus if it's a top-level page.
//!
//! # Constants (DO NOT REORDER)
//!
//! | Tier        | Score | Matched against                   |
//! |-------------|-------|-----------------------------------|
//! | Exact       | 200   | whole title                       |
//! | Prefix      | 150   | start of title                    |
//! | WordPrefix  | 120   | start of any title word           |
//! | Title       | 100   | anywhere in title                 |
//! | Description | 70    | anywhere in description           |
//! | Corpus      | 50    | title + group + description + keywords |
//! | Fuzzy       | ≤40   | ordered subsequence of title      |
//!
//! `match_tier` returns the first tier that matches walking down this table,
//! which is also the maximum because the table is strictly decreasing.
//! `test_tier_scores_strictly_decrease` guards that.

use crate::scoring::fuzzy::fuzzy_subsequence_score;
use crate::search::utils::parse_query;
use crate::types::{Category, Entry};
use crate::util::normalize::words;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Lower-cased title equals the term.
pub const EXACT_TITLE_SCORE: f64 = 200.0;

/// Title starts with the term.
pub const TITLE_PREFIX_SCORE: f64 = 150.0;

/// Some word of the title starts with the term.
pub const TITLE_WORD_PREFIX_SCORE: f64 = 120.0;

/// Term appears anywhere in the title.
pub const TITLE_SUBSTRING_SCORE: f64 = 100.0;

/// Term appears in the description.
pub const DESCRIPTION_SUBSTRING_SCORE: f64 = 70.0;

/// Term appears in the corpus (group name, keywords, ...).
pub const CORPUS_SUBSTRING_SCORE: f64 = 50.0;

/// Flat bonus for `Category::Page` entries, applied after averaging.
pub const PAGE_BONUS: f64 = 30.0;

/// Which rung of the ladder a term reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    Exact,
    Prefix,
    WordPrefix,
    Title,
    Description,
    Corpus,
}

impl MatchTier {
    /// All substring tiers, strongest first.
    pub const LADDER: [MatchTier; 6] = [
        MatchTier::Exact,
        MatchTier::Prefix,
        MatchTier::WordPrefix,
        MatchTier::Title,
        MatchTier::Description,
        MatchTier::Corpus,
    ];

    pub fn score(self) -> f64 {
        match self {
            MatchTier::Exact => EXACT_TITLE_SCORE,
            MatchTier::Prefix => TITLE_PREFIX_SCORE,
            MatchTier::WordPrefix => TITLE_WORD_PREFIX_SCORE,
            MatchTier::Title => TITLE_SUBSTRING_SCORE,
            MatchTier::Description => DESCRIPTION_SUBSTRING_SCORE,
            MatchTier::Corpus => CORPUS_SUBSTRING_SCORE,
        }
    }

    fn matches(self, term: &str, entry: &Entry) -> bool {
        let title = entry.title_lower();
        match self {
            MatchTier::Exact => title == term,
            MatchTier::Prefix => title.starts_with(term),
            MatchTier::WordPrefix => words(title).any(|word| word.starts_with(term)),
            MatchTier::Title => title.contains(term),
            MatchTier::Description => entry.description_lower().contains(term),
            MatchTier::Corpus => entry.corpus().contains(term),
        }
    }
}

/// Strongest substring tier that `term` reaches, if any.
///
/// `term` must be lower-cased and non-empty.
pub fn match_tier(term: &str, entry: &Entry) -> Option<MatchTier> {
    MatchTier::LADDER
        .into_iter()
        .find(|tier| tier.matches(term, entry))
}

/// Best score for one lower-cased term against one entry.
///
/// The fuzzy fallback only runs when no substring tier matched.
pub fn term_score(term: &str, entry: &Entry) -> f64 {
    if term.is_empty() {
        return 0.0;
    }
    match match_tier(term, entry) {
        Some(tier) => tier.score(),
        None => fuzzy_subsequence_score(term, entry.title_lower()),
    }
}

/// Score pre-tokenized terms against an entry.
///
/// Returns 0.0 for an empty term list or when any term misses entirely.
pub fn score_terms<S: AsRef<str>>(terms: &[S], entry: &Entry) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for term in terms {
        let best = term_score(term.as_ref(), entry);
        if best <= 0.0 {
            return 0.0;
        }
        total += best;
    }

    let mean = total / terms.len() as f64;
    if entry.category() == Category::Page {
        mean + PAGE_BONUS
    } else {
        mean
    }
}

/// Relevance of `entry` for a raw query string.
///
/// Case-insensitive, pure, and total: any input produces a finite score
/// `>= 0`. An empty or whitespace-only query scores 0.0; the query processor
/// short-circuits those before scoring anyway.
///
/// # Example
///
/// ```
/// use nexus_search::{score, Category, Entry, EntryInput};
///
/// let entry = Entry::new(EntryInput {
///     title: "Architecture".into(),
///     destination: "/docs/architecture".into(),
///     group_name: "Docs".into(),
///     category: Category::Page,
///     icon: String::new(),
///     description: "Layered kernel design".into(),
///     keywords: vec![],
/// }, 0).unwrap();
///
/// // title prefix (150) + page bonus (30)
/// assert_eq!(score("arch", &entry), 180.0);
/// assert_eq!(score("ARCH", &entry), score("arch", &entry));
/// ```
pub fn score(query: &str, entry: &Entry) -> f64 {
    score_terms(&parse_query(query), entry)
}
