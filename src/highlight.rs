// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting: split a field into plain and matched runs.
//!
//! The terms come from `parse_query`, the same tokenizer the scorer uses, so a
//! highlighted span is always something the scorer could have matched on.
//! Terms are regex-escaped before they go into the alternation; a query like
//! `(foo` or `a+b` is literal text here, never a pattern.
//!
//! Longer terms go first in the alternation. The regex engine is
//! leftmost-first, so for the query `arch architecture` this highlights all
//! of "Architecture" instead of stopping after "Arch".
//!
//! Matching runs on `normalize(text)`, the exact lowering the scorer sees,
//! never on the regex engine's own case folding. The two disagree on
//! characters like `İ` (lowers to two chars) and `Σ` (folds to `ς` but
//! lowers to `σ`). Spans found in the lowered text are mapped back onto
//! whole characters of the original.

use regex::Regex;

use crate::search::utils::distinct_terms;
use crate::types::Segment;
use crate::util::normalize::normalize;

/// A compiled highlighter for one query.
///
/// Front ends highlight several fields per result and several results per
/// query. Build this once per query and reuse it.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let mut terms = distinct_terms(query);
        if terms.is_empty() {
            return Self { pattern: None };
        }

        // Stable sort: equal-length terms keep query order.
        terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        let alternation = terms
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = match Regex::new(&alternation) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                tracing::warn!(error = %err, terms = terms.len(), "highlight pattern rejected");
                None
            }
        };
        Self { pattern }
    }

    /// True when there is nothing to highlight (empty query or rejected pattern).
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// Split `text` into alternating plain/matched segments.
    ///
    /// Concatenating the segment texts gives back `text`. Empty segments are
    /// never produced, except for the single plain segment returned when there
    /// is nothing to highlight.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(text)];
        };

        let lowered = normalize(text);
        let ends = lowered_char_ends(text);
        if ends.last().map_or(0, |&(lower, _)| lower) != lowered.len() {
            tracing::warn!(len = text.len(), "lowered text does not line up, not highlighting");
            return vec![Segment::plain(text)];
        }

        let mut segments = Vec::new();
        let mut last = 0;
        for found in pattern.find_iter(&lowered) {
            let (start, end) = original_span(&ends, found.start(), found.end());
            // two matches inside one expanded char collapse into the first
            let start = start.max(last);
            if end <= start {
                continue;
            }
            if start > last {
                segments.push(Segment::plain(&text[last..start]));
            }
            segments.push(Segment::matched(&text[start..end]));
            last = end;
        }
        if last < text.len() {
            segments.push(Segment::plain(&text[last..]));
        }
        segments
    }
}

/// For each char of `text`: (end offset in the lowered text, end offset in
/// `text`). Lowering one char at a time yields the same byte lengths as
/// lowering the whole string; only final sigma is context-sensitive, and
/// `σ`/`ς` have the same width.
fn lowered_char_ends(text: &str) -> Vec<(usize, usize)> {
    let mut lower = 0;
    text.char_indices()
        .map(|(offset, c)| {
            lower += c.to_lowercase().map(char::len_utf8).sum::<usize>();
            (lower, offset + c.len_utf8())
        })
        .collect()
}

/// Widen a non-empty lowered span `[start, end)` to whole original chars.
fn original_span(ends: &[(usize, usize)], start: usize, end: usize) -> (usize, usize) {
    let first = ends.partition_point(|&(lower, _)| lower <= start);
    let last = ends.partition_point(|&(lower, _)| lower < end);
    let from = if first == 0 { 0 } else { ends[first - 1].1 };
    let to = ends.get(last).map_or(from, |&(_, original)| original);
    (from, to)
}

/// Highlight every occurrence of the query's terms in `text`.
///
/// An empty or whitespace-only query gives back one unmatched segment holding
/// all of `text`.
///
/// # Example
///
/// ```
/// use nexus_search::{highlight, Segment};
///
/// let segments = highlight("Layered kernel design", "KERNEL");
/// assert_eq!(segments, vec![
///     Segment::plain("Layered "),
///     Segment::matched("kernel"),
///     Segment::plain(" design"),
/// ]);
/// ```
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    Highlighter::new(query).segments(text)
}
