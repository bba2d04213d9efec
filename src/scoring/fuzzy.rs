// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subsequence matching: the last-resort tier.
//!
//! When a term doesn't appear anywhere as a substring, we check whether its
//! characters show up in the title in order, with gaps allowed. "sched" is a
//! substring of "scheduler"; "schdlr" is only a subsequence. Runs of
//! consecutive hits are rewarded, so "sche" in "scheduler" (one run of four)
//! scores more than the same letters scattered across a long title.
//!
//! The walk is greedy and never backtracks. That makes it cheap and exact to
//! reproduce, and means transpositions like "nexsu" for "nexus" do *not* match:
//! after consuming "nex", the `s` is found at position 3, and no `u` follows.

/// Points per matched character, multiplied by the current run length.
pub const RUN_MULTIPLIER: f64 = 3.0;

/// Ceiling for the fuzzy tier. Kept below the lowest substring tier (50) so a
/// subsequence match can never outrank a real substring hit.
pub const FUZZY_SCORE_CAP: f64 = 40.0;

/// Score `term` as an ordered subsequence of `title`.
///
/// Both arguments must already be lower-cased. Returns 0.0 if any character of
/// `term` can't be found in order, otherwise the run-weighted sum capped at
/// [`FUZZY_SCORE_CAP`]. An empty term matches nothing.
///
/// # Example
///
/// ```
/// use nexus_search::fuzzy_subsequence_score;
///
/// // "arc" is one run of 3: 3 + 6 + 9
/// assert_eq!(fuzzy_subsequence_score("arc", "architecture"), 18.0);
/// // transposed tail: the 'u' never appears after the 's'
/// assert_eq!(fuzzy_subsequence_score("nexsu", "nexus"), 0.0);
/// ```
pub fn fuzzy_subsequence_score(term: &str, title: &str) -> f64 {
    let needle: Vec<char> = term.chars().collect();
    if needle.is_empty() {
        return 0.0;
    }

    let mut matched = 0usize;
    let mut run = 0u32;
    let mut score = 0.0;

    for c in title.chars() {
        if matched == needle.len() {
            break;
        }
        if c == needle[matched] {
            matched += 1;
            run += 1;
            score += RUN_MULTIPLIER * f64::from(run);
        } else {
            run = 0;
        }
    }

    if matched == needle.len() {
        score.min(FUZZY_SCORE_CAP)
    } else {
        0.0
    }
}
