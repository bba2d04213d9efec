// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for case-insensitive matching.
//!
//! Everything the engine compares goes through `normalize` first, on both
//! sides: entries at construction time, query terms at search time. If the
//! two sides ever disagree, matches silently disappear.

/// Lower-case a string for matching.
///
/// Whitespace is kept as-is so that `normalize(title)` stays a literal
/// substring of the corpus built from it.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Is this character a word boundary inside a title?
///
/// Whitespace and ASCII punctuation both split words, so "sys_read",
/// "page-table" and "vm::map" each contain two words.
#[inline]
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

/// Split text into its non-empty words.
pub fn words(value: &str) -> impl Iterator<Item = &str> {
    value.split(is_word_separator).filter(|w| !w.is_empty())
}
