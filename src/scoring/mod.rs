// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Each query term is scored against an entry through a ladder of match tiers
//! (exact title, title prefix, word prefix, substrings, then a fuzzy
//! subsequence fallback). Per-term scores are averaged, never summed, so a
//! three-word query doesn't automatically outrank a one-word query.

mod tiers;
pub mod fuzzy;
pub mod ranking;

pub use tiers::*;
