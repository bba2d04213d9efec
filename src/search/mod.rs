// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query processing: from a raw string to a ranked list.
//!
//! Tokenize, score every entry, drop the weak ones, sort, truncate. An empty
//! query skips all of that and hands back the caller's fallback list.

mod group;
mod processor;
pub mod utils;

pub use group::*;
pub use processor::*;
