// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Any text, any query: segments must rebuild the text exactly. Queries full
//! of regex metacharacters are the interesting inputs here.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nexus_search::highlight;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    query: String,
}

fuzz_target!(|input: Input| {
    let segments = highlight(&input.text, &input.query);
    let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(joined, input.text);
});
