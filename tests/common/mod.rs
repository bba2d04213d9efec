//! Shared test utilities and fixtures.

#![allow(dead_code)]

use nexus_search::{load_manifest, Entry, Index};
use std::sync::LazyLock;

// Re-export canonical test utilities from nexus_search::testing
pub use nexus_search::testing::{make_entry, make_entry_with, make_input};

/// Sample site index shipped with the crate.
pub const FIXTURE_MANIFEST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/nexus.json");

/// Parsed once per test binary.
static FIXTURE: LazyLock<Index> = LazyLock::new(|| {
    load_manifest(FIXTURE_MANIFEST).expect("fixture manifest must load")
});

pub fn fixture() -> &'static Index {
    &FIXTURE
}

/// Titles of a result list, for readable assertions.
pub fn titles<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
    entries.iter().map(|entry| entry.title()).collect()
}

/// Look up a fixture entry by title. Panics if missing.
pub fn fixture_entry(title: &str) -> &'static Entry {
    fixture()
        .iter()
        .find(|entry| entry.title() == title)
        .unwrap_or_else(|| panic!("fixture has no entry titled {:?}", title))
}
