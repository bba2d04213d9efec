// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{Category, Entry, EntryInput};

/// Create an entry literal with default fields.
pub fn make_input(title: &str, category: Category) -> EntryInput {
    make_input_with(title, category, &format!("About {}", title), &[])
}

/// Create an entry literal with a description and extra keywords.
pub fn make_input_with(
    title: &str,
    category: Category,
    description: &str,
    keywords: &[&str],
) -> EntryInput {
    EntryInput {
        title: title.to_string(),
        destination: format!("/docs/{}", title.to_lowercase().replace(' ', "-")),
        group_name: "Docs".to_string(),
        category,
        icon: String::new(),
        description: description.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Create a validated entry. Panics on an empty title.
pub fn make_entry(title: &str, category: Category) -> Entry {
    Entry::new(make_input(title, category), 0).expect("test entry must be valid")
}

/// Create a validated entry with a description and keywords.
pub fn make_entry_with(
    title: &str,
    category: Category,
    description: &str,
    keywords: &[&str],
) -> Entry {
    Entry::new(make_input_with(title, category, description, keywords), 0)
        .expect("test entry must be valid")
}
