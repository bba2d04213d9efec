// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index: a fixed, ordered list of entries.
//!
//! There is nothing clever here on purpose. Order matters (it breaks score
//! ties), nothing mutates after construction, and the only way in is through
//! validated `Entry` values. An `Index` is `Send + Sync` and can be shared
//! freely behind an `Arc` or a `static`.

use crate::error::IndexError;
use crate::types::{Category, Entry, EntryInput};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Index {
    entries: Vec<Entry>,
}

impl Index {
    /// Validate literals and build the index, preserving their order.
    ///
    /// Fails on the first invalid literal. That's a content bug, not a
    /// runtime condition: callers should refuse to start.
    pub fn build<I>(inputs: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = EntryInput>,
    {
        let entries = inputs
            .into_iter()
            .enumerate()
            .map(|(position, input)| Entry::new(input, position))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(entries = entries.len(), "index built");
        Ok(Self { entries })
    }

    /// Wrap entries that were already validated.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Page entries in index order: the default list for an empty query.
    pub fn pages(&self) -> Vec<&Entry> {
        self.in_category(Category::Page)
    }

    /// Entries of one category, in index order.
    pub fn in_category(&self, category: Category) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.category() == category)
            .collect()
    }

    /// Number of entries in each category, in `Category::ALL` order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category() == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
