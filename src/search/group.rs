// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grouping ranked results for display.

use crate::types::{Category, Entry};

/// Group results by category without disturbing rank.
///
/// Groups appear in the order their first member was ranked, and members keep
/// their relative order, so the best hit is always first in the first group.
pub fn group_by_category<'a>(results: &[&'a Entry]) -> Vec<(Category, Vec<&'a Entry>)> {
    group_by_category_with(results, |entry| entry.category())
}

/// [`group_by_category`] for results that carry more than the entry, such
/// as `(entry, score)` pairs.
pub fn group_by_category_with<T, F>(results: &[T], category_of: F) -> Vec<(Category, Vec<T>)>
where
    T: Copy,
    F: Fn(&T) -> Category,
{
    let mut groups: Vec<(Category, Vec<T>)> = Vec::new();
    for item in results {
        let category = category_of(item);
        match groups.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, members)) => members.push(*item),
            None => groups.push((category, vec![*item])),
        }
    }
    groups
}
