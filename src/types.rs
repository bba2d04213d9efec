// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search index.
//!
//! An `EntryInput` is what content authors write: a literal in a manifest or
//! a struct in code. An `Entry` is what the engine searches: the same fields
//! plus a precomputed, lower-cased corpus. Once built, an entry never changes,
//! so the lower-casing work happens exactly once per process.
//!
//! # Invariants
//!
//! - **Entry**: `title` is non-empty after trimming.
//! - **Entry**: `corpus ⊇ lower(title) ∧ corpus ⊇ lower(group_name) ∧ corpus ⊇ lower(description)`
//!   (substring containment). Corpus substring matching relies on it.
//!
//! Construction goes through `Entry::new`, which checks the first and
//! establishes the second.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::util::normalize::normalize;

// =============================================================================
// CATEGORY
// =============================================================================

/// What kind of thing an entry points at.
///
/// `Page` entries get a ranking bonus so that top-level pages float above the
/// sections and API references they contain. The other variants only matter
/// for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Section,
    Api,
    Concept,
    Type,
    Code,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Page,
        Category::Section,
        Category::Api,
        Category::Concept,
        Category::Type,
        Category::Code,
    ];

    /// Short human label used by front ends.
    pub fn label(self) -> &'static str {
        match self {
            Category::Page => "Pages",
            Category::Section => "Sections",
            Category::Api => "API",
            Category::Concept => "Concepts",
            Category::Type => "Types",
            Category::Code => "Code",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Page => "page",
            Category::Section => "section",
            Category::Api => "api",
            Category::Concept => "concept",
            Category::Type => "type",
            Category::Code => "code",
        };
        f.write_str(name)
    }
}

// =============================================================================
// ENTRY
// =============================================================================

/// The literal form of an entry, as it appears in a manifest.
///
/// `icon`, `description` and `keywords` are optional in JSON. `destination`
/// also accepts `href` for manifests exported from the site's link tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInput {
    pub title: String,
    #[serde(alias = "href")]
    pub destination: String,
    pub group_name: String,
    pub category: Category,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// Extra search terms that should hit this entry without being displayed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// One searchable unit: a page, a section, an API reference...
///
/// Fields are private so the corpus can't drift from the fields it was built
/// from. Use the accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    title: String,
    destination: String,
    group_name: String,
    category: Category,
    icon: String,
    description: String,
    #[serde(skip)]
    title_lower: String,
    #[serde(skip)]
    description_lower: String,
    #[serde(skip)]
    corpus: String,
}

impl Entry {
    /// Validate an input literal and precompute its search text.
    ///
    /// `position` is only used to make the error point at the bad literal.
    pub fn new(input: EntryInput, position: usize) -> Result<Self, IndexError> {
        if input.title.trim().is_empty() {
            return Err(IndexError::EmptyTitle { position });
        }
        if input.destination.trim().is_empty() {
            return Err(IndexError::EmptyDestination {
                position,
                title: input.title,
            });
        }

        let title_lower = normalize(&input.title);
        let description_lower = normalize(&input.description);

        let mut corpus = String::with_capacity(
            title_lower.len() + input.group_name.len() + description_lower.len() + 16,
        );
        corpus.push_str(&title_lower);
        corpus.push(' ');
        corpus.push_str(&normalize(&input.group_name));
        corpus.push(' ');
        corpus.push_str(&description_lower);
        for keyword in &input.keywords {
            corpus.push(' ');
            corpus.push_str(&normalize(keyword));
        }

        Ok(Entry {
            title: input.title,
            destination: input.destination,
            group_name: input.group_name,
            category: input.category,
            icon: input.icon,
            description: input.description,
            title_lower,
            description_lower,
            corpus,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Opaque navigation target. The engine never looks inside it.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lower-cased title, computed at construction.
    pub fn title_lower(&self) -> &str {
        &self.title_lower
    }

    /// Lower-cased description, computed at construction.
    pub fn description_lower(&self) -> &str {
        &self.description_lower
    }

    /// Lower-cased title + group + description + keywords.
    pub fn corpus(&self) -> &str {
        &self.corpus
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// An entry paired with its relevance for one query.
///
/// Lives for one `search` call. `position` is the entry's index in the
/// `Index`, which doubles as the tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredResult<'a> {
    pub entry: &'a Entry,
    pub score: f64,
    pub position: usize,
}

/// One run of highlighted or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment {
            text: text.into(),
            matched: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Segment {
            text: text.into(),
            matched: true,
        }
    }
}
