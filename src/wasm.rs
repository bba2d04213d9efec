// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the site search.
//!
//! One JS-facing class, `NexusSearch`, built from the entry literals the site
//! already ships. The modal calls `search` on every input event and
//! `highlight` for each visible field; both return plain JS arrays.

use crate::highlight::Highlighter;
use crate::index::Index;
use crate::search::{search_scored_with, SearchOptions};
use crate::types::{Category, Entry, EntryInput};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Search result output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    title: &'a str,
    destination: &'a str,
    group_name: &'a str,
    category: Category,
    icon: &'a str,
    description: &'a str,
    /// `null` for fallback entries (empty query)
    score: Option<f64>,
}

impl<'a> SearchResultOutput<'a> {
    fn new(entry: &'a Entry, score: Option<f64>) -> Self {
        Self {
            title: entry.title(),
            destination: entry.destination(),
            group_name: entry.group_name(),
            category: entry.category(),
            icon: entry.icon(),
            description: entry.description(),
            score,
        }
    }
}

/// Search options passed from JavaScript.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct JsSearchOptions {
    limit: usize,
    min_score: f64,
}

impl Default for JsSearchOptions {
    fn default() -> Self {
        let defaults = SearchOptions::default();
        Self {
            limit: defaults.max_results,
            min_score: defaults.min_score,
        }
    }
}

/// WASM-accessible searcher over a fixed index.
#[wasm_bindgen]
pub struct NexusSearch {
    index: Index,
}

#[wasm_bindgen]
impl NexusSearch {
    /// Build the index from an array of entry literals.
    ///
    /// Throws if any literal is invalid (empty title, unknown category...).
    #[wasm_bindgen(constructor)]
    pub fn new(entries: JsValue) -> Result<NexusSearch, JsValue> {
        let inputs: Vec<EntryInput> = from_value(entries).map_err(|e| e.to_string())?;
        let index = Index::build(inputs).map_err(|e| e.to_string())?;
        Ok(NexusSearch { index })
    }

    /// Number of entries in the index.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Ranked results for `query`. An empty query returns the pages, unscored.
    ///
    /// `options` is optional: `{ limit?: number, minScore?: number }`.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, options: JsValue) -> Result<JsValue, JsValue> {
        let options: JsSearchOptions = if options.is_undefined() || options.is_null() {
            JsSearchOptions::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };

        let output: Vec<SearchResultOutput<'_>> = if query.trim().is_empty() {
            self.index
                .pages()
                .into_iter()
                .map(|entry| SearchResultOutput::new(entry, None))
                .collect()
        } else {
            let options = SearchOptions {
                min_score: options.min_score,
                max_results: options.limit,
            };
            search_scored_with(query, &self.index, &options)
                .into_iter()
                .map(|result| SearchResultOutput::new(result.entry, Some(result.score)))
                .collect()
        };

        to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The default list shown before anything is typed.
    #[wasm_bindgen]
    pub fn pages(&self) -> Result<JsValue, JsValue> {
        let output: Vec<SearchResultOutput<'_>> = self
            .index
            .pages()
            .into_iter()
            .map(|entry| SearchResultOutput::new(entry, None))
            .collect();
        to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `[{ text, matched }]` segments for one field.
    #[wasm_bindgen]
    pub fn highlight(&self, text: &str, query: &str) -> Result<JsValue, JsValue> {
        let segments = Highlighter::new(query).segments(text);
        to_value(&segments).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
