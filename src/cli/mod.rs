// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the nexus-search command-line interface.
//!
//! Three subcommands: `search` runs a query against a manifest the way the
//! site's search modal would, `inspect` validates a manifest and summarizes
//! it, and `highlight` shows how a field would be marked up for a query.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nexus-search",
    about = "Tiered fuzzy search over a documentation index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a manifest and display ranked results
    Search {
        /// Path to the index manifest (JSON)
        file: String,

        /// Search query (empty shows the default page list)
        #[arg(default_value = "")]
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = nexus_search::MAX_RESULTS)]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a manifest and summarize its entries
    Inspect {
        /// Path to the index manifest (JSON)
        file: String,
    },

    /// Show highlight segments for a piece of text
    Highlight {
        /// Text to highlight
        text: String,

        /// Query whose terms should be marked
        query: String,

        /// Print segments as JSON
        #[arg(long)]
        json: bool,
    },
}
