// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors that can stop an index from being built.
//!
//! Searching never fails. Everything here happens before the first query:
//! bad literals, unreadable manifests, unknown manifest versions. Treat any of
//! these as a configuration bug and refuse to start.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    /// An entry literal has an empty or whitespace-only title.
    #[error("entry {position} has an empty title")]
    EmptyTitle { position: usize },

    /// An entry literal has nowhere to navigate to.
    #[error("entry {position} ({title:?}) has an empty destination")]
    EmptyDestination { position: usize, title: String },

    /// Manifest was written for a format this build doesn't understand.
    #[error("unsupported manifest version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
}
