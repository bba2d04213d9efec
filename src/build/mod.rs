// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading index content from a JSON manifest.
//!
//! This is the only place in the library that touches the filesystem. The
//! result is a fully validated `Index`; after that, nothing can fail.

pub mod manifest;

use std::fs;
use std::path::Path;

use crate::error::IndexError;
use crate::index::Index;

pub use manifest::*;

/// Parse manifest JSON and build the index.
pub fn parse_manifest(json: &str) -> Result<Index, IndexError> {
    let manifest: IndexManifest = serde_json::from_str(json)?;
    if manifest.version != MANIFEST_VERSION {
        return Err(IndexError::UnsupportedVersion {
            found: manifest.version,
            expected: MANIFEST_VERSION,
        });
    }
    Index::build(manifest.entries)
}

/// Read a manifest file and build the index.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Index, IndexError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let index = parse_manifest(&content)?;
    tracing::info!(path = %path.display(), entries = index.len(), "loaded manifest");
    Ok(index)
}
