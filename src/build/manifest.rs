// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::types::EntryInput;

/// The only manifest layout this build reads.
pub const MANIFEST_VERSION: u32 = 1;

/// Index content as shipped alongside the site.
///
/// Entry order in `entries` is the index order, and therefore the tie-break
/// order for equal scores.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct IndexManifest {
    pub version: u32,
    pub entries: Vec<EntryInput>,
}
