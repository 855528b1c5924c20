//! Provenance and schema descriptors attached to serialized artifacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for fixes.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information attached to every serialized circuit or matrix pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuildProvenance {
    /// Code selector the artifact was built from, e.g. `surface_code:z_memory`.
    pub selector: String,
    /// Hash of the configuration used to produce the artifact.
    pub config_hash: String,
    /// Canonical hash of the artifact itself. Filled lazily on export.
    pub artifact_hash: String,
    /// Number of syndrome extraction rounds, zero for matrix-only artifacts.
    pub rounds: usize,
    /// Version map for the tools involved in the build.
    pub tool_versions: BTreeMap<String, String>,
}

impl BuildProvenance {
    /// Creates a provenance record for the given selector and round count.
    pub fn new(selector: impl Into<String>, rounds: usize) -> Self {
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert("stab-core".to_string(), env!("CARGO_PKG_VERSION").to_string());
        Self {
            selector: selector.into(),
            rounds,
            tool_versions,
            ..Self::default()
        }
    }
}
