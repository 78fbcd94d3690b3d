//! Capability snapshot schema and persistence.
//!
//! A snapshot is the serializable export of a capability cache: which kinds
//! have been probed and what each probe observed. Snapshots enable:
//! - Persisting detection results across process restarts
//! - Prewarming a cache before the host environment is reachable
//! - User awareness of what's available vs missing
//!
//! Cache location: `~/.cache/feature-probe/snapshot.json`
//!
//! Staleness applies to persisted snapshots only. The live in-memory cache
//! has no TTL; its entries are only ever replaced by fresh probes.

use crate::error::{Error, Result};
use crate::kind::CapabilityKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Current snapshot schema version.
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Default snapshot staleness threshold in seconds (24 hours).
pub const DEFAULT_SNAPSHOT_TTL_SECS: u64 = 86_400;

/// Application name for cache directories.
const APP_NAME: &str = "feature-probe";

/// Serializable record of probed capabilities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct CapabilitySnapshot {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Identifier of the probing session that produced this snapshot.
    pub session_id: String,

    /// Observed result per probed kind. Kinds never probed are absent.
    pub entries: BTreeMap<CapabilityKind, bool>,

    /// ISO 8601 timestamp of when the entries were probed.
    pub probed_at: String,
}

impl CapabilitySnapshot {
    /// Create an empty snapshot stamped with a fresh session id.
    pub fn new() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            session_id: uuid::Uuid::new_v4().to_string(),
            entries: BTreeMap::new(),
            probed_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Result recorded for a kind, if it was probed.
    pub fn get(&self, kind: CapabilityKind) -> Option<bool> {
        self.entries.get(&kind).copied()
    }

    /// Whether a kind was probed and observed available.
    pub fn is_available(&self, kind: CapabilityKind) -> bool {
        self.get(kind).unwrap_or(false)
    }

    /// Check if the snapshot is older than `ttl_secs`.
    pub fn is_stale(&self, ttl_secs: u64) -> bool {
        use chrono::{DateTime, Utc};

        let probed_at = match DateTime::parse_from_rfc3339(&self.probed_at) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(_) => return true, // Can't parse, assume stale
        };

        let age = Utc::now().signed_duration_since(probed_at);
        age.num_seconds() > ttl_secs as i64
    }

    /// One-line summary for log output.
    pub fn summary(&self) -> String {
        let available = self.entries.values().filter(|v| **v).count();
        format!(
            "Capabilities: {}/{} available | probed at {}",
            available,
            self.entries.len(),
            self.probed_at
        )
    }

    /// Get the snapshot file path.
    pub fn cache_path() -> PathBuf {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(APP_NAME);
        cache_dir.join("snapshot.json")
    }

    /// Load a snapshot from the cache file.
    pub fn load_from_cache() -> Result<Self> {
        let path = Self::cache_path();
        let contents = std::fs::read_to_string(&path).map_err(|e| Error::Io {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| Error::Parse {
            path,
            reason: e.to_string(),
        })
    }

    /// Save the snapshot to the cache file.
    pub fn save_to_cache(&self) -> Result<()> {
        let path = Self::cache_path();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Io {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|e| Error::Serialize {
            reason: e.to_string(),
        })?;

        std::fs::write(&path, contents).map_err(|e| Error::Io {
            path,
            reason: e.to_string(),
        })
    }
}

impl Default for CapabilitySnapshot {
    fn default() -> Self {
        Self::new()
    }
}
