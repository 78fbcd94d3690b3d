//! Error types for Feature Probe.
//!
//! Absence of a capability is a normal boolean outcome, never an error.
//! Errors here come from the host environment collaborators, snapshot
//! persistence, configuration files, or the interaction thread. There is
//! no retry policy: each operation either completes once or propagates
//! the underlying failure.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Feature Probe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Feature Probe.
#[derive(Debug, Error)]
pub enum Error {
    /// A host environment query failed. Probes never catch, retry, or
    /// translate this; it reaches the probe caller unchanged.
    #[error("environment query '{query}' failed: {reason}")]
    Environment { query: String, reason: String },

    #[error("failed to read snapshot from {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("failed to parse snapshot from {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("failed to serialize snapshot: {reason}")]
    Serialize { reason: String },

    #[error("invalid probe config file: {0}")]
    Config(String),

    #[error("interaction thread is not accepting work: {0}")]
    Dispatch(String),
}

impl Error {
    /// Build an environment error for a named query.
    pub fn environment(query: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Environment {
            query: query.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_error_display() {
        let err = Error::environment("resolve_handlers", "registry unreachable");
        assert_eq!(
            err.to_string(),
            "environment query 'resolve_handlers' failed: registry unreachable"
        );
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = Error::Io {
            path: PathBuf::from("/tmp/snapshot.json"),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("/tmp/snapshot.json"));
        assert!(err.to_string().contains("permission denied"));
    }
}
