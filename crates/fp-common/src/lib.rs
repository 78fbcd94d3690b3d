//! Feature Probe shared types and errors.
//!
//! This crate provides foundational types shared across fp-core modules:
//! - Capability kind identifiers
//! - Common error types
//! - Serializable capability snapshots with on-disk persistence

pub mod error;
pub mod kind;
pub mod snapshot;

pub use error::{Error, Result};
pub use kind::CapabilityKind;
pub use snapshot::{CapabilitySnapshot, DEFAULT_SNAPSHOT_TTL_SECS, SNAPSHOT_SCHEMA_VERSION};
