//! Feature Probe configuration loading and resolution.
//!
//! This crate provides:
//! - Typed structs for probe.json
//! - Probe identifier resolution (explicit → env → XDG → defaults)

pub mod resolve;

pub use resolve::{
    resolve_probe_config, ConfigSource, ProbeConfig, ProbeOverrides, DEFAULT_PROVIDER_ACCOUNT_TYPE,
    DEFAULT_RECOGNITION_ACTION,
};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
