//! Probe configuration resolution.
//!
//! Resolution order for each identifier: explicit override → environment
//! variable → XDG config file → builtin default. An absent config file is
//! normal; a malformed one is an error and is never silently ignored.

use fp_common::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default action identifier probed for a speech-recognition handler.
pub const DEFAULT_RECOGNITION_ACTION: &str = "speech.recognize";

/// Default account type identifying the provider whose accounts and
/// authenticators are probed.
pub const DEFAULT_PROVIDER_ACCOUNT_TYPE: &str = "com.google";

/// Environment variable names.
const ENV_RECOGNITION_ACTION: &str = "FEATURE_PROBE_RECOGNITION_ACTION";
const ENV_PROVIDER_ACCOUNT_TYPE: &str = "FEATURE_PROBE_PROVIDER_TYPE";
const ENV_CONFIG_DIR: &str = "FEATURE_PROBE_CONFIG_DIR";

/// Standard config file name.
const CONFIG_FILENAME: &str = "probe.json";

/// Application name for XDG directories.
const APP_NAME: &str = "feature-probe";

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided by the embedder.
    Explicit,

    /// Set via environment variable.
    Environment,

    /// Found in the XDG config file.
    ConfigFile,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit => write!(f, "explicit override"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::ConfigFile => write!(f, "config file"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Explicit overrides supplied by the embedder.
#[derive(Debug, Clone, Default)]
pub struct ProbeOverrides {
    /// Action identifier to probe for a registered handler.
    pub recognition_action: Option<String>,

    /// Account type identifying the probed provider.
    pub provider_account_type: Option<String>,
}

/// Resolved probe configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Action identifier probed for a registered handler.
    pub recognition_action: String,

    /// Account type identifying the probed provider.
    pub provider_account_type: String,

    /// Source of the recognition action (for diagnostics).
    pub recognition_action_source: ConfigSource,

    /// Source of the provider account type (for diagnostics).
    pub provider_account_type_source: ConfigSource,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            recognition_action: DEFAULT_RECOGNITION_ACTION.to_string(),
            provider_account_type: DEFAULT_PROVIDER_ACCOUNT_TYPE.to_string(),
            recognition_action_source: ConfigSource::BuiltinDefault,
            provider_account_type_source: ConfigSource::BuiltinDefault,
        }
    }
}

/// On-disk probe configuration file. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeConfigFile {
    #[serde(default)]
    pub recognition_action: Option<String>,

    #[serde(default)]
    pub provider_account_type: Option<String>,
}

impl ProbeConfigFile {
    /// Load and parse a probe config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Resolve probe configuration using the standard resolution order.
///
/// Resolution order for each identifier:
/// 1. Explicit override (if provided)
/// 2. Environment variable (FEATURE_PROBE_RECOGNITION_ACTION,
///    FEATURE_PROBE_PROVIDER_TYPE)
/// 3. probe.json in FEATURE_PROBE_CONFIG_DIR or the XDG config directory
/// 4. Builtin defaults
///
/// A missing config file falls through to defaults; a malformed one is a
/// [`Error::Config`].
pub fn resolve_probe_config(overrides: Option<&ProbeOverrides>) -> Result<ProbeConfig> {
    let file = match config_file_path() {
        Some(path) if path.exists() => Some(ProbeConfigFile::load(&path)?),
        _ => None,
    };

    let mut config = ProbeConfig::default();

    config.recognition_action = resolve_value(
        overrides.and_then(|o| o.recognition_action.as_deref()),
        ENV_RECOGNITION_ACTION,
        file.as_ref().and_then(|f| f.recognition_action.as_deref()),
        DEFAULT_RECOGNITION_ACTION,
        &mut config.recognition_action_source,
    );

    config.provider_account_type = resolve_value(
        overrides.and_then(|o| o.provider_account_type.as_deref()),
        ENV_PROVIDER_ACCOUNT_TYPE,
        file.as_ref().and_then(|f| f.provider_account_type.as_deref()),
        DEFAULT_PROVIDER_ACCOUNT_TYPE,
        &mut config.provider_account_type_source,
    );

    Ok(config)
}

/// Resolve a single configuration value.
fn resolve_value(
    explicit: Option<&str>,
    env_var: &str,
    file_value: Option<&str>,
    default: &str,
    source: &mut ConfigSource,
) -> String {
    // 1. Explicit override
    if let Some(value) = explicit {
        *source = ConfigSource::Explicit;
        return value.to_string();
    }

    // 2. Environment variable
    if let Ok(value) = std::env::var(env_var) {
        if !value.is_empty() {
            *source = ConfigSource::Environment;
            return value;
        }
    }

    // 3. Config file
    if let Some(value) = file_value {
        *source = ConfigSource::ConfigFile;
        return value.to_string();
    }

    // 4. Builtin default
    *source = ConfigSource::BuiltinDefault;
    default.to_string()
}

/// Path of the probe config file, honoring FEATURE_PROBE_CONFIG_DIR.
fn config_file_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILENAME));
    }

    xdg_config_dir().map(|d| d.join(CONFIG_FILENAME))
}

/// Get the XDG config directory for feature-probe.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}
