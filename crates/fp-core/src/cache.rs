//! Memoizing capability cache.
//!
//! Answers "is capability K available?" either by a fresh environment
//! query or by returning the last fresh answer for K. Entries are
//! overwritten by every fresh probe and never expire; the only way a
//! stored value changes is another fresh probe (or an explicit
//! [`CapabilityCache::seed`] / [`CapabilityCache::clear`]).

use crate::environment::HostEnvironment;
use fp_common::{CapabilityKind, CapabilitySnapshot, Result};
use fp_config::ProbeConfig;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, trace};

/// Whether a probe may reuse the memoized result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMode {
    /// Return the stored result if one exists; query fresh otherwise.
    Cached,

    /// Always query the environment and overwrite the stored result.
    Fresh,
}

/// Memoizing capability cache.
///
/// Owns the probe configuration and one boolean entry per probed kind.
/// Embedders create one instance at startup and inject it into call
/// sites; there is no ambient singleton. The cache is safe to share
/// across threads; entry updates are read-modify-write under a mutex.
#[derive(Debug)]
pub struct CapabilityCache {
    config: ProbeConfig,
    entries: Mutex<HashMap<CapabilityKind, bool>>,
}

impl CapabilityCache {
    /// Create an empty cache with the given probe configuration.
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Probe configuration in use.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probe whether `kind` is available.
    ///
    /// In [`ProbeMode::Cached`], an existing entry is returned without
    /// touching `env`. Otherwise the environment is queried fresh and the
    /// entry for `kind` is overwritten with the observed result.
    /// Environment failures propagate unchanged and leave the entry as it
    /// was. Absence of a handler or account is a valid `false`, never an
    /// error.
    pub fn probe(
        &self,
        kind: CapabilityKind,
        env: &dyn HostEnvironment,
        mode: ProbeMode,
    ) -> Result<bool> {
        if mode == ProbeMode::Cached {
            if let Some(stored) = self.cached(kind) {
                trace!(kind = %kind, stored, "capability cache hit");
                return Ok(stored);
            }
        }

        let observed = self.query(kind, env)?;
        self.entries.lock().unwrap().insert(kind, observed);
        debug!(kind = %kind, observed, "capability refreshed");
        Ok(observed)
    }

    /// Whether a speech-recognition handler is registered.
    pub fn speech_recognition_available(
        &self,
        env: &dyn HostEnvironment,
        mode: ProbeMode,
    ) -> Result<bool> {
        self.probe(CapabilityKind::SpeechRecognition, env, mode)
    }

    /// Whether at least one provider account is registered.
    ///
    /// Always queries fresh; the entry is refreshed as a side effect.
    pub fn has_provider_accounts(&self, env: &dyn HostEnvironment) -> Result<bool> {
        self.probe(CapabilityKind::ProviderAccount, env, ProbeMode::Fresh)
    }

    /// Whether an authenticator for the provider type is registered.
    ///
    /// Always queries fresh; the entry is refreshed as a side effect.
    pub fn has_provider_authenticator(&self, env: &dyn HostEnvironment) -> Result<bool> {
        self.probe(CapabilityKind::ProviderAuthenticator, env, ProbeMode::Fresh)
    }

    /// Stored result for `kind`, if any. Never queries the environment.
    pub fn cached(&self, kind: CapabilityKind) -> Option<bool> {
        self.entries.lock().unwrap().get(&kind).copied()
    }

    /// Prewarm entries from a previously saved snapshot.
    ///
    /// Seeded entries behave exactly as if written by a fresh probe: a
    /// cached-mode probe returns them verbatim until a fresh probe
    /// overwrites them.
    pub fn seed(&self, snapshot: &CapabilitySnapshot) {
        let mut entries = self.entries.lock().unwrap();
        for (kind, available) in &snapshot.entries {
            entries.insert(*kind, *available);
        }
    }

    /// Drop all stored entries. The cache never clears itself.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Export the stored entries as a snapshot.
    pub fn snapshot(&self) -> CapabilitySnapshot {
        let mut snapshot = CapabilitySnapshot::new();
        let entries = self.entries.lock().unwrap();
        for (kind, available) in entries.iter() {
            snapshot.entries.insert(*kind, *available);
        }
        snapshot
    }

    /// Query the environment for `kind` without touching the cache.
    ///
    /// The entry mutex is not held here, so a slow environment call never
    /// blocks cached-mode reads of other kinds.
    fn query(&self, kind: CapabilityKind, env: &dyn HostEnvironment) -> Result<bool> {
        match kind {
            CapabilityKind::SpeechRecognition => {
                let handlers = env.resolve_handlers(&self.config.recognition_action)?;
                Ok(!handlers.is_empty())
            }
            CapabilityKind::ProviderAccount => {
                let accounts = env.accounts_of_type(&self.config.provider_account_type)?;
                Ok(!accounts.is_empty())
            }
            CapabilityKind::ProviderAuthenticator => {
                let authenticators = env.authenticator_types()?;
                Ok(authenticators
                    .iter()
                    .any(|a| a.account_type == self.config.provider_account_type))
            }
        }
    }
}

impl Default for CapabilityCache {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}
