//! Full feature detection sweep.

use crate::cache::{CapabilityCache, ProbeMode};
use crate::environment::HostEnvironment;
use fp_common::{CapabilityKind, CapabilitySnapshot, Result};
use tracing::{debug, info};

/// Fresh-probe every capability kind and return the resulting snapshot.
///
/// Every cache entry is refreshed as a side effect. The first failing
/// environment query aborts the sweep and propagates.
pub fn detect_features(
    cache: &CapabilityCache,
    env: &dyn HostEnvironment,
) -> Result<CapabilitySnapshot> {
    info!("detecting host features");

    for kind in CapabilityKind::all() {
        let available = cache.probe(kind, env, ProbeMode::Fresh)?;
        debug!(kind = %kind, available, "feature probed");
    }

    let snapshot = cache.snapshot();
    info!(summary = %snapshot.summary(), "feature detection complete");
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{AccountInfo, AuthenticatorInfo, HandlerInfo};

    /// Environment double where everything is present.
    struct FullHost;

    impl HostEnvironment for FullHost {
        fn resolve_handlers(&self, _action: &str) -> Result<Vec<HandlerInfo>> {
            Ok(vec![HandlerInfo::new("voice-input")])
        }

        fn accounts_of_type(&self, account_type: &str) -> Result<Vec<AccountInfo>> {
            Ok(vec![AccountInfo::new("Dummy", account_type)])
        }

        fn authenticator_types(&self) -> Result<Vec<AuthenticatorInfo>> {
            Ok(vec![AuthenticatorInfo::new(
                fp_config::DEFAULT_PROVIDER_ACCOUNT_TYPE,
                "p1",
            )])
        }
    }

    #[test]
    fn test_detect_features_covers_every_kind() {
        let cache = CapabilityCache::default();
        let snapshot = detect_features(&cache, &FullHost).unwrap();

        assert_eq!(snapshot.entries.len(), CapabilityKind::all().len());
        for kind in CapabilityKind::all() {
            assert_eq!(snapshot.get(kind), Some(true));
            assert_eq!(cache.cached(kind), Some(true));
        }
    }

    #[test]
    fn test_detect_features_summary_reflects_results() {
        let cache = CapabilityCache::default();
        let snapshot = detect_features(&cache, &FullHost).unwrap();
        assert!(snapshot.summary().contains("3/3 available"));
    }
}
