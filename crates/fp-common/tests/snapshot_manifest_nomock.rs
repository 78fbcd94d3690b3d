//! No-mock snapshot manifest tests using a real JSON fixture.

use fp_common::{CapabilityKind, CapabilitySnapshot};
use std::env;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const FIXTURE: &str = r#"{
  "schema_version": "1.0.0",
  "session_id": "8a1f4c1e-9d2b-4f6a-8e3c-2b7d5a90c144",
  "entries": {
    "speech_recognition": true,
    "provider_account": false
  },
  "probed_at": "2026-08-01T12:00:00+00:00"
}"#;

fn load_fixture() -> CapabilitySnapshot {
    serde_json::from_str(FIXTURE).expect("parse snapshot fixture")
}

struct EnvGuard {
    key: String,
    value: Option<String>,
}

impl EnvGuard {
    fn set(key: &str, value: &str) -> Self {
        let saved = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            value: saved,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

#[test]
fn test_snapshot_fixture_parses() {
    let snapshot = load_fixture();

    assert_eq!(snapshot.schema_version, "1.0.0");
    assert_eq!(snapshot.entries.len(), 2);
    assert!(snapshot.is_available(CapabilityKind::SpeechRecognition));
    assert_eq!(snapshot.get(CapabilityKind::ProviderAccount), Some(false));
    assert_eq!(snapshot.get(CapabilityKind::ProviderAuthenticator), None);
}

#[test]
fn test_snapshot_fixture_is_stale_by_now() {
    let snapshot = load_fixture();
    // Fixture timestamp is fixed in the past; a one-hour TTL has long passed.
    assert!(snapshot.is_stale(3600));
}

#[test]
fn test_snapshot_cache_roundtrip() {
    let _guard = ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .expect("env lock poisoned");

    let temp = tempfile::tempdir().expect("tempdir");
    let _env_guard = EnvGuard::set("XDG_CACHE_HOME", temp.path().to_string_lossy().as_ref());

    let snapshot = load_fixture();
    snapshot.save_to_cache().expect("save cache");

    let loaded = CapabilitySnapshot::load_from_cache().expect("load cache");
    assert_eq!(loaded.schema_version, snapshot.schema_version);
    assert_eq!(loaded.session_id, snapshot.session_id);
    assert_eq!(loaded.entries, snapshot.entries);
}

#[test]
fn test_load_missing_cache_is_io_error() {
    let _guard = ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .expect("env lock poisoned");

    let temp = tempfile::tempdir().expect("tempdir");
    let _env_guard = EnvGuard::set("XDG_CACHE_HOME", temp.path().to_string_lossy().as_ref());

    let result = CapabilitySnapshot::load_from_cache();
    assert!(matches!(result, Err(fp_common::Error::Io { .. })));
}
