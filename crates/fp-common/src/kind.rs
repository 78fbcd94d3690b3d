//! Capability kind identifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier for a probed host capability.
///
/// The set is finite and enumerable; [`CapabilityKind::all`] yields every
/// kind in a stable order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// A handler is registered for the speech-recognition action.
    SpeechRecognition,

    /// At least one account of the provider type is registered.
    ProviderAccount,

    /// An authenticator for the provider type is registered.
    ProviderAuthenticator,
}

impl CapabilityKind {
    /// All kinds in declaration order.
    pub const fn all() -> [CapabilityKind; 3] {
        [
            CapabilityKind::SpeechRecognition,
            CapabilityKind::ProviderAccount,
            CapabilityKind::ProviderAuthenticator,
        ]
    }

    /// Stable snake_case name, matching the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CapabilityKind::SpeechRecognition => "speech_recognition",
            CapabilityKind::ProviderAccount => "provider_account",
            CapabilityKind::ProviderAuthenticator => "provider_authenticator",
        }
    }
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
