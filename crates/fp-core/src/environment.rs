//! Host environment boundary.
//!
//! The probing engine never talks to the host platform directly; it goes
//! through [`HostEnvironment`], a narrow trait capturing only the three
//! queries capability detection needs. Production embedders adapt their
//! platform services to this trait; tests implement it with plain structs.

use fp_common::Result;
use serde::{Deserialize, Serialize};

/// A handler registered for a named action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerInfo {
    /// Component that registered the handler.
    pub component: String,
}

impl HandlerInfo {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Account display name.
    pub name: String,

    /// Account type string identifying the provider.
    pub account_type: String,
}

impl AccountInfo {
    pub fn new(name: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_type: account_type.into(),
        }
    }
}

/// A registered account authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatorInfo {
    /// Account type this authenticator serves.
    pub account_type: String,

    /// Component providing the authenticator.
    pub provider: String,
}

impl AuthenticatorInfo {
    pub fn new(account_type: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            account_type: account_type.into(),
            provider: provider.into(),
        }
    }
}

/// Environment-query facilities for capability probes.
///
/// Implementations are supplied by the caller per probe call and never
/// retained by the cache beyond the call. Queries are only valid on the
/// designated interaction thread; callers elsewhere marshal probes through
/// [`InteractionThread`](crate::InteractionThread). Query failures propagate
/// to the probe caller untranslated.
pub trait HostEnvironment {
    /// Handlers registered for `action`.
    fn resolve_handlers(&self, action: &str) -> Result<Vec<HandlerInfo>>;

    /// Accounts registered with type `account_type`.
    fn accounts_of_type(&self, account_type: &str) -> Result<Vec<AccountInfo>>;

    /// All registered account authenticators.
    fn authenticator_types(&self) -> Result<Vec<AuthenticatorInfo>>;
}
