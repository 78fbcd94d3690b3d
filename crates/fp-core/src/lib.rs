//! Feature Probe core engine.
//!
//! This library answers, at runtime, whether an optional host integration
//! is available to the embedding application:
//! - The [`HostEnvironment`] boundary trait for platform queries
//! - The memoizing [`CapabilityCache`] with cached and fresh probe modes
//! - A full detection sweep producing capability snapshots
//! - The designated [`InteractionThread`] probe executor

pub mod cache;
pub mod detect;
pub mod environment;
pub mod interaction;

pub use cache::{CapabilityCache, ProbeMode};
pub use detect::detect_features;
pub use environment::{AccountInfo, AuthenticatorInfo, HandlerInfo, HostEnvironment};
pub use interaction::InteractionThread;
