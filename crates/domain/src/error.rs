//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WaveHubError`] via `#[from]` (or an adapter-level `into_domain()`).

use crate::device::{DeviceAddress, DeviceKind};

/// Top-level error shared by every port boundary.
#[derive(Debug, thiserror::Error)]
pub enum WaveHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("malformed device status list")]
    MalformedStatusList(#[from] MalformedStatusList),

    /// The command datagram could not be delivered to the hub.
    #[error("command transmission failed")]
    Transmission(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The hub settings document could not be retrieved or decoded.
    #[error("hub settings retrieval failed")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A value violated a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("brightness must be between 0 and 100, got {0}")]
    BrightnessOutOfRange(u16),

    #[error("{kind} devices do not support the {capability} capability")]
    UnsupportedCapability {
        kind: DeviceKind,
        capability: &'static str,
    },

    #[error("slot index {0} does not fit the hub addressing scheme")]
    SlotIndexOverflow(usize),
}

/// Lookup of a device or accessory by address failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no device registered at {address}")]
pub struct NotFoundError {
    pub address: DeviceAddress,
}

/// The status list could not be turned into a registry under the strict policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedStatusList {
    #[error("{statuses} status codes but {names} device names")]
    LengthMismatch { statuses: usize, names: usize },

    #[error("unknown status code {code:?} at slot {index}")]
    UnknownCode { index: usize, code: String },
}
