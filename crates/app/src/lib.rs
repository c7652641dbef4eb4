//! # wavehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SettingsSource` — fetch the hub's slot lists
//!   - `CommandTransport` — deliver one command datagram to a hub
//! - Define **driving/inbound** use-cases:
//!   - `CommandService` — allocate a sequence number, encode, send
//!   - `BridgeService` — refresh the device registry, expose accessories,
//!     route capability updates to `CommandService`
//! - Own the process-wide [`SequenceCounter`](sequence::SequenceCounter)
//!
//! ## Dependency rule
//! Depends on `wavehub-domain` only (plus `serde` and `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod sequence;
pub mod services;
