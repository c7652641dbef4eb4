//! # wavehub-domain
//!
//! Pure domain model for the wavehub LightwaveRF bridge.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **slot statuses** (the hub's flat, position-encoded device list)
//! - Define **Devices** and their two-level `R<room>D<device>` addressing
//! - Derive the device **registry** from a status list and a name list
//! - Encode **commands** into the hub's UDP wire format
//! - Describe **accessories** (the capabilities a host bridge registers)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod accessory;
pub mod command;
pub mod device;
pub mod registry;
pub mod settings;
pub mod status;
