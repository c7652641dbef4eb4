//! # wavehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Expose the bridged devices as accessories (`/api/accessories`)
//! - Accept host writes to the power and brightness capabilities and turn
//!   them into [`BridgeService::update`](wavehub_app::services::bridge_service::BridgeService::update) calls
//! - Let an operator re-read the hub settings (`POST /api/refresh`)
//! - Map [`WaveHubError`](wavehub_domain::error::WaveHubError) into status codes
//!
//! ## Dependency rule
//! Depends on `wavehub-app` (for port traits and services) and `wavehub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
