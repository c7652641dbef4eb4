//! Shared application state for axum handlers.

use std::sync::Arc;

use wavehub_app::ports::{CommandTransport, SettingsSource};
use wavehub_app::services::bridge_service::BridgeService;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the settings source and transport do
/// not need to be `Clone`; only the `Arc` is cloned.
pub struct AppState<S, T> {
    pub bridge: Arc<BridgeService<S, T>>,
}

impl<S, T> Clone for AppState<S, T> {
    fn clone(&self) -> Self {
        Self {
            bridge: Arc::clone(&self.bridge),
        }
    }
}

impl<S, T> AppState<S, T>
where
    S: SettingsSource + Send + Sync + 'static,
    T: CommandTransport + Send + Sync + 'static,
{
    pub fn new(bridge: BridgeService<S, T>) -> Self {
        Self::from_arc(Arc::new(bridge))
    }

    /// Use this when the bridge is also held by the composition root, for
    /// example to run the initial refresh.
    pub fn from_arc(bridge: Arc<BridgeService<S, T>>) -> Self {
        Self { bridge }
    }
}
