//! In-memory ports shared by the handler and router tests.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;

use wavehub_app::ports::{CommandTransport, SettingsSource};
use wavehub_app::services::bridge_service::BridgeService;
use wavehub_app::services::command_service::CommandService;
use wavehub_domain::error::WaveHubError;
use wavehub_domain::registry::RegistryPolicy;
use wavehub_domain::settings::HubSettings;

use crate::state::AppState;

pub const HUB: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 50));

/// Settings shared between a [`StubSource`] and the test driving it.
/// `None` makes the next fetch fail.
pub type SettingsHandle = Arc<Mutex<Option<HubSettings>>>;

pub struct StubSource {
    pub settings: SettingsHandle,
}

impl SettingsSource for StubSource {
    async fn fetch(&self) -> Result<HubSettings, WaveHubError> {
        self.settings
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| WaveHubError::Upstream(Box::new(std::io::Error::other("offline"))))
    }
}

#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<String>>,
    pub fail: Mutex<bool>,
}

impl CommandTransport for RecordingTransport {
    async fn send(&self, _hub: IpAddr, payload: &str) -> Result<(), WaveHubError> {
        if *self.fail.lock().unwrap() {
            return Err(WaveHubError::Transmission(Box::new(std::io::Error::other(
                "network unreachable",
            ))));
        }
        self.sent.lock().unwrap().push(payload.to_string());
        Ok(())
    }
}

pub type TestState = AppState<StubSource, Arc<RecordingTransport>>;

/// A refreshed bridge over one room: a dimmer at R1D1 and a switch at R1D2.
pub async fn test_state(transport: Arc<RecordingTransport>) -> TestState {
    test_state_with_settings(transport).await.0
}

pub async fn test_state_with_settings(
    transport: Arc<RecordingTransport>,
) -> (TestState, SettingsHandle) {
    let settings: SettingsHandle = Arc::new(Mutex::new(Some(HubSettings {
        device_status: vec!["D".into(), "O".into(), "I".into()],
        device_names: vec!["Lounge".into(), "Fan".into(), String::new()],
    })));
    let source = StubSource {
        settings: Arc::clone(&settings),
    };
    let commands = Arc::new(CommandService::new(transport));
    let bridge = BridgeService::new(source, commands, HUB, RegistryPolicy::Lenient);
    bridge.refresh().await.unwrap();
    (AppState::new(bridge), settings)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
