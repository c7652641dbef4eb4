//! JSON REST handlers for bridged accessories.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use wavehub_app::ports::{CommandTransport, SettingsSource};
use wavehub_app::services::command_service::SentCommand;
use wavehub_domain::accessory::{Accessory, CapabilityUpdate};
use wavehub_domain::device::DeviceAddress;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the power capability.
#[derive(Deserialize)]
pub struct PowerRequest {
    pub on: bool,
}

/// Request body for the brightness capability, as a percentage.
#[derive(Deserialize)]
pub struct BrightnessRequest {
    pub level: u16,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Accessory>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Accessory>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the capability write endpoints.
pub enum UpdateResponse {
    Sent(Json<SentCommand>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Sent(json) => json.into_response(),
        }
    }
}

/// `GET /api/accessories`
pub async fn list<S, T>(State(state): State<AppState<S, T>>) -> ListResponse
where
    S: SettingsSource + Send + Sync + 'static,
    T: CommandTransport + Send + Sync + 'static,
{
    ListResponse::Ok(Json(state.bridge.accessories()))
}

/// `GET /api/accessories/{room}/{device}`
pub async fn get<S, T>(
    State(state): State<AppState<S, T>>,
    Path((room, device)): Path<(u32, u8)>,
) -> Result<GetResponse, ApiError>
where
    S: SettingsSource + Send + Sync + 'static,
    T: CommandTransport + Send + Sync + 'static,
{
    let accessory = state.bridge.accessory(DeviceAddress { room, device })?;
    Ok(GetResponse::Ok(Json(accessory)))
}

/// `PUT /api/accessories/{room}/{device}/power`
pub async fn set_power<S, T>(
    State(state): State<AppState<S, T>>,
    Path((room, device)): Path<(u32, u8)>,
    Json(req): Json<PowerRequest>,
) -> Result<UpdateResponse, ApiError>
where
    S: SettingsSource + Send + Sync + 'static,
    T: CommandTransport + Send + Sync + 'static,
{
    let sent = state
        .bridge
        .update(
            DeviceAddress { room, device },
            CapabilityUpdate::Power { on: req.on },
        )
        .await?;
    Ok(UpdateResponse::Sent(Json(sent)))
}

/// `PUT /api/accessories/{room}/{device}/brightness`
pub async fn set_brightness<S, T>(
    State(state): State<AppState<S, T>>,
    Path((room, device)): Path<(u32, u8)>,
    Json(req): Json<BrightnessRequest>,
) -> Result<UpdateResponse, ApiError>
where
    S: SettingsSource + Send + Sync + 'static,
    T: CommandTransport + Send + Sync + 'static,
{
    let sent = state
        .bridge
        .update(
            DeviceAddress { room, device },
            CapabilityUpdate::Brightness { level: req.level },
        )
        .await?;
    Ok(UpdateResponse::Sent(Json(sent)))
}

#[cfg(test)]
mod tests {
    use crate::router::build;
    use crate::testing::{RecordingTransport, empty_request, json_body, json_request, test_state};
    use axum::http::StatusCode;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn should_list_active_devices_as_accessories() {
        let app = build(test_state(Arc::new(RecordingTransport::default())).await);

        let response = app
            .oneshot(empty_request("GET", "/api/accessories"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let accessories = body.as_array().unwrap();
        assert_eq!(accessories.len(), 2);
        assert_eq!(accessories[0]["device"]["name"], "Lounge");
        assert_eq!(accessories[0]["device"]["kind"], "dimmer");
        assert_eq!(accessories[1]["device"]["address"]["device"], 2);
    }

    #[tokio::test]
    async fn should_expose_brightness_only_when_device_is_dimmer() {
        let transport = Arc::new(RecordingTransport::default());
        let state = test_state(transport).await;

        let has_brightness = |body: &serde_json::Value| {
            body["services"]
                .as_array()
                .unwrap()
                .iter()
                .flat_map(|s| s["characteristics"].as_array().unwrap().iter())
                .any(|c| c["kind"] == "brightness")
        };

        let dimmer = build(state.clone())
            .oneshot(empty_request("GET", "/api/accessories/1/1"))
            .await
            .unwrap();
        assert!(has_brightness(&json_body(dimmer).await));

        let switch = build(state)
            .oneshot(empty_request("GET", "/api/accessories/1/2"))
            .await
            .unwrap();
        assert!(!has_brightness(&json_body(switch).await));
    }

    #[tokio::test]
    async fn should_return_not_found_when_address_unregistered() {
        let app = build(test_state(Arc::new(RecordingTransport::default())).await);

        let response = app
            .oneshot(empty_request("GET", "/api/accessories/1/3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"], "no device registered at R1D3");
    }

    #[tokio::test]
    async fn should_send_switch_frame_when_power_written() {
        let transport = Arc::new(RecordingTransport::default());
        let app = build(test_state(Arc::clone(&transport)).await);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/accessories/1/2/power",
                r#"{"on":true}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["payload"], "0,!R1D2F1|Fan|On");
        assert_eq!(body["sequence"], 0);
        assert_eq!(*transport.sent.lock().unwrap(), vec!["0,!R1D2F1|Fan|On"]);
    }

    #[tokio::test]
    async fn should_send_dimmer_frame_when_brightness_written() {
        let transport = Arc::new(RecordingTransport::default());
        let app = build(test_state(Arc::clone(&transport)).await);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/accessories/1/1/brightness",
                r#"{"level":50}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            *transport.sent.lock().unwrap(),
            vec!["0,!R1D1FdP16|Lounge|50"]
        );
    }

    #[tokio::test]
    async fn should_reject_brightness_when_device_is_switch() {
        let transport = Arc::new(RecordingTransport::default());
        let app = build(test_state(Arc::clone(&transport)).await);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/accessories/1/2/brightness",
                r#"{"level":50}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_brightness_when_level_above_hundred() {
        let app = build(test_state(Arc::new(RecordingTransport::default())).await);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/accessories/1/1/brightness",
                r#"{"level":150}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_brightness_with_json_error_when_level_exceeds_byte_range() {
        let transport = Arc::new(RecordingTransport::default());
        let app = build(test_state(Arc::clone(&transport)).await);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/accessories/1/1/brightness",
                r#"{"level":300}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].as_str().is_some_and(|msg| msg.contains("300")));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_bad_gateway_when_transport_fails() {
        let transport = Arc::new(RecordingTransport::default());
        *transport.fail.lock().unwrap() = true;
        let app = build(test_state(transport).await);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/accessories/1/1/power",
                r#"{"on":false}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
