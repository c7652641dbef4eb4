//! JSON REST handlers for the bridge itself.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wavehub_app::ports::{CommandTransport, SettingsSource};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a successful refresh.
#[derive(Serialize)]
pub struct RefreshBody {
    pub devices: usize,
}

/// Response body describing the command counter.
#[derive(Serialize)]
pub struct SequenceBody {
    pub next: u32,
}

/// Possible responses from the refresh endpoint.
pub enum RefreshResponse {
    Ok(Json<RefreshBody>),
}

impl IntoResponse for RefreshResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/refresh`
///
/// A failed refresh leaves the bridge with no devices and reports why.
pub async fn refresh<S, T>(
    State(state): State<AppState<S, T>>,
) -> Result<RefreshResponse, ApiError>
where
    S: SettingsSource + Send + Sync + 'static,
    T: CommandTransport + Send + Sync + 'static,
{
    let devices = state.bridge.refresh().await?;
    Ok(RefreshResponse::Ok(Json(RefreshBody { devices })))
}

/// `GET /api/sequence`
pub async fn sequence<S, T>(State(state): State<AppState<S, T>>) -> Json<SequenceBody>
where
    S: SettingsSource + Send + Sync + 'static,
    T: CommandTransport + Send + Sync + 'static,
{
    Json(SequenceBody {
        next: state.bridge.commands().sequence().peek(),
    })
}
