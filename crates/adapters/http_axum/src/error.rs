//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wavehub_domain::error::WaveHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`WaveHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(WaveHubError);

impl From<WaveHubError> for ApiError {
    fn from(err: WaveHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            WaveHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            WaveHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            WaveHubError::MalformedStatusList(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            WaveHubError::Transmission(source) | WaveHubError::Upstream(source) => {
                tracing::error!(error = %self.0, %source, "hub unreachable");
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
