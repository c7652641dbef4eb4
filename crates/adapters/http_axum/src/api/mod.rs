//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod accessories;
#[allow(clippy::missing_errors_doc)]
pub mod bridge;

use axum::Router;
use axum::routing::{get, post, put};

use wavehub_app::ports::{CommandTransport, SettingsSource};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, T>() -> Router<AppState<S, T>>
where
    S: SettingsSource + Send + Sync + 'static,
    T: CommandTransport + Send + Sync + 'static,
{
    Router::new()
        // Accessories
        .route("/accessories", get(accessories::list::<S, T>))
        .route("/accessories/{room}/{device}", get(accessories::get::<S, T>))
        .route(
            "/accessories/{room}/{device}/power",
            put(accessories::set_power::<S, T>),
        )
        .route(
            "/accessories/{room}/{device}/brightness",
            put(accessories::set_brightness::<S, T>),
        )
        // Bridge
        .route("/refresh", post(bridge::refresh::<S, T>))
        .route("/sequence", get(bridge::sequence::<S, T>))
}
