//! Settings adapter error types.

use std::path::PathBuf;

use wavehub_domain::error::WaveHubError;

/// Errors raised while loading a hub settings document.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The document could not be read.
    #[error("failed to read settings document {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML for [`HubSettings`](wavehub_domain::settings::HubSettings).
    #[error("failed to parse TOML settings document")]
    Toml(#[from] toml::de::Error),

    /// The document is not valid JSON for [`HubSettings`](wavehub_domain::settings::HubSettings).
    #[error("failed to parse JSON settings document")]
    Json(#[from] serde_json::Error),
}

impl SettingsError {
    /// Convert into a [`WaveHubError::Upstream`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> WaveHubError {
        WaveHubError::Upstream(Box::new(self))
    }
}

impl From<SettingsError> for WaveHubError {
    fn from(err: SettingsError) -> Self {
        err.into_domain()
    }
}
