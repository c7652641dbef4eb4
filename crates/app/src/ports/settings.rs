//! Settings port — retrieval of the hub's configuration document.

use std::future::Future;

use wavehub_domain::error::WaveHubError;
use wavehub_domain::settings::HubSettings;

/// Supplies the hub's slot status and name lists.
///
/// Failures are reported as [`WaveHubError::Upstream`].
pub trait SettingsSource {
    fn fetch(&self) -> impl Future<Output = Result<HubSettings, WaveHubError>> + Send;
}

impl<T: SettingsSource + Send + Sync> SettingsSource for std::sync::Arc<T> {
    fn fetch(&self) -> impl Future<Output = Result<HubSettings, WaveHubError>> + Send {
        (**self).fetch()
    }
}
