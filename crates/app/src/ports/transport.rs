//! Transport port — one-way delivery of command payloads to a hub.

use std::future::Future;
use std::net::IpAddr;

use wavehub_domain::error::WaveHubError;

/// Delivers an encoded command string to a hub.
///
/// Delivery is fire-and-forget at the protocol level: nothing is read back
/// from the hub. Implementations still report local failures (socket
/// errors, timeouts) as [`WaveHubError::Transmission`] so callers can decide
/// whether to retry.
pub trait CommandTransport {
    /// Send `payload` as a single datagram to `hub`.
    fn send(
        &self,
        hub: IpAddr,
        payload: &str,
    ) -> impl Future<Output = Result<(), WaveHubError>> + Send;
}

impl<T: CommandTransport + Send + Sync> CommandTransport for std::sync::Arc<T> {
    fn send(
        &self,
        hub: IpAddr,
        payload: &str,
    ) -> impl Future<Output = Result<(), WaveHubError>> + Send {
        (**self).send(hub, payload)
    }
}
