//! # wavehub-adapter-udp
//!
//! Command transport for the LightwaveRF hub.
//!
//! ## How it works
//!
//! The hub accepts plain-text commands on UDP port 9760 and never answers
//! them in a way the bridge relies on. Each send opens a fresh socket, hands
//! the payload to the OS as one datagram, and drops the socket. The whole
//! bind-and-send step is bounded by [`UdpConfig::send_timeout_ms`] so a
//! wedged network stack cannot pile up sockets.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `wavehub-app` and `wavehub-domain`.

mod config;
mod error;

pub use config::{HUB_COMMAND_PORT, UdpConfig};
pub use error::UdpError;

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use tokio::net::UdpSocket;

use wavehub_app::ports::CommandTransport;
use wavehub_domain::error::WaveHubError;

/// Sends command datagrams to a hub over UDP.
#[derive(Debug, Clone, Default)]
pub struct UdpTransport {
    config: UdpConfig,
}

impl UdpTransport {
    #[must_use]
    pub fn new(config: UdpConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &UdpConfig {
        &self.config
    }

    fn local_addr(&self, target: SocketAddr) -> SocketAddr {
        let ip = self.config.bind_address.unwrap_or(match target {
            SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        });
        SocketAddr::new(ip, 0)
    }

    async fn send_datagram(&self, target: SocketAddr, bytes: &[u8]) -> Result<(), UdpError> {
        let local = self.local_addr(target);
        let socket = UdpSocket::bind(local)
            .await
            .map_err(|source| UdpError::Bind { local, source })?;

        let written = socket
            .send_to(bytes, target)
            .await
            .map_err(|source| UdpError::Send { target, source })?;
        if written != bytes.len() {
            return Err(UdpError::Truncated {
                target,
                written,
                expected: bytes.len(),
            });
        }

        tracing::debug!(%target, bytes = written, "datagram sent");
        Ok(())
    }
}

impl CommandTransport for UdpTransport {
    async fn send(&self, hub: IpAddr, payload: &str) -> Result<(), WaveHubError> {
        let target = SocketAddr::new(hub, self.config.command_port);
        let timeout = self.config.send_timeout();
        let send = self.send_datagram(target, payload.as_bytes());
        Ok(bounded(target, timeout, send).await?)
    }
}

/// Runs `send` to completion or fails with [`UdpError::Timeout`] once
/// `timeout` has elapsed.
async fn bounded<F>(target: SocketAddr, timeout: Duration, send: F) -> Result<(), UdpError>
where
    F: Future<Output = Result<(), UdpError>>,
{
    tokio::time::timeout(timeout, send)
        .await
        .map_err(|_| UdpError::Timeout { target, timeout })?
}
