//! UDP transport configuration.

use std::net::IpAddr;
use std::time::Duration;

use serde::Deserialize;

/// Port the hub listens on for command datagrams.
pub const HUB_COMMAND_PORT: u16 = 9760;

/// Configuration for the UDP command transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UdpConfig {
    /// Destination port on the hub.
    pub command_port: u16,
    /// Upper bound for binding a socket and handing it the datagram, in milliseconds.
    pub send_timeout_ms: u64,
    /// Local address to bind each socket to. Defaults to the unspecified
    /// address of the hub's address family.
    pub bind_address: Option<IpAddr>,
}

impl UdpConfig {
    #[must_use]
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }
}

impl Default for UdpConfig {
    fn default() -> Self {
        Self {
            command_port: HUB_COMMAND_PORT,
            send_timeout_ms: 500,
            bind_address: None,
        }
    }
}
