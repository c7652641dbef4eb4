//! UDP adapter error types.

use std::net::SocketAddr;
use std::time::Duration;

use wavehub_domain::error::WaveHubError;

/// Errors specific to the UDP transport.
#[derive(Debug, thiserror::Error)]
pub enum UdpError {
    /// Could not open a local socket.
    #[error("failed to bind UDP socket on {local}")]
    Bind {
        local: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The OS refused the datagram.
    #[error("failed to send datagram to {target}")]
    Send {
        target: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Only part of the payload was written.
    #[error("sent {written} of {expected} bytes to {target}")]
    Truncated {
        target: SocketAddr,
        written: usize,
        expected: usize,
    },

    /// Binding and sending did not complete in time.
    #[error("sending to {target} timed out after {timeout:?}")]
    Timeout { target: SocketAddr, timeout: Duration },
}

impl UdpError {
    /// Convert into a [`WaveHubError::Transmission`] for propagation across
    /// port boundaries.
    #[must_use]
    pub fn into_domain(self) -> WaveHubError {
        WaveHubError::Transmission(Box::new(self))
    }
}

impl From<UdpError> for WaveHubError {
    fn from(err: UdpError) -> Self {
        err.into_domain()
    }
}
