//! Command service — encode a state change and hand it to the transport.

use std::net::IpAddr;

use serde::Serialize;

use wavehub_domain::command::{Brightness, Command, encode};
use wavehub_domain::device::Device;
use wavehub_domain::error::{ValidationError, WaveHubError};
use wavehub_domain::time::{Timestamp, now};

use crate::ports::CommandTransport;
use crate::sequence::SequenceCounter;

/// Record of a command that left the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentCommand {
    pub sequence: u32,
    pub hub: IpAddr,
    pub payload: String,
    pub sent_at: Timestamp,
}

/// Application service owning the sequence counter and the transport.
///
/// Share one instance (behind an `Arc`) across all callers so every command
/// draws from the same counter.
pub struct CommandService<T> {
    transport: T,
    sequence: SequenceCounter,
}

impl<T: CommandTransport> CommandService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_sequence(transport, SequenceCounter::new())
    }

    pub fn with_sequence(transport: T, sequence: SequenceCounter) -> Self {
        Self {
            transport,
            sequence,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &SequenceCounter {
        &self.sequence
    }

    /// Turn a device on or off. Dimmers use the same switch frame.
    ///
    /// # Errors
    ///
    /// Returns [`WaveHubError::Transmission`] when the datagram could not be sent.
    pub async fn set_power(&self, device: &Device, on: bool) -> Result<SentCommand, WaveHubError> {
        tracing::info!(
            device = %device.address(),
            name = device.name(),
            "attempting to turn {}",
            if on { "on" } else { "off" }
        );
        self.dispatch(device, Command::Power(on)).await
    }

    /// Set a dimmer's brightness.
    ///
    /// # Errors
    ///
    /// Returns [`WaveHubError::Validation`] if the device is not a dimmer, or
    /// [`WaveHubError::Transmission`] when the datagram could not be sent.
    pub async fn set_brightness(
        &self,
        device: &Device,
        level: Brightness,
    ) -> Result<SentCommand, WaveHubError> {
        tracing::info!(
            device = %device.address(),
            name = device.name(),
            level = level.percent(),
            "attempting to set brightness"
        );
        self.dispatch(device, Command::Brightness(level)).await
    }

    /// Encode `command` for `device` with the next sequence number and send it.
    ///
    /// The sequence number is consumed even if sending fails.
    ///
    /// # Errors
    ///
    /// Returns [`WaveHubError::Validation`] for a brightness command aimed at
    /// a switch, or [`WaveHubError::Transmission`] propagated from the
    /// transport.
    #[tracing::instrument(skip(self, device), fields(device = %device.address()))]
    pub async fn dispatch(
        &self,
        device: &Device,
        command: Command,
    ) -> Result<SentCommand, WaveHubError> {
        if matches!(command, Command::Brightness(_)) && !device.is_dimmable() {
            return Err(ValidationError::UnsupportedCapability {
                kind: device.kind(),
                capability: command.capability(),
            }
            .into());
        }

        let sequence = self.sequence.next();
        let status_line = command.status_line();
        let payload = encode(
            sequence,
            device.address(),
            command,
            device.name(),
            &status_line,
        );

        tracing::debug!(sequence, %payload, "sending command");
        if let Err(err) = self.transport.send(device.hub(), &payload).await {
            tracing::error!(sequence, error = %err, "command not delivered");
            return Err(err);
        }

        Ok(SentCommand {
            sequence,
            hub: device.hub(),
            payload,
            sent_at: now(),
        })
    }
}
