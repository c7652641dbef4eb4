//! Bridge service — keeps the current device set and serves the host contract.
//!
//! A refresh pulls the hub settings, derives a fresh [`Registry`], and swaps
//! the whole device set. Capability updates look a device up by address and
//! forward the resulting command to the [`CommandService`].

use std::net::IpAddr;
use std::sync::{Arc, PoisonError, RwLock};

use wavehub_domain::accessory::{Accessory, CapabilityUpdate};
use wavehub_domain::command::Command;
use wavehub_domain::device::{Device, DeviceAddress};
use wavehub_domain::error::{NotFoundError, WaveHubError};
use wavehub_domain::registry::{Registry, RegistryPolicy};

use crate::ports::{CommandTransport, SettingsSource};
use crate::services::command_service::{CommandService, SentCommand};

/// Application service bridging one hub to the accessory host.
pub struct BridgeService<S, T> {
    source: S,
    commands: Arc<CommandService<T>>,
    hub: IpAddr,
    policy: RegistryPolicy,
    devices: RwLock<Vec<Device>>,
}

impl<S, T> BridgeService<S, T>
where
    S: SettingsSource,
    T: CommandTransport,
{
    /// Create a bridge with an empty device set. Call [`refresh`](Self::refresh)
    /// to populate it.
    pub fn new(
        source: S,
        commands: Arc<CommandService<T>>,
        hub: IpAddr,
        policy: RegistryPolicy,
    ) -> Self {
        Self {
            source,
            commands,
            hub,
            policy,
            devices: RwLock::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn hub(&self) -> IpAddr {
        self.hub
    }

    #[must_use]
    pub fn commands(&self) -> &Arc<CommandService<T>> {
        &self.commands
    }

    /// Fetch the hub settings and replace the device set.
    ///
    /// On failure the device set is emptied: zero devices is the degraded
    /// state, not a fatal one.
    ///
    /// # Errors
    ///
    /// Returns [`WaveHubError::Upstream`] when the settings could not be
    /// fetched, or [`WaveHubError::MalformedStatusList`] when the strict
    /// policy rejects them.
    #[tracing::instrument(skip(self), fields(hub = %self.hub))]
    pub async fn refresh(&self) -> Result<usize, WaveHubError> {
        tracing::info!("fetching hub settings");
        let registry = self.source.fetch().await.and_then(|settings| {
            Registry::from_settings(&settings, self.hub, self.policy)
        });

        match registry {
            Ok(registry) => {
                for slot in registry.skipped() {
                    tracing::warn!(
                        index = slot.index,
                        code = %slot.code,
                        "skipping slot with unknown status code"
                    );
                }
                let count = registry.devices().len();
                self.replace(registry.into_devices());
                tracing::info!(count, "device registry refreshed");
                Ok(count)
            }
            Err(err) => {
                self.replace(Vec::new());
                tracing::error!(
                    error = %err,
                    "could not refresh device registry, no devices available"
                );
                Err(err)
            }
        }
    }

    /// Snapshot of the current devices, in slot order.
    #[must_use]
    pub fn devices(&self) -> Vec<Device> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn accessories(&self) -> Vec<Accessory> {
        self.devices()
            .into_iter()
            .map(Accessory::from_device)
            .collect()
    }

    /// Look up the accessory registered at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveHubError::NotFound`] when no device has that address.
    pub fn accessory(&self, address: DeviceAddress) -> Result<Accessory, WaveHubError> {
        self.device(address).map(Accessory::from_device)
    }

    /// Apply a host write to the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveHubError::NotFound`] for an unknown address,
    /// [`WaveHubError::Validation`] for an update the device cannot accept,
    /// or [`WaveHubError::Transmission`] when the command could not be sent.
    pub async fn update(
        &self,
        address: DeviceAddress,
        update: CapabilityUpdate,
    ) -> Result<SentCommand, WaveHubError> {
        let accessory = self.accessory(address)?;
        match accessory.command_for(update)? {
            Command::Power(on) => self.commands.set_power(&accessory.device, on).await,
            Command::Brightness(level) => {
                self.commands
                    .set_brightness(&accessory.device, level)
                    .await
            }
        }
    }

    fn device(&self, address: DeviceAddress) -> Result<Device, WaveHubError> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|d| d.address() == address)
            .cloned()
            .ok_or_else(|| NotFoundError { address }.into())
    }

    fn replace(&self, devices: Vec<Device>) {
        *self.devices.write().unwrap_or_else(PoisonError::into_inner) = devices;
    }
}
