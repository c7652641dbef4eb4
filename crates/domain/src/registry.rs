//! Registry builder — turns the hub's flat slot lists into addressed devices.
//!
//! The hub lays rooms out as consecutive runs of [`SLOTS_PER_ROOM`] slots, so
//! a device's address is a pure function of its index. Building is
//! deterministic and side-effect free; devices come out in slot order.
//!
//! [`SLOTS_PER_ROOM`]: crate::device::SLOTS_PER_ROOM

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceAddress};
use crate::error::{MalformedStatusList, WaveHubError};
use crate::settings::HubSettings;
use crate::status::SlotStatus;

/// How to treat lists the hub should never produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryPolicy {
    /// Skip unknown codes and substitute placeholder names for missing ones.
    #[default]
    Lenient,
    /// Reject the whole list on a length mismatch or an unknown code.
    Strict,
}

/// A slot that did not become a device because its code was not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSlot {
    pub index: usize,
    pub code: String,
}

/// Devices derived from one settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    devices: Vec<Device>,
    skipped: Vec<SkippedSlot>,
}

impl Registry {
    /// Build the registry from index-aligned status and name lists.
    ///
    /// # Errors
    ///
    /// Under [`RegistryPolicy::Strict`], returns
    /// [`MalformedStatusList::LengthMismatch`] when the lists differ in
    /// length and [`MalformedStatusList::UnknownCode`] for the first
    /// unrecognised code. Under either policy, returns a validation error if
    /// a slot index cannot be addressed.
    pub fn build<S, N>(
        statuses: &[S],
        names: &[N],
        hub: IpAddr,
        policy: RegistryPolicy,
    ) -> Result<Self, WaveHubError>
    where
        S: AsRef<str>,
        N: AsRef<str>,
    {
        if policy == RegistryPolicy::Strict && statuses.len() != names.len() {
            return Err(MalformedStatusList::LengthMismatch {
                statuses: statuses.len(),
                names: names.len(),
            }
            .into());
        }

        let mut registry = Self::default();
        for (index, code) in statuses.iter().enumerate() {
            let kind = match SlotStatus::parse(code.as_ref()) {
                SlotStatus::Unknown(code) => {
                    if policy == RegistryPolicy::Strict {
                        return Err(MalformedStatusList::UnknownCode { index, code }.into());
                    }
                    registry.skipped.push(SkippedSlot { index, code });
                    continue;
                }
                status => match status.device_kind() {
                    Some(kind) => kind,
                    None => continue,
                },
            };

            let address = DeviceAddress::from_slot_index(index)?;
            let name = names.get(index).map_or_else(
                || placeholder_name(address),
                |name| name.as_ref().to_string(),
            );
            registry.devices.push(Device::new(address, name, kind, hub));
        }

        Ok(registry)
    }

    /// Build the registry from a settings document.
    ///
    /// # Errors
    ///
    /// See [`Registry::build`].
    pub fn from_settings(
        settings: &HubSettings,
        hub: IpAddr,
        policy: RegistryPolicy,
    ) -> Result<Self, WaveHubError> {
        Self::build(&settings.device_status, &settings.device_names, hub, policy)
    }

    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Slots with unrecognised codes (lenient policy only).
    #[must_use]
    pub fn skipped(&self) -> &[SkippedSlot] {
        &self.skipped
    }

    #[must_use]
    pub fn into_devices(self) -> Vec<Device> {
        self.devices
    }
}

fn placeholder_name(address: DeviceAddress) -> String {
    format!("Room {} Device {}", address.room, address.device)
}
