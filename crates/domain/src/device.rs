//! Device — a controllable slot on the hub, addressed by room and position.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of device slots the hub reserves for each room.
pub const SLOTS_PER_ROOM: usize = 10;

/// What a device can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// On/off plus a 0–100 % brightness level.
    Dimmer,
    /// On/off only.
    Switch,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimmer => f.write_str("dimmer"),
            Self::Switch => f.write_str("switch"),
        }
    }
}

/// The hub's two-level address: 1-based room, 1-based position in the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceAddress {
    pub room: u32,
    pub device: u8,
}

impl DeviceAddress {
    /// Derive the address of the slot at `index` (zero-based) in the flat list.
    ///
    /// `room = index / 10 + 1`, `device = index - 10 * (room - 1) + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SlotIndexOverflow`] when the room number
    /// does not fit in a `u32`.
    pub fn from_slot_index(index: usize) -> Result<Self, ValidationError> {
        let overflow = || ValidationError::SlotIndexOverflow(index);
        let room = u32::try_from(index / SLOTS_PER_ROOM)
            .ok()
            .and_then(|r| r.checked_add(1))
            .ok_or_else(overflow)?;
        let device = u8::try_from(index % SLOTS_PER_ROOM + 1).map_err(|_| overflow())?;
        Ok(Self { room, device })
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}D{}", self.room, self.device)
    }
}

/// A controllable device registered on a hub.
///
/// Built once per settings refresh and never mutated; a refresh replaces the
/// whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    address: DeviceAddress,
    name: String,
    kind: DeviceKind,
    hub: IpAddr,
}

impl Device {
    #[must_use]
    pub fn new(
        address: DeviceAddress,
        name: impl Into<String>,
        kind: DeviceKind,
        hub: IpAddr,
    ) -> Self {
        Self {
            address,
            name: name.into(),
            kind,
            hub,
        }
    }

    #[must_use]
    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Network address of the hub that owns this device.
    #[must_use]
    pub fn hub(&self) -> IpAddr {
        self.hub
    }

    #[must_use]
    pub fn is_dimmable(&self) -> bool {
        self.kind == DeviceKind::Dimmer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn should_address_first_slot_as_room_one_device_one() {
        let addr = DeviceAddress::from_slot_index(0).unwrap();
        assert_eq!(addr, DeviceAddress { room: 1, device: 1 });
    }

    #[test]
    fn should_cycle_device_numbers_every_ten_slots() {
        for index in 0..100 {
            let addr = DeviceAddress::from_slot_index(index).unwrap();
            let expected_room = u32::try_from(index / 10 + 1).unwrap();
            let expected_device = u8::try_from(index - 10 * (index / 10) + 1).unwrap();
            assert_eq!(addr.room, expected_room, "index {index}");
            assert_eq!(addr.device, expected_device, "index {index}");
            assert!((1..=10).contains(&addr.device));
        }
    }

    #[test]
    fn should_start_new_room_at_slot_ten() {
        assert_eq!(
            DeviceAddress::from_slot_index(9).unwrap(),
            DeviceAddress { room: 1, device: 10 }
        );
        assert_eq!(
            DeviceAddress::from_slot_index(10).unwrap(),
            DeviceAddress { room: 2, device: 1 }
        );
    }

    #[test]
    fn should_display_hub_style_address() {
        let addr = DeviceAddress { room: 3, device: 2 };
        assert_eq!(addr.to_string(), "R3D2");
    }

    #[test]
    fn should_report_dimmable_only_for_dimmers() {
        let hub = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 50));
        let addr = DeviceAddress { room: 1, device: 1 };
        assert!(Device::new(addr, "Lamp", DeviceKind::Dimmer, hub).is_dimmable());
        assert!(!Device::new(addr, "Fan", DeviceKind::Switch, hub).is_dimmable());
    }

    #[test]
    fn should_serialize_kind_as_lowercase() {
        let json = serde_json::to_string(&DeviceKind::Dimmer).unwrap();
        assert_eq!(json, "\"dimmer\"");
    }
}
