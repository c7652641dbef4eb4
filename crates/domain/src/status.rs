//! Slot status — what occupies a position in the hub's flat device list.

use serde::{Deserialize, Serialize};

use crate::device::DeviceKind;

/// Decoded status code of a single hub slot.
///
/// The hub publishes one single-character code per slot. Only dimmers and
/// switches become devices; every other code is a slot the bridge skips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// `D`: a dimmable light.
    Dimmer,
    /// `O`: an on/off device.
    Switch,
    /// `I`: an empty or inactive slot.
    Inactive,
    /// `m` / `M`: a mood preset.
    Mood,
    /// `o`: the room's all-off function.
    AllOff,
    /// Anything the hub is not known to emit.
    Unknown(String),
}

impl SlotStatus {
    /// Decode a status code. Total: unrecognised codes map to [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code {
            "D" => Self::Dimmer,
            "O" => Self::Switch,
            "I" => Self::Inactive,
            "m" | "M" => Self::Mood,
            "o" => Self::AllOff,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The kind of device this slot holds, if it is controllable.
    #[must_use]
    pub fn device_kind(&self) -> Option<DeviceKind> {
        match self {
            Self::Dimmer => Some(DeviceKind::Dimmer),
            Self::Switch => Some(DeviceKind::Switch),
            Self::Inactive | Self::Mood | Self::AllOff | Self::Unknown(_) => None,
        }
    }
}

impl From<char> for SlotStatus {
    fn from(code: char) -> Self {
        let mut buf = [0u8; 4];
        Self::parse(code.encode_utf8(&mut buf))
    }
}
