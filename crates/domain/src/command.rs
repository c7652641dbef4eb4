//! Command encoding — the ASCII payload the hub accepts on its UDP port.
//!
//! ```text
//! <sequence>,!R<room>D<device>F<cmd>|<top line>|<bottom line>
//! ```
//!
//! `<cmd>` is `1` / `0` for power, or `dP<level>` for brightness, where
//! `level` is the hub's native 0–32 scale.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::device::DeviceAddress;
use crate::error::ValidationError;

/// Highest brightness step the hub understands.
pub const HUB_MAX_LEVEL: u8 = 32;

/// A brightness percentage, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    pub const MAX: u8 = 100;

    /// # Errors
    ///
    /// Returns [`ValidationError::BrightnessOutOfRange`] when `percent > 100`.
    pub fn new(percent: u8) -> Result<Self, ValidationError> {
        if percent > Self::MAX {
            return Err(ValidationError::BrightnessOutOfRange(percent.into()));
        }
        Ok(Self(percent))
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Scale to the hub's 0–32 range: `round(percent * 0.32)`.
    #[must_use]
    pub fn hub_level(self) -> u8 {
        // 32 * p / 100, rounded half up. Integer percentages never land on .5.
        let scaled = (u16::from(self.0) * u16::from(HUB_MAX_LEVEL) + 50) / 100;
        u8::try_from(scaled).unwrap_or(HUB_MAX_LEVEL)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValidationError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<Brightness> for u8 {
    fn from(b: Brightness) -> Self {
        b.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A desired state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Switch frame: `F1` on, `F0` off. Valid for every device kind.
    Power(bool),
    /// Dimmer frame: `FdP<level>`. Valid for dimmers only.
    Brightness(Brightness),
}

impl Command {
    /// Conventional bottom display line: `On`/`Off`, or the percentage.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self {
            Self::Power(true) => "On".to_string(),
            Self::Power(false) => "Off".to_string(),
            Self::Brightness(level) => level.to_string(),
        }
    }

    /// Name of the capability this command drives.
    #[must_use]
    pub fn capability(&self) -> &'static str {
        match self {
            Self::Power(_) => "power",
            Self::Brightness(_) => "brightness",
        }
    }
}

/// One fully-addressed command, ready to render into a datagram payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame<'a> {
    pub sequence: u32,
    pub address: DeviceAddress,
    pub command: Command,
    pub top_line: &'a str,
    pub bottom_line: &'a str,
}

impl fmt::Display for CommandFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},!R{}D{}F",
            self.sequence, self.address.room, self.address.device
        )?;
        match self.command {
            Command::Power(true) => f.write_str("1")?,
            Command::Power(false) => f.write_str("0")?,
            Command::Brightness(level) => write!(f, "dP{}", level.hub_level())?,
        }
        write!(f, "|{}|{}", self.top_line, self.bottom_line)
    }
}

/// Render a command into its wire string. Pure: the caller owns the sequence.
#[must_use]
pub fn encode(
    sequence: u32,
    address: DeviceAddress,
    command: Command,
    top_line: &str,
    bottom_line: &str,
) -> String {
    CommandFrame {
        sequence,
        address,
        command,
        top_line,
        bottom_line,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(room: u32, device: u8) -> DeviceAddress {
        DeviceAddress { room, device }
    }

    fn level(percent: u8) -> Brightness {
        Brightness::new(percent).unwrap()
    }

    #[test]
    fn should_encode_switch_on() {
        let wire = encode(5, addr(3, 2), Command::Power(true), "Lamp", "On");
        assert_eq!(wire, "5,!R3D2F1|Lamp|On");
    }

    #[test]
    fn should_encode_switch_off() {
        let wire = encode(5, addr(3, 2), Command::Power(false), "Lamp", "Off");
        assert_eq!(wire, "5,!R3D2F0|Lamp|Off");
    }

    #[test]
    fn should_encode_dimmer_at_half_brightness() {
        let wire = encode(0, addr(1, 1), Command::Brightness(level(50)), "Lamp", "50");
        assert_eq!(wire, "0,!R1D1FdP16|Lamp|50");
    }

    #[test]
    fn should_scale_full_brightness_to_hub_maximum() {
        assert_eq!(level(100).hub_level(), 32);
        let wire = encode(9, addr(2, 10), Command::Brightness(level(100)), "Hall", "100");
        assert_eq!(wire, "9,!R2D10FdP32|Hall|100");
    }

    #[test]
    fn should_scale_zero_brightness_to_zero() {
        assert_eq!(level(0).hub_level(), 0);
    }

    #[test]
    fn should_round_to_nearest_hub_level() {
        // 0.32, 0.64, 1.6, 15.68, 31.68
        assert_eq!(level(1).hub_level(), 0);
        assert_eq!(level(2).hub_level(), 1);
        assert_eq!(level(5).hub_level(), 2);
        assert_eq!(level(49).hub_level(), 16);
        assert_eq!(level(99).hub_level(), 32);
    }

    #[test]
    fn should_match_float_rounding_for_every_percentage() {
        for percent in 0..=100u8 {
            let expected = (f64::from(percent) * 0.32).round();
            assert!(
                (f64::from(level(percent).hub_level()) - expected).abs() < f64::EPSILON,
                "percent {percent}"
            );
        }
    }

    #[test]
    fn should_reject_brightness_above_hundred() {
        assert_eq!(
            Brightness::new(101),
            Err(ValidationError::BrightnessOutOfRange(101))
        );
    }

    #[test]
    fn should_encode_identically_for_identical_inputs() {
        let a = encode(7, addr(4, 4), Command::Power(true), "Den", "On");
        let b = encode(7, addr(4, 4), Command::Power(true), "Den", "On");
        assert_eq!(a, b);
    }

    #[test]
    fn should_pass_labels_through_verbatim() {
        let wire = encode(1, addr(1, 3), Command::Power(false), "Kitchen Spots", "");
        assert_eq!(wire, "1,!R1D3F0|Kitchen Spots|");
    }

    #[test]
    fn should_produce_conventional_status_lines() {
        assert_eq!(Command::Power(true).status_line(), "On");
        assert_eq!(Command::Power(false).status_line(), "Off");
        assert_eq!(Command::Brightness(level(42)).status_line(), "42");
    }

    #[test]
    fn should_deserialize_brightness_with_validation() {
        let ok: Brightness = serde_json::from_str("75").unwrap();
        assert_eq!(ok.percent(), 75);
        assert!(serde_json::from_str::<Brightness>("150").is_err());
    }
}
