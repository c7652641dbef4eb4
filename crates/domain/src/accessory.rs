//! Accessory — what a host bridge registers for each device.
//!
//! Every device exposes an *accessory information* service and a *lightbulb*
//! service. The lightbulb carries a writable power characteristic and, for
//! dimmers only, a writable brightness characteristic. Writes arrive as
//! [`CapabilityUpdate`]s and are turned into [`Command`]s.

use serde::{Deserialize, Serialize};

use crate::command::{Brightness, Command};
use crate::device::{Device, DeviceKind};
use crate::error::ValidationError;

const MANUFACTURER: &str = "LightwaveRF";
const MODEL: &str = "Rev-1";
const MAX_STRING_LENGTH: u16 = 255;

/// Service grouping reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    AccessoryInformation,
    Lightbulb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacteristicKind {
    Name,
    Manufacturer,
    Model,
    SerialNumber,
    Identify,
    PowerState,
    Brightness,
}

/// What the host may do with a characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Read,
    Write,
    Notify,
}

/// Current or initial value of a characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacteristicValue {
    Bool(bool),
    Int(u8),
    String(String),
}

/// Inclusive numeric bounds for integer characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u8,
    pub max: u8,
    pub step: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Characteristic {
    pub kind: CharacteristicKind,
    pub permissions: Vec<Permission>,
    pub value: CharacteristicValue,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<ValueRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

impl Characteristic {
    fn read_only(
        kind: CharacteristicKind,
        value: impl Into<String>,
        description: &'static str,
    ) -> Self {
        Self {
            kind,
            permissions: vec![Permission::Read],
            value: CharacteristicValue::String(value.into()),
            description,
            max_length: Some(MAX_STRING_LENGTH),
            range: None,
            unit: None,
        }
    }

    /// Whether the host is allowed to write this characteristic.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.permissions.contains(&Permission::Write)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub kind: ServiceKind,
    pub characteristics: Vec<Characteristic>,
}

/// A write from the host to one of a device's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "capability", rename_all = "snake_case")]
pub enum CapabilityUpdate {
    Power { on: bool },
    Brightness { level: u16 },
}

/// A device together with the services it reports to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accessory {
    pub device: Device,
    pub services: Vec<Service>,
}

impl Accessory {
    #[must_use]
    pub fn from_device(device: Device) -> Self {
        let services = vec![information_service(&device), lightbulb_service(&device)];
        Self { device, services }
    }

    /// Find a characteristic across all services.
    #[must_use]
    pub fn characteristic(&self, kind: CharacteristicKind) -> Option<&Characteristic> {
        self.services
            .iter()
            .flat_map(|s| s.characteristics.iter())
            .find(|c| c.kind == kind)
    }

    /// Translate a host write into a hub command.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedCapability`] for a brightness
    /// write to a switch, and [`ValidationError::BrightnessOutOfRange`] when
    /// the level exceeds 100.
    pub fn command_for(&self, update: CapabilityUpdate) -> Result<Command, ValidationError> {
        match update {
            CapabilityUpdate::Power { on } => Ok(Command::Power(on)),
            CapabilityUpdate::Brightness { level } => {
                if !self.device.is_dimmable() {
                    return Err(ValidationError::UnsupportedCapability {
                        kind: self.device.kind(),
                        capability: "brightness",
                    });
                }
                let percent = u8::try_from(level)
                    .map_err(|_| ValidationError::BrightnessOutOfRange(level))?;
                Ok(Command::Brightness(Brightness::new(percent)?))
            }
        }
    }
}

fn information_service(device: &Device) -> Service {
    Service {
        kind: ServiceKind::AccessoryInformation,
        characteristics: vec![
            Characteristic::read_only(
                CharacteristicKind::Name,
                device.name(),
                "Name of the accessory",
            ),
            Characteristic::read_only(
                CharacteristicKind::Manufacturer,
                MANUFACTURER,
                "Manufacturer",
            ),
            Characteristic::read_only(CharacteristicKind::Model, MODEL, "Model"),
            Characteristic::read_only(
                CharacteristicKind::SerialNumber,
                device.address().to_string(),
                "SN",
            ),
            Characteristic {
                kind: CharacteristicKind::Identify,
                permissions: vec![Permission::Write],
                value: CharacteristicValue::Bool(false),
                description: "Identify Accessory",
                max_length: Some(1),
                range: None,
                unit: None,
            },
        ],
    }
}

fn lightbulb_service(device: &Device) -> Service {
    let mut characteristics = vec![
        Characteristic {
            permissions: vec![Permission::Read, Permission::Notify],
            ..Characteristic::read_only(CharacteristicKind::Name, device.name(), "Name of service")
        },
        Characteristic {
            kind: CharacteristicKind::PowerState,
            permissions: vec![Permission::Write, Permission::Read, Permission::Notify],
            value: CharacteristicValue::Bool(false),
            description: "Change the power state of the Bulb",
            max_length: Some(1),
            range: None,
            unit: None,
        },
    ];

    if device.kind() == DeviceKind::Dimmer {
        characteristics.push(Characteristic {
            kind: CharacteristicKind::Brightness,
            permissions: vec![Permission::Write, Permission::Read, Permission::Notify],
            value: CharacteristicValue::Int(0),
            description: "Adjust Brightness of Light",
            max_length: None,
            range: Some(ValueRange {
                min: 0,
                max: Brightness::MAX,
                step: 1,
            }),
            unit: Some("%"),
        });
    }

    Service {
        kind: ServiceKind::Lightbulb,
        characteristics,
    }
}
