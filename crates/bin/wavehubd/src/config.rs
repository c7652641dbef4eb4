//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `wavehub.toml` in the working directory. Every field has a
//! default so the file is optional, except the hub address which must come
//! from the file or from `WAVEHUB_HUB_ADDRESS`. Environment variables take
//! precedence over file values.

use std::net::IpAddr;
use std::path::PathBuf;

use serde::Deserialize;

use wavehub_adapter_udp::{HUB_COMMAND_PORT, UdpConfig};
use wavehub_domain::registry::RegistryPolicy;
use wavehub_domain::settings::HubSettings;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// The LightwaveRF hub being bridged.
    pub hub: HubConfig,
    /// Where the hub's slot lists come from.
    pub settings: SettingsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Hub connection configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// IP address of the hub on the local network.
    pub address: Option<IpAddr>,
    /// UDP port the hub accepts commands on.
    pub command_port: u16,
    /// Upper bound for handing one command datagram to the OS.
    pub send_timeout_ms: u64,
    /// Local address for outgoing command sockets.
    pub bind_address: Option<IpAddr>,
    /// Reject malformed slot lists instead of skipping what cannot be used.
    pub strict: bool,
}

/// Hub settings source. A `path` wins over the inline lists.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// TOML or JSON document carrying `deviceStatus` and `deviceNames`.
    pub path: Option<PathBuf>,
    /// Inline status codes, one per slot.
    pub device_status: Vec<String>,
    /// Inline device names, one per slot.
    pub device_names: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `wavehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// override cannot be parsed, or if the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("wavehub.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("WAVEHUB_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("WAVEHUB_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("WAVEHUB_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("WAVEHUB_HUB_ADDRESS") {
            let address = val.parse().map_err(|_| {
                ConfigError::Validation(format!("WAVEHUB_HUB_ADDRESS is not an IP address: {val}"))
            })?;
            self.hub.address = Some(address);
        }
        if let Some(val) = var("WAVEHUB_SETTINGS_PATH") {
            self.settings.path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("WAVEHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.hub.command_port == 0 {
            return Err(ConfigError::Validation(
                "hub command port must be non-zero".to_string(),
            ));
        }
        if self.hub.send_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "hub send timeout must be non-zero".to_string(),
            ));
        }
        self.hub_address()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the configured hub address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when no address was configured.
    pub fn hub_address(&self) -> Result<IpAddr, ConfigError> {
        self.hub.address.ok_or_else(|| {
            ConfigError::Validation(
                "hub address must be set in [hub] or WAVEHUB_HUB_ADDRESS".to_string(),
            )
        })
    }
}

impl HubConfig {
    #[must_use]
    pub fn udp_config(&self) -> UdpConfig {
        UdpConfig {
            command_port: self.command_port,
            send_timeout_ms: self.send_timeout_ms,
            bind_address: self.bind_address,
        }
    }

    #[must_use]
    pub fn policy(&self) -> RegistryPolicy {
        if self.strict {
            RegistryPolicy::Strict
        } else {
            RegistryPolicy::Lenient
        }
    }
}

impl SettingsConfig {
    /// The inline lists as a settings document.
    #[must_use]
    pub fn inline(&self) -> HubSettings {
        HubSettings {
            device_status: self.device_status.clone(),
            device_names: self.device_names.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        let udp = UdpConfig::default();
        Self {
            address: None,
            command_port: HUB_COMMAND_PORT,
            send_timeout_ms: udp.send_timeout_ms,
            bind_address: udp.bind_address,
            strict: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "wavehubd=info,wavehub=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
