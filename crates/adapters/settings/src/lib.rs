//! # wavehub-adapter-settings
//!
//! [`SettingsSource`] implementations that supply the hub's slot lists.
//!
//! | Source | Backing | Use |
//! |--------|---------|-----|
//! | [`FileSettingsSource`] | TOML or JSON file, re-read on every fetch | A saved copy of the hub's configuration document |
//! | [`StaticSettingsSource`] | In-memory [`HubSettings`] | Lists written straight into `wavehub.toml`, tests |
//!
//! Both documents use the hub's field names:
//!
//! ```toml
//! deviceStatus = ["D", "O", "I", "m"]
//! deviceNames = ["Lounge", "Lamp", "", "Evening"]
//! ```
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `wavehub-app` and `wavehub-domain`.

mod error;

pub use error::SettingsError;

use std::path::{Path, PathBuf};

use wavehub_app::ports::SettingsSource;
use wavehub_domain::error::WaveHubError;
use wavehub_domain::settings::HubSettings;

/// Reads the settings document from disk on every fetch.
///
/// Files ending in `.json` are parsed as JSON; anything else as TOML.
#[derive(Debug, Clone)]
pub struct FileSettingsSource {
    path: PathBuf,
}

impl FileSettingsSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HubSettings, SettingsError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SettingsError::Io {
                path: self.path.clone(),
                source,
            })?;

        let is_json = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let settings = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Ok(settings)
    }
}

impl SettingsSource for FileSettingsSource {
    async fn fetch(&self) -> Result<HubSettings, WaveHubError> {
        tracing::debug!(path = %self.path.display(), "reading hub settings document");
        Ok(self.load().await?)
    }
}

/// Serves a fixed settings document.
#[derive(Debug, Clone, Default)]
pub struct StaticSettingsSource {
    settings: HubSettings,
}

impl StaticSettingsSource {
    #[must_use]
    pub fn new(settings: HubSettings) -> Self {
        Self { settings }
    }
}

impl SettingsSource for StaticSettingsSource {
    async fn fetch(&self) -> Result<HubSettings, WaveHubError> {
        Ok(self.settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write_document(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn should_read_toml_document() {
        let dir = TempDir::new().unwrap();
        let path = write_document(
            &dir,
            "hub.toml",
            r#"
                deviceStatus = ["D", "O", "I"]
                deviceNames = ["Lounge", "Lamp", ""]
            "#,
        );
        let settings = FileSettingsSource::new(&path).fetch().await.unwrap();
        assert_eq!(settings.device_status, vec!["D", "O", "I"]);
        assert_eq!(settings.device_names, vec!["Lounge", "Lamp", ""]);
    }

    #[tokio::test]
    async fn should_read_json_document() {
        let dir = TempDir::new().unwrap();
        let path = write_document(
            &dir,
            "hub.json",
            r#"{"deviceStatus": ["O"], "deviceNames": ["Porch"]}"#,
        );
        let settings = FileSettingsSource::new(&path).fetch().await.unwrap();
        assert_eq!(settings.device_status, vec!["O"]);
        assert_eq!(settings.device_names, vec!["Porch"]);
    }

    #[tokio::test]
    async fn should_report_missing_file_as_upstream_error() {
        let dir = TempDir::new().unwrap();
        let source = FileSettingsSource::new(dir.path().join("missing.toml"));
        let result = source.fetch().await;
        assert!(matches!(result, Err(WaveHubError::Upstream(_))));
    }

    #[tokio::test]
    async fn should_report_malformed_document_as_upstream_error() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir, "broken.toml", "deviceStatus = [");
        let result = FileSettingsSource::new(&path).fetch().await;
        assert!(matches!(result, Err(WaveHubError::Upstream(_))));
    }

    #[tokio::test]
    async fn should_serve_static_settings() {
        let settings = HubSettings {
            device_status: vec!["D".to_string()],
            device_names: vec!["Hall".to_string()],
        };
        let source = StaticSettingsSource::new(settings.clone());
        assert_eq!(source.fetch().await.unwrap(), settings);
    }
}
