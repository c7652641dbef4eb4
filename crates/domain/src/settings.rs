//! Hub settings — the parts of the hub's configuration document the bridge reads.

use serde::{Deserialize, Serialize};

/// Parallel, index-aligned slot lists published by the hub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubSettings {
    /// One status code per slot (`D`, `O`, `I`, `m`, `M`, `o`).
    #[serde(default)]
    pub device_status: Vec<String>,
    /// One display name per slot.
    #[serde(default)]
    pub device_names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_upstream_field_names() {
        let json = r#"{"deviceStatus": ["D", "O"], "deviceNames": ["Lamp", "Fan"]}"#;
        let settings: HubSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.device_status, vec!["D", "O"]);
        assert_eq!(settings.device_names, vec!["Lamp", "Fan"]);
    }

    #[test]
    fn should_default_missing_lists_to_empty() {
        let settings: HubSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.device_status.is_empty());
        assert!(settings.device_names.is_empty());
    }
}
