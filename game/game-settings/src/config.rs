use serde::{Deserialize, Serialize};

/// Presentation settings for a [`crate::GameSettings`] record.
///
/// These are local to a machine and never part of the persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDisplayConfig {
    /// Prefixed to the name of a player whose status is disconnected.
    pub player_disconnected_text: String,
}

impl Default for SettingsDisplayConfig {
    fn default() -> Self {
        Self {
            player_disconnected_text: "Disconnected: ".to_string(),
        }
    }
}

impl SettingsDisplayConfig {
    pub fn to_json_string(&self) -> anyhow::Result<String> {
        let res = serde_json::to_string_pretty(self)?;
        Ok(res)
    }

    pub fn from_json_string(json_str: &str) -> anyhow::Result<Self> {
        let res = serde_json::from_str(json_str)?;
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::SettingsDisplayConfig;

    #[test]
    fn missing_keys_use_defaults() {
        let config = SettingsDisplayConfig::from_json_string("{}").unwrap();
        assert_eq!(config, SettingsDisplayConfig::default());

        let config =
            SettingsDisplayConfig::from_json_string(r#"{"player_disconnected_text":"(gone) "}"#)
                .unwrap();
        assert_eq!(config.player_disconnected_text, "(gone) ");
        assert_eq!(
            SettingsDisplayConfig::from_json_string(&config.to_json_string().unwrap()).unwrap(),
            config
        );
    }
}
