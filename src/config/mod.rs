mod file_handler;

use crate::error::ConfigError;

use file_handler::ConfigFileHandler;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "config";

/// Presentation options only. Feed content is never configurable.
#[derive(Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub accent_color: String,
    pub unicode_icons: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            accent_color: String::from("red"),
            unicode_icons: true,
        }
    }
}

pub struct UiConfigHandler {
    config: UiConfig,
}

impl UiConfigHandler {
    pub async fn load() -> Result<Self, ConfigError> {
        let mut file_handler = ConfigFileHandler::from_config_file(CONFIG_NAME).await?;
        let config = file_handler.read().await?;

        Ok(Self { config })
    }

    pub fn config(&self) -> UiConfig {
        self.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = UiConfig::default();
        assert_eq!(config.accent_color, "red");
        assert!(config.unicode_icons);
    }

    #[test]
    fn config_parses_from_toml() {
        let config: UiConfig = toml::from_str(
            "accent_color = \"cyan\"\n\
             unicode_icons = false\n",
        )
        .unwrap();
        assert_eq!(config.accent_color, "cyan");
        assert!(!config.unicode_icons);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = toml::to_string(&UiConfig::default()).unwrap();
        let config: UiConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config.accent_color, "red");
        assert!(config.unicode_icons);
    }
}
