use super::UiConfig;
use crate::error::ConfigError;

use std::{io, path::PathBuf};
use tokio::{fs, fs::File, io::AsyncWriteExt};

const APP_DIR: &str = "tuitube";

pub struct ConfigFileHandler {
    path: PathBuf,
}

impl ConfigFileHandler {
    pub async fn from_config_file(config_name: &str) -> Result<Self, ConfigError> {
        let mut path = Self::ensure_config_dir_exists().await?;
        path.push(format!("{config_name}.toml"));

        Ok(Self { path })
    }

    /// Reads the config file, writing the default config first if the file
    /// does not exist yet.
    pub async fn read(&mut self) -> Result<UiConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                let config = UiConfig::default();
                self.write(&config).await?;
                Ok(config)
            }
            Err(_) => Err(ConfigError::ReadConfigFile),
        }
    }

    async fn write(&self, config: &UiConfig) -> Result<(), ConfigError> {
        let toml = toml::to_string(config)?;
        let mut file = File::create(&self.path)
            .await
            .map_err(ConfigError::CreateConfigFile)?;
        file.write_all(toml.as_bytes())
            .await
            .map_err(ConfigError::WriteConfigFile)?;
        file.flush().await.map_err(ConfigError::WriteConfigFile)?;
        Ok(())
    }

    async fn ensure_config_dir_exists() -> Result<PathBuf, ConfigError> {
        let dir = Self::find_config_dir()?;
        fs::create_dir_all(&dir)
            .await
            .map_err(ConfigError::CreateConfigDir)?;

        Ok(dir)
    }

    fn find_config_dir() -> Result<PathBuf, ConfigError> {
        let mut path = PathBuf::new();

        match std::env::var("XDG_CONFIG_HOME") {
            Ok(config_dir) => path.push(config_dir),
            _ => {
                path.push(std::env::var("HOME")?);
                path.push(".config");
            }
        }

        path.push(APP_DIR);
        Ok(path)
    }
}
