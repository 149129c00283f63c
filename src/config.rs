use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

fn default_predict_url() -> String {
    "http://localhost:5000/predict".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prediction endpoint receiving the completed survey
    #[serde(default = "default_predict_url")]
    pub predict_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_url: default_predict_url(),
        }
    }
}

impl Config {
    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let config = Self::read_from(&config_path)?;
            tracing::info!("Loaded config from: {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            tracing::info!("Created default config at: {}", config_path.display());
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        self.write_to(&config_path)
    }

    fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })
    }

    fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        fs::write(path, json).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })
    }

    /// Get the config file path (in the platform config directory)
    fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("ChurnSurvey").join("config.json"))
            .ok_or(ConfigError::NoConfigDir)
    }
}
