//! JSON Configuration Management
//!
//! Builds the startup configuration: defaults, then an optional JSON file
//! named by `ROAST_CONFIG`, then environment overrides. The result is
//! validated before anything else starts.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::utils::error::{AppError, AppResult};

/// Environment variable naming the JSON config file.
pub const CONFIG_PATH_ENV: &str = "ROAST_CONFIG";

/// Configuration service holding the validated startup configuration
#[derive(Debug)]
pub struct ConfigService {
    config_path: Option<PathBuf>,
    config: AppConfig,
}

impl ConfigService {
    /// Load configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read environment variables
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = lookup(CONFIG_PATH_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let mut config = match &config_path {
            Some(path) => Self::load_from_file(path)?,
            None => AppConfig::default(),
        };

        let update = SettingsUpdate::from_lookup(&lookup).map_err(AppError::config)?;
        config.apply_update(update);
        config.validate().map_err(AppError::config)?;

        info!(
            provider = %config.provider,
            model = %config.model,
            file = ?config_path,
            "Configuration loaded"
        );

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a file. Validation happens after overrides.
    fn load_from_file(path: &Path) -> AppResult<AppConfig> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Consume the service, returning the configuration
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Path of the file the configuration came from, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl AppConfig {
    /// Load, override and validate the configuration from the process environment
    pub fn load() -> AppResult<Self> {
        ConfigService::from_env().map(ConfigService::into_config)
    }
}
