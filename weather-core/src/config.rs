use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials and endpoint for WeatherAPI.com.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,

    /// Overrides the API root, mostly useful for pointing at a local mock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [weatherapi]
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub weatherapi: Option<ProviderConfig>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set or replace the API key, keeping any endpoint overrides.
    pub fn set_api_key(&mut self, api_key: String) {
        match self.weatherapi.as_mut() {
            Some(provider) => provider.api_key = api_key,
            None => {
                self.weatherapi = Some(ProviderConfig { api_key, base_url: None, timeout_secs: None })
            }
        }
    }

    /// Set the API root. An empty string restores the default.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        let provider = self
            .weatherapi
            .as_mut()
            .ok_or_else(|| anyhow!("Configure an API key before overriding the base URL"))?;

        let trimmed = base_url.trim();
        provider.base_url =
            if trimmed.is_empty() { None } else { Some(trimmed.trim_end_matches('/').to_string()) };
        Ok(())
    }

    pub fn api_key(&self) -> Result<&str> {
        self.weatherapi.as_ref().map(|cfg| cfg.api_key.as_str()).ok_or_else(|| {
            anyhow!(
                "No API key configured for WeatherAPI.com.\n\
                 Hint: run `weather configure` and enter your API key."
            )
        })
    }

    pub fn base_url(&self) -> &str {
        self.weatherapi.as_ref().and_then(|cfg| cfg.base_url.as_deref()).unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        let secs = self
            .weatherapi
            .as_ref()
            .and_then(|cfg| cfg.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn is_configured(&self) -> bool {
        self.weatherapi.is_some()
    }
}
