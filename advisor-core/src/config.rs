use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, time::Duration};

use crate::provider::openweather::DEFAULT_BASE_URL;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// bind_address = "127.0.0.1:8080"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeather API key; may also be supplied via `OPENWEATHER_API_KEY`.
    pub api_key: Option<String>,

    /// Address the HTTP server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Base URL of the OpenWeather API.
    #[serde(default = "default_base_url")]
    pub api_base_url: String,

    /// Timeout applied to each outbound provider call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            bind_address: default_bind_address(),
            api_base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if no file exists yet.
    /// The `OPENWEATHER_API_KEY` environment variable wins over the file.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };

        if let Some(key) = env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()) {
            cfg.api_key = Some(key);
        }

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-advisor", "advisor-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the configured API key, or an error explaining how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: set `api_key` in the config file or export {API_KEY_ENV}."
                )
            })
    }

    /// Timeout for each outbound provider call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
