//! Application configuration management.
//!
//! Configuration is stored at `~/.config/usercache/config.json`. Missing
//! fields fall back to defaults, and `USERCACHE_BASE_URL` /
//! `USERCACHE_OFFLINE` override the file when set.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::connectivity::probe::DEFAULT_REACHABILITY_TIMEOUT_SECS;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "usercache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

const ENV_BASE_URL: &str = "USERCACHE_BASE_URL";
const ENV_OFFLINE: &str = "USERCACHE_OFFLINE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// URL probed to decide whether the internet is reachable.
    /// Defaults to the base URL.
    pub reachability_url: Option<String>,
    pub reachability_timeout_secs: u64,
    /// Never touch the network; serve the cached list only
    pub offline_mode: bool,
    /// Overrides the platform cache directory
    pub cache_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            reachability_url: None,
            reachability_timeout_secs: DEFAULT_REACHABILITY_TIMEOUT_SECS,
            offline_mode: false,
            cache_dir: None,
        }
    }
}

impl Config {
    /// Load the config file (or defaults) and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(flag) = var(ENV_OFFLINE) {
            self.offline_mode = matches!(flag.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.cache_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    pub fn reachability_url(&self) -> &str {
        self.reachability_url.as_deref().unwrap_or(&self.base_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn reachability_timeout(&self) -> Duration {
        Duration::from_secs(self.reachability_timeout_secs)
    }
}
