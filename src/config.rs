use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_ENDPOINT: &str =
    "https://leng-lab-wxbox-1255963066.cos.ap-beijing.myqcloud.com/miniapp/totalSessions/total_visits.json";

/// Dashboard configuration from config.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// URL of the usage feed (flat JSON object of records)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Seconds between automatic refreshes
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_poll_interval() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_secs: default_poll_interval(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .context(format!("Failed to read config: {:?}", path.as_ref()))?;
        let config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config YAML")?;
        Ok(config)
    }

    /// Load from the user config dir, falling back to defaults if absent
    pub fn load_or_default() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// `~/.config/visits-tui/config.yaml` (platform equivalent)
    pub fn config_path() -> Option<PathBuf> {
        Some(Self::config_dir()?.join("config.yaml"))
    }

    pub fn config_dir() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("visits-tui"))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
