//! Application configuration
//!
//! Configuration loaded from .hacker-stories.toml file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from .hacker-stories.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Search text used when nothing has been persisted yet
    #[serde(default = "default_search")]
    pub default_search: String,

    /// Simulated network latency of the story fetch, in milliseconds
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,

    /// Make the story fetch reject instead of resolving
    #[serde(default)]
    pub simulate_fetch_failure: bool,
}

fn default_search() -> String {
    "React".to_string()
}

fn default_fetch_delay_ms() -> u64 {
    2000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_search: default_search(),
            fetch_delay_ms: default_fetch_delay_ms(),
            simulate_fetch_failure: false,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}
