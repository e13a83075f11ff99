use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use jobsearch_core::NotificationTimings;
use jobsearch_engine::BackendSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "jobsearch.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(String),
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub notifications: NotificationConfig,
    /// How often the notification timers are re-evaluated.
    pub tick_interval_ms: u64,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            notifications: NotificationConfig::default(),
            tick_interval_ms: 75,
            log: LogDestination::File,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub endpoint: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_bytes: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        let settings = BackendSettings::default();
        Self {
            base_url: settings.base_url,
            endpoint: settings.endpoint,
            connect_timeout_ms: millis(settings.connect_timeout),
            request_timeout_ms: millis(settings.request_timeout),
            max_bytes: settings.max_bytes,
        }
    }
}

impl BackendConfig {
    pub fn to_settings(&self) -> BackendSettings {
        BackendSettings {
            base_url: self.base_url.clone(),
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub entry_delay_ms: u64,
    pub enter_transition_ms: u64,
    pub display_ms: u64,
    pub exit_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        let timings = NotificationTimings::default();
        Self {
            entry_delay_ms: millis(timings.entry_delay),
            enter_transition_ms: millis(timings.enter_transition),
            display_ms: millis(timings.display),
            exit_ms: millis(timings.exit),
        }
    }
}

impl NotificationConfig {
    pub fn to_timings(&self) -> NotificationTimings {
        NotificationTimings {
            entry_delay: Duration::from_millis(self.entry_delay_ms),
            enter_transition: Duration::from_millis(self.enter_transition_ms),
            display: Duration::from_millis(self.display_ms),
            exit: Duration::from_millis(self.exit_ms),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Reads a RON config file. Fields left out of the file keep their defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    ron::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_runtime_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.backend.to_settings().endpoint, "/api/jobs");
        assert_eq!(config.notifications.to_timings(), NotificationTimings::default());
    }
}
