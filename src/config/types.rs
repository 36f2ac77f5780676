//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Who we are on the network.
    pub identity: IdentityConfig,
    /// Reply timeout policy.
    #[serde(default)]
    pub timeouts: TimeoutsConfig,
    /// Local input limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl ClientConfig {
    /// Default configuration for the given nickname.
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            identity: IdentityConfig::new(nickname),
            timeouts: TimeoutsConfig::default(),
            limits: LimitsConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content)?;
        Ok(config)
    }
}

/// Identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Requested nickname.
    pub nickname: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_realname")]
    pub realname: String,
    /// Connection password sent with PASS before NICK/USER.
    pub password: Option<String>,
    /// Network name, informational only.
    #[serde(default)]
    pub network: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Client version string (e.g. for CTCP VERSION replies).
    #[serde(default = "default_version")]
    pub version: String,
}

impl IdentityConfig {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            username: default_username(),
            realname: default_realname(),
            password: None,
            network: String::new(),
            port: default_port(),
            version: default_version(),
        }
    }
}

/// Reply timeout configuration.
///
/// The wait for a reply is `lag * lag_multiplier`, capped at
/// `max_timeout_ms`, and restarts on every reply. `min_timeout_ms` is an
/// optional floor and is off by default.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeoutsConfig {
    #[serde(default = "default_lag_multiplier")]
    pub lag_multiplier: u32,
    #[serde(default = "default_max_timeout_ms")]
    pub max_timeout_ms: u64,
    #[serde(default = "default_min_timeout_ms")]
    pub min_timeout_ms: u64,
    /// Lag assumed until the first PING completes.
    #[serde(default = "default_initial_lag_ms")]
    pub initial_lag_ms: u64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            lag_multiplier: default_lag_multiplier(),
            max_timeout_ms: default_max_timeout_ms(),
            min_timeout_ms: default_min_timeout_ms(),
            initial_lag_ms: default_initial_lag_ms(),
        }
    }
}

impl TimeoutsConfig {
    pub fn initial_lag(&self) -> Duration {
        Duration::from_millis(self.initial_lag_ms)
    }

    pub fn max_timeout(&self) -> Duration {
        Duration::from_millis(self.max_timeout_ms)
    }

    pub fn min_timeout(&self) -> Duration {
        Duration::from_millis(self.min_timeout_ms)
    }
}

/// Local input limits configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Longer nicknames are truncated (default: 9).
    #[serde(default = "default_nick_max_len")]
    pub nick_max_len: usize,
    /// Longer usernames are truncated (default: 9).
    #[serde(default = "default_user_max_len")]
    pub user_max_len: usize,
    /// Underscore-prefixed retries after a rejected nickname (default: 8).
    #[serde(default = "default_nick_retries")]
    pub nick_retries: usize,
    #[serde(default = "default_userhost_max")]
    pub userhost_max: usize,
    #[serde(default = "default_ison_max")]
    pub ison_max: usize,
    /// Outbound queue capacity for in-process clients (default: 64).
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            nick_max_len: default_nick_max_len(),
            user_max_len: default_user_max_len(),
            nick_retries: default_nick_retries(),
            userhost_max: default_userhost_max(),
            ison_max: default_ison_max(),
            queue_capacity: default_queue_capacity(),
        }
    }
}
