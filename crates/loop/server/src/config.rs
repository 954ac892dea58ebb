use std::net::SocketAddr;
use std::path::PathBuf;

use loopcast_core::{ApnsSettings, setting};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_PATH_VAR: &str = "LOOPCAST_CONFIG";
pub const LISTEN_VAR: &str = "LOOPCAST_LISTEN";
pub const PROFILES_VAR: &str = "LOOPCAST_PROFILES";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid value for {name}: {value:?}")]
    InvalidOverride { name: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    #[serde(default = "default_profiles_path")]
    pub profiles_path: PathBuf,
    #[serde(default)]
    pub apns: ApnsSettings,
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_profiles_path() -> PathBuf {
    PathBuf::from("profiles.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            profiles_path: default_profiles_path(),
            apns: ApnsSettings::default(),
        }
    }
}

impl Config {
    /// Load the config file (defaults if absent), then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("loopcast.toml"))
    }

    /// Overlay values found by `lookup` (normally the process environment).
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(LISTEN_VAR) {
            self.listen = value.parse().map_err(|_| ConfigError::InvalidOverride {
                name: LISTEN_VAR,
                value,
            })?;
        }
        if let Some(value) = lookup(PROFILES_VAR) {
            self.profiles_path = PathBuf::from(value);
        }

        let apns = &mut self.apns;
        for (name, slot) in [
            (setting::KEY, &mut apns.key),
            (setting::KEY_ID, &mut apns.key_id),
            (setting::TEAM_ID, &mut apns.team_id),
            (setting::ENVIRONMENT, &mut apns.environment),
        ] {
            if let Some(value) = lookup(name) {
                *slot = Some(value);
            }
        }

        Ok(())
    }
}
