//! Configuration model loaded from external sources.

use std::path::Path;
use std::time::Duration;

use chrono::FixedOffset;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

/// File consulted when no explicit path is given (extension optional).
pub const DEFAULT_CONFIG_FILE: &str = "config/clinic-client";
/// Prefix of the environment variables overriding file settings.
pub const ENV_PREFIX: &str = "CLINIC";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_token_key() -> String {
    "token".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_page_limit() -> u32 {
    10
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings for one API client.
pub struct ClientConfig {
    /// Base URL of the REST API, e.g. `https://api.klinik.id`.
    pub api_url: String,
    /// Storage key of the bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Directory of the file-backed token store. Tokens stay in memory when unset.
    #[serde(default)]
    pub token_dir: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Offset of the clinic's local time used to turn calendar days into instants.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_page_limit")]
    pub default_page_limit: u32,
}

impl ClientConfig {
    /// Reads the optional YAML file, then `CLINIC_*` environment variables,
    /// later sources overriding earlier ones.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Yaml).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_url must not be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be positive".into()));
        }
        if self.token_key.trim().is_empty() {
            return Err(ConfigError::Invalid("token_key must not be empty".into()));
        }
        self.utc_offset()?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }
}
