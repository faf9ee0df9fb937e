use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file, created by the operator
pub const CONFIG_FILE: &str = "firebase-init.yaml";

/// Optional local overrides, usually kept out of version control
pub const LOCAL_CONFIG_FILE: &str = "firebase-init.local.yaml";

/// Prefix for environment overrides (`FIREBASE_INIT_AUTH__BASE_URL=...`)
pub const ENV_PREFIX: &str = "FIREBASE_INIT_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Credential path cannot be empty")]
    EmptyCredentialPath,

    #[error("App name cannot be empty")]
    EmptyAppName,

    #[error("Invalid {field}: {value}. Must be an http(s) URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error("Invalid max_retries: {0}. Cannot be 0")]
    InvalidMaxRetries(u32),

    #[error(
        "Invalid backoff configuration: initial_backoff_ms ({0}) must be less than max_backoff_ms ({1})"
    )]
    InvalidBackoff(u64, u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. firebase-init.yaml
    /// 3. firebase-init.local.yaml (optional)
    /// 4. Environment variables (FIREBASE_INIT_* prefix, `__` for nesting)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Yaml::file(LOCAL_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.credential_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyCredentialPath);
        }

        if config.app_name.trim().is_empty() {
            return Err(ConfigError::EmptyAppName);
        }

        if !is_http_url(&config.auth.base_url) {
            return Err(ConfigError::InvalidUrl {
                field: "auth.base_url",
                value: config.auth.base_url.clone(),
            });
        }

        if let Some(token_uri) = &config.auth.token_uri {
            if !is_http_url(token_uri) {
                return Err(ConfigError::InvalidUrl {
                    field: "auth.token_uri",
                    value: token_uri.clone(),
                });
            }
        }

        if config.auth.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.auth.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        if config.retry.max_retries == 0 {
            return Err(ConfigError::InvalidMaxRetries(config.retry.max_retries));
        }

        if config.retry.initial_backoff_ms >= config.retry.max_backoff_ms {
            return Err(ConfigError::InvalidBackoff(
                config.retry.initial_backoff_ms,
                config.retry.max_backoff_ms,
            ));
        }

        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}
