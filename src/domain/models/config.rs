use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::app::DEFAULT_APP_NAME;

/// Key file location used when nothing else is configured
pub const DEFAULT_CREDENTIAL_PATH: &str =
    "app/src/main/assets/projectux-q4-firebase-adminsdk-85x8w-fc87633b08.json";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Path to the service-account key file
    #[serde(default = "default_credential_path")]
    pub credential_path: PathBuf,

    /// Name the app is registered under
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Overrides the project id carried by the key file
    #[serde(default)]
    pub project_id: Option<String>,

    /// Identity API and token endpoint configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Retry policy configuration
    #[serde(default)]
    pub retry: RetryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_credential_path() -> PathBuf {
    PathBuf::from(DEFAULT_CREDENTIAL_PATH)
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential_path: default_credential_path(),
            app_name: default_app_name(),
            project_id: None,
            auth: AuthConfig::default(),
            retry: RetryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Default configuration pointing at a different key file
    pub fn with_credential_path(path: impl Into<PathBuf>) -> Self {
        Self {
            credential_path: path.into(),
            ..Self::default()
        }
    }
}

/// Identity API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuthConfig {
    /// Base URL of the identity admin API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overrides the token endpoint named in the key file
    #[serde(default)]
    pub token_uri: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_uri: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Retry policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RetryConfig {
    /// Maximum retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

const fn default_max_retries() -> u32 {
    3
}

const fn default_initial_backoff_ms() -> u64 {
    500
}

const fn default_max_backoff_ms() -> u64 {
    10_000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; console only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Also log to stderr
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

const fn default_true() -> bool {
    true
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            enable_console: default_true(),
            rotation: default_rotation(),
        }
    }
}
