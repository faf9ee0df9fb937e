//! CLI command implementations.

pub mod init;
pub mod token;
pub mod user;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::models::{App, Config};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{try_initialize, AppRegistry};

/// Resolve the effective configuration for a CLI run
///
/// An explicit `--config` file replaces the default file lookup; a
/// `--credential` path wins over whatever the configuration says.
pub fn load_config(config_file: Option<&Path>, credential: Option<PathBuf>) -> Result<Config> {
    let mut config = match config_file {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(path) = credential {
        config.credential_path = path;
    }

    Ok(config)
}

/// Register the configured app in the process-wide registry
///
/// Commands that need an app but are not about initializing it use this; it
/// prints nothing.
pub(crate) fn initialized_app(config: &Config) -> Result<Arc<App>> {
    let registry = AppRegistry::global();
    if let Ok(app) = registry.get_app(&config.app_name) {
        return Ok(app);
    }

    try_initialize(config, registry).with_context(|| {
        format!(
            "Failed to initialize Firebase from {}",
            config.credential_path.display()
        )
    })
}
