//! Turning a key file into the registered default app.
//!
//! [`try_initialize`] does the work and returns a `Result`. [`initialize_with`]
//! wraps it with the console contract: one success line on the `out` writer or
//! one failure line on the `err` writer. [`initialize`] runs that wrapper with
//! the default configuration, the global registry and the real stdout/stderr.

use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domain::error::InitError;
use crate::domain::models::{App, AppOptions, Config};
use crate::infrastructure::credentials::CredentialLoader;
use crate::infrastructure::logging::SecretScrubber;
use crate::services::app_registry::AppRegistry;

/// Printed on stdout once the default app is registered
pub const SUCCESS_MESSAGE: &str = "Firebase Initialized Successfully";

/// Prefix of the line printed on stderr when initialization fails
pub const FAILURE_PREFIX: &str = "Firebase Initialization Error: ";

/// Load the configured key file and register the app it describes
///
/// # Errors
/// Any `InitError` from reading, parsing or registering; the registry is left
/// untouched on failure.
#[instrument(skip_all, fields(path = %config.credential_path.display(), app = %config.app_name))]
pub fn try_initialize(config: &Config, registry: &AppRegistry) -> Result<Arc<App>, InitError> {
    let credential = CredentialLoader::from_path(&config.credential_path)?;

    let mut builder = AppOptions::builder().credential(credential);
    if let Some(project_id) = &config.project_id {
        builder = builder.project_id(project_id.clone());
    }
    let options = builder.build()?;

    registry.initialize_app_named(options, &config.app_name)
}

/// Run [`try_initialize`] and report the outcome on the given writers
///
/// Never fails: errors end up as a single line on `err`. Console write
/// failures are ignored, as `println!` would panic on them instead.
pub fn initialize_with<O, E>(
    config: &Config,
    registry: &AppRegistry,
    out: &mut O,
    err: &mut E,
) -> Option<Arc<App>>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match try_initialize(config, registry) {
        Ok(app) => {
            info!(app = %app.name(), "firebase initialized");
            let _ = writeln!(out, "{SUCCESS_MESSAGE}");
            Some(app)
        }
        Err(e) => {
            let message = SecretScrubber::global().scrub_message(&e.to_string());
            debug!(error = %message, "firebase initialization failed");
            let _ = writeln!(err, "{FAILURE_PREFIX}{message}");
            None
        }
    }
}

/// Initialize the default app from the default key path
///
/// Prints the outcome and returns normally either way.
pub fn initialize() {
    let config = Config::default();
    let stdout = io::stdout();
    let stderr = io::stderr();
    initialize_with(
        &config,
        AppRegistry::global(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
}
