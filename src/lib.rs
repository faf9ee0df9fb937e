//! firebase-init - Firebase service-account initializer
//!
//! Loads a service-account key file, registers the default Firebase app and
//! reports the outcome on the console. Beyond that it mints OAuth2 access
//! tokens from the key and manages user accounts through the identity admin
//! REST API.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): credential, options, app and user models plus port traits
//! - **Service Layer** (`services`): app registry, initializer and user management
//! - **Infrastructure Layer** (`infrastructure`): config, key loading, token exchange, HTTP client, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use firebase_init::{try_initialize, AppRegistry, Config};
//!
//! let config = Config::with_credential_path("keys/service-account.json");
//! let registry = AppRegistry::new();
//! let app = try_initialize(&config, &registry)?;
//! println!("initialized {}", app.name());
//! # Ok::<(), firebase_init::InitError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AccessToken, App, AppOptions, AuthConfig, Config, CreateUserRequest, LoggingConfig,
    RetryConfig, ServiceAccountCredential, UserRecord, DEFAULT_APP_NAME, DEFAULT_CREDENTIAL_PATH,
};
pub use domain::ports::{IdentityProvider, TokenSource};
pub use domain::{AuthError, InitError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credentials::{CredentialLoader, ServiceAccountTokenSource};
pub use infrastructure::identity::IdentityClient;
pub use services::{initialize, initialize_with, try_initialize, AppRegistry, UserService};
