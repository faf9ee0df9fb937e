pub mod app;
pub mod config;
pub mod credential;
pub mod options;
pub mod token;
pub mod user;

pub use app::{App, DEFAULT_APP_NAME};
pub use config::{
    AuthConfig, Config, LoggingConfig, RetryConfig, DEFAULT_CREDENTIAL_PATH,
};
pub use credential::{
    SecretString, ServiceAccountCredential, ServiceAccountKey, DEFAULT_TOKEN_URI,
};
pub use options::{AppOptions, AppOptionsBuilder};
pub use token::AccessToken;
pub use user::{CreateUserRequest, UserRecord};
