//! Credentials management infrastructure
//!
//! Service-account handling:
//! - Key file loading and validation
//! - JWT-bearer access token minting with caching

pub mod loader;
pub mod token_source;

pub use loader::CredentialLoader;
pub use token_source::{ServiceAccountTokenSource, DEFAULT_SCOPES};
