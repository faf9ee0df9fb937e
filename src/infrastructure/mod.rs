//! Infrastructure layer module
//!
//! This module contains the adapters that talk to the outside world:
//! - Configuration management (figment)
//! - Service-account credential loading and OAuth2 token exchange
//! - Identity Toolkit HTTP client
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod identity;
pub mod logging;
