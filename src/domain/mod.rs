//! Domain layer
//!
//! Credential, options, app handle and user models plus the port traits
//! the infrastructure layer implements.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{AuthError, InitError};
