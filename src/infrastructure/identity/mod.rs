//! Identity admin API integration
//!
//! HTTP client for user account administration:
//! - Bearer authentication via a token source
//! - Retry with exponential backoff for transient failures
//! - Error classification from API error codes

pub mod client;
pub mod retry;
pub mod types;

pub use client::{build_http_client, IdentityClient};
pub use retry::RetryPolicy;
