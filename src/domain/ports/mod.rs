//! Port trait definitions
//!
//! Async trait interfaces that infrastructure adapters implement:
//! - TokenSource: bearer tokens for outbound API calls
//! - IdentityProvider: user account administration
//!
//! Services depend on these traits so they can be exercised without network access.

pub mod identity_provider;
pub mod token_source;

pub use identity_provider::IdentityProvider;
pub use token_source::TokenSource;
