//! Service layer
//!
//! Coordinates the domain and infrastructure layers:
//! - App registry and initialization
//! - User account management

pub mod app_registry;
pub mod initializer;
pub mod user_service;

pub use app_registry::AppRegistry;
pub use initializer::{initialize, initialize_with, try_initialize};
pub use user_service::UserService;
