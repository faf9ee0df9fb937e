//! The zero-argument entry point, run in its own process.
//!
//! The default key path is relative and does not exist under the package
//! root, so `initialize()` takes its failure branch here.

use firebase_init::{initialize, AppRegistry, DEFAULT_APP_NAME};

#[test]
fn test_initialize_without_key_file_returns_normally() {
    initialize();
    assert!(!AppRegistry::global().contains(DEFAULT_APP_NAME));

    // A second call is another attempt, not a duplicate registration
    initialize();
    assert!(!AppRegistry::global().contains(DEFAULT_APP_NAME));
    assert!(AppRegistry::global().is_empty());
}
