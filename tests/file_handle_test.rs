//! Checks that initialization leaves no key file handle open.
//!
//! Kept as the only test in this binary so no parallel test opens
//! descriptors while they are being counted.

#![cfg(target_os = "linux")]

use firebase_init::{try_initialize, AppRegistry, Config};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn open_descriptors() -> usize {
    fs::read_dir("/proc/self/fd").unwrap().count()
}

#[test]
fn test_initialization_closes_key_file_on_every_path() {
    let dir = TempDir::new().unwrap();
    let valid = dir.path().join("valid.json");
    let malformed = dir.path().join("malformed.json");
    let wrong_type = dir.path().join("wrong_type.json");
    fs::copy(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/service_account.json"),
        &valid,
    )
    .unwrap();
    fs::write(&malformed, "{\"type\": \"service_").unwrap();
    fs::write(&wrong_type, r#"{"type": "authorized_user"}"#).unwrap();

    // Warm up lazily opened process state before taking the baseline
    let _ = try_initialize(&Config::with_credential_path(&malformed), &AppRegistry::new());

    let baseline = open_descriptors();

    let registry = AppRegistry::new();
    try_initialize(&Config::with_credential_path(&valid), &registry).unwrap();
    assert_eq!(open_descriptors(), baseline, "success path leaked a handle");

    for path in [&malformed, &wrong_type, &dir.path().join("absent.json")] {
        assert!(try_initialize(&Config::with_credential_path(path), &AppRegistry::new()).is_err());
        assert_eq!(
            open_descriptors(),
            baseline,
            "failure path leaked a handle for {}",
            path.display()
        );
    }
}
