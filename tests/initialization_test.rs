//! Integration tests for turning key files into registered apps.

use firebase_init::{
    initialize_with, try_initialize, AppRegistry, Config, InitError, DEFAULT_APP_NAME,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

struct Outcome {
    registered: bool,
    stdout: String,
    stderr: String,
}

fn run(config: &Config, registry: &AppRegistry) -> Outcome {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let app = initialize_with(config, registry, &mut stdout, &mut stderr);
    Outcome {
        registered: app.is_some(),
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

#[test]
fn test_valid_key_registers_default_app() {
    let registry = AppRegistry::new();
    let config = Config::with_credential_path(fixture("service_account.json"));

    let outcome = run(&config, &registry);

    assert!(outcome.registered);
    assert_eq!(outcome.stdout, "Firebase Initialized Successfully\n");
    assert!(outcome.stderr.is_empty());

    let app = registry.get_app(DEFAULT_APP_NAME).unwrap();
    assert_eq!(app.project_id(), Some("demo-project"));
    assert_eq!(
        app.options().credential().client_email(),
        "firebase-adminsdk-test@demo-project.iam.gserviceaccount.com"
    );
}

#[test]
fn test_missing_key_file() {
    let registry = AppRegistry::new();
    let config = Config::with_credential_path(fixture("does_not_exist.json"));

    let outcome = run(&config, &registry);

    assert!(!outcome.registered);
    assert!(outcome.stdout.is_empty());
    assert_eq!(outcome.stderr.lines().count(), 1);
    assert!(outcome
        .stderr
        .starts_with("Firebase Initialization Error: Failed to read credential file"));
    assert!(outcome.stderr.contains("does_not_exist.json"));
    assert!(registry.is_empty());

    let err = try_initialize(&config, &registry).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_malformed_key_file() {
    let registry = AppRegistry::new();
    let config = Config::with_credential_path(fixture("malformed.json"));

    let outcome = run(&config, &registry);

    assert!(!outcome.registered);
    assert!(outcome.stdout.is_empty());
    assert_eq!(outcome.stderr.lines().count(), 1);
    assert!(registry.is_empty());

    assert!(matches!(
        try_initialize(&config, &registry),
        Err(InitError::MalformedCredential(_))
    ));
}

#[test]
fn test_wrong_credential_type() {
    let registry = AppRegistry::new();
    let config = Config::with_credential_path(fixture("wrong_type.json"));

    let err = try_initialize(&config, &registry).unwrap_err();
    assert!(matches!(err, InitError::InvalidCredential(ref msg) if msg.contains("authorized_user")));
    assert!(registry.is_empty());
}

#[test]
fn test_second_initialization_reports_duplicate() {
    let registry = AppRegistry::new();
    let config = Config::with_credential_path(fixture("service_account.json"));

    assert!(run(&config, &registry).registered);

    let second = run(&config, &registry);
    assert!(!second.registered);
    assert!(second.stdout.is_empty());
    assert_eq!(
        second.stderr,
        "Firebase Initialization Error: Firebase app named \"[DEFAULT]\" already exists\n"
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_failed_initialization_can_be_retried() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("key.json");
    let config = Config::with_credential_path(&path);
    let registry = AppRegistry::new();

    assert!(!run(&config, &registry).registered);

    fs::copy(fixture("service_account.json"), &path).unwrap();
    assert!(run(&config, &registry).registered);
}
