//! Registry of initialized app handles.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

use crate::domain::error::InitError;
use crate::domain::models::{App, AppOptions, DEFAULT_APP_NAME};

static GLOBAL_REGISTRY: OnceLock<AppRegistry> = OnceLock::new();

/// Owner of named app handles
///
/// Registration checks and inserts under a single write lock, so when two
/// callers race for the same name exactly one of them wins.
#[derive(Debug, Default)]
pub struct AppRegistry {
    apps: RwLock<HashMap<String, Arc<App>>>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry, created on first use
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::new)
    }

    /// Register the default app
    pub fn initialize_app(&self, options: AppOptions) -> Result<Arc<App>, InitError> {
        self.initialize_app_named(options, DEFAULT_APP_NAME)
    }

    /// Register an app under `name`
    ///
    /// # Errors
    /// `AppAlreadyExists` if the name is taken
    pub fn initialize_app_named(
        &self,
        options: AppOptions,
        name: &str,
    ) -> Result<Arc<App>, InitError> {
        let mut apps = self.apps.write();
        if apps.contains_key(name) {
            return Err(InitError::AppAlreadyExists(name.to_string()));
        }

        let app = Arc::new(App::new(name, options));
        apps.insert(name.to_string(), Arc::clone(&app));

        info!(
            app = %name,
            project_id = app.project_id().unwrap_or("<none>"),
            "app registered"
        );
        Ok(app)
    }

    /// # Errors
    /// `AppNotFound` if nothing is registered under `name`
    pub fn get_app(&self, name: &str) -> Result<Arc<App>, InitError> {
        self.apps
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| InitError::AppNotFound(name.to_string()))
    }

    /// The app registered under the default name
    pub fn default_app(&self) -> Result<Arc<App>, InitError> {
        self.get_app(DEFAULT_APP_NAME)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.apps.read().contains_key(name)
    }

    /// Remove an app; returns whether it was registered
    pub fn delete_app(&self, name: &str) -> bool {
        let removed = self.apps.write().remove(name).is_some();
        if removed {
            debug!(app = %name, "app deleted");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.apps.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.read().is_empty()
    }

    /// Registered names, sorted
    pub fn app_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.apps.read().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::credentials::CredentialLoader;
    use std::thread;

    const KEY_JSON: &str = include_str!("../../tests/fixtures/service_account.json");

    fn options() -> AppOptions {
        let credential = CredentialLoader::from_slice(KEY_JSON.as_bytes()).unwrap();
        AppOptions::builder().credential(credential).build().unwrap()
    }

    #[test]
    fn test_initialize_default_app() {
        let registry = AppRegistry::new();
        assert!(registry.is_empty());

        let app = registry.initialize_app(options()).unwrap();
        assert!(app.is_default());
        assert_eq!(app.project_id(), Some("demo-project"));
        assert!(registry.contains(DEFAULT_APP_NAME));
        assert_eq!(registry.len(), 1);

        let fetched = registry.default_app().unwrap();
        assert!(Arc::ptr_eq(&app, &fetched));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let registry = AppRegistry::new();
        registry.initialize_app(options()).unwrap();

        let err = registry.initialize_app(options()).unwrap_err();
        assert!(matches!(err, InitError::AppAlreadyExists(ref name) if name == DEFAULT_APP_NAME));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_named_apps_are_independent() {
        let registry = AppRegistry::new();
        registry.initialize_app(options()).unwrap();
        let secondary = registry.initialize_app_named(options(), "secondary").unwrap();

        assert!(!secondary.is_default());
        assert_eq!(registry.app_names(), vec!["[DEFAULT]", "secondary"]);
    }

    #[test]
    fn test_get_unknown_app() {
        let registry = AppRegistry::new();
        let err = registry.get_app("missing").unwrap_err();
        assert!(matches!(err, InitError::AppNotFound(ref name) if name == "missing"));
        assert_eq!(err.to_string(), "Firebase app named \"missing\" does not exist");
    }

    #[test]
    fn test_delete_app_allows_reinitialization() {
        let registry = AppRegistry::new();
        registry.initialize_app(options()).unwrap();

        assert!(registry.delete_app(DEFAULT_APP_NAME));
        assert!(!registry.delete_app(DEFAULT_APP_NAME));
        assert!(registry.is_empty());

        registry.initialize_app(options()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_concurrent_registration_has_one_winner() {
        let registry = Arc::new(AppRegistry::new());
        let opts = options();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let opts = opts.clone();
                thread::spawn(move || registry.initialize_app(opts).is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_global_is_shared() {
        let a = AppRegistry::global();
        let b = AppRegistry::global();
        assert!(std::ptr::eq(a, b));
    }
}
