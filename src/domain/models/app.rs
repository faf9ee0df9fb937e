use chrono::{DateTime, Utc};

use super::options::AppOptions;

/// Name the app gets when none is given
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// An initialized app handle
///
/// Created only by the app registry; shared as `Arc<App>`.
#[derive(Debug)]
pub struct App {
    name: String,
    options: AppOptions,
    created_at: DateTime<Utc>,
}

impl App {
    pub(crate) fn new(name: impl Into<String>, options: AppOptions) -> Self {
        Self {
            name: name.into(),
            options,
            created_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn options(&self) -> &AppOptions {
        &self.options
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn project_id(&self) -> Option<&str> {
        self.options.project_id()
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_APP_NAME
    }
}
