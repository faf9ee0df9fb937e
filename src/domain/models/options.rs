use std::sync::Arc;

use super::credential::ServiceAccountCredential;
use crate::domain::error::InitError;

/// Immutable options an app is registered with
///
/// Built once through [`AppOptions::builder`]; a credential is mandatory.
#[derive(Debug, Clone)]
pub struct AppOptions {
    credential: Arc<ServiceAccountCredential>,
    project_id: Option<String>,
}

impl AppOptions {
    pub fn builder() -> AppOptionsBuilder {
        AppOptionsBuilder::default()
    }

    pub fn credential(&self) -> &Arc<ServiceAccountCredential> {
        &self.credential
    }

    /// Explicit project id, else the one carried by the credential
    pub fn project_id(&self) -> Option<&str> {
        self.project_id
            .as_deref()
            .or_else(|| self.credential.project_id())
    }
}

/// Builder for [`AppOptions`]
#[derive(Debug, Default)]
pub struct AppOptionsBuilder {
    credential: Option<Arc<ServiceAccountCredential>>,
    project_id: Option<String>,
}

impl AppOptionsBuilder {
    #[must_use]
    pub fn credential(mut self, credential: impl Into<Arc<ServiceAccountCredential>>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    #[must_use]
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn build(self) -> Result<AppOptions, InitError> {
        let credential = self.credential.ok_or(InitError::MissingCredential)?;
        Ok(AppOptions {
            credential,
            project_id: self.project_id.filter(|id| !id.trim().is_empty()),
        })
    }
}
