use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::credential::SecretString;

/// A user account known to the identity platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub uid: String,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub display_name: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Parameters for creating a user with email and password
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: SecretString,
    pub display_name: Option<String>,
}

impl CreateUserRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into()),
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}
