use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::error::AuthError;
use crate::domain::models::{CreateUserRequest, UserRecord};
use crate::domain::ports::IdentityProvider;

/// User account operations on top of an identity provider
///
/// Addresses users by email; deletion resolves the uid first.
pub struct UserService {
    provider: Arc<dyn IdentityProvider>,
}

impl UserService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Create an email/password user
    #[instrument(skip(self, password))]
    pub async fn create_user(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        validate_email(email)?;
        if password.is_empty() {
            return Err(AuthError::InvalidArgument(
                "password cannot be empty".to_string(),
            ));
        }

        let user = self
            .provider
            .create_user(CreateUserRequest::new(email, password))
            .await?;

        info!(uid = %user.uid, "User created successfully: {}", user.uid);
        Ok(user)
    }

    /// Resolve the account for an email
    ///
    /// The admin API cannot check passwords, so this only confirms the
    /// account exists and is enabled.
    #[instrument(skip(self))]
    pub async fn sign_in_user(&self, email: &str) -> Result<UserRecord, AuthError> {
        let user = self.get_user_by_email(email).await?;

        if user.disabled {
            warn!(uid = %user.uid, "sign-in rejected for disabled user");
            return Err(AuthError::Unauthorized(format!("user {} is disabled", user.uid)));
        }

        info!(uid = %user.uid, "User signed in successfully: {}", user.uid);
        Ok(user)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserRecord, AuthError> {
        validate_email(email)?;
        self.provider.get_user_by_email(email).await
    }

    /// Delete the account registered under `email`, returning its last state
    #[instrument(skip(self))]
    pub async fn delete_user(&self, email: &str) -> Result<UserRecord, AuthError> {
        let user = self.get_user_by_email(email).await?;
        self.provider.delete_user(&user.uid).await?;

        info!(uid = %user.uid, "User deleted successfully: {}", user.uid);
        Ok(user)
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(AuthError::InvalidArgument(format!(
            "invalid email address: {email:?}"
        )));
    }
    Ok(())
}
