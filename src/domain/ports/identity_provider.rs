use async_trait::async_trait;

use crate::domain::error::AuthError;
use crate::domain::models::{CreateUserRequest, UserRecord};

/// User account administration against the identity platform
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a user; fails with `EmailAlreadyExists` on a taken email
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserRecord, AuthError>;

    /// Look a user up by email; fails with `UserNotFound` when absent
    async fn get_user_by_email(&self, email: &str) -> Result<UserRecord, AuthError>;

    /// Delete a user by uid
    async fn delete_user(&self, uid: &str) -> Result<(), AuthError>;
}
