use async_trait::async_trait;

use crate::domain::error::AuthError;
use crate::domain::models::AccessToken;

/// Supplies access tokens for authenticated API calls
///
/// Implementations are expected to cache tokens and refresh them before expiry.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<AccessToken, AuthError>;
}
