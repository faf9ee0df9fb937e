use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::retry::RetryPolicy;
use super::types::{
    DeleteRequest, LookupRequest, LookupResponse, SignUpRequest, SignUpResponse,
};
use crate::domain::error::AuthError;
use crate::domain::models::{App, AuthConfig, Config, CreateUserRequest, UserRecord};
use crate::domain::ports::{IdentityProvider, TokenSource};
use crate::infrastructure::credentials::ServiceAccountTokenSource;
use crate::infrastructure::logging::SecretScrubber;

/// Build the shared HTTP client for token and identity calls
pub fn build_http_client(config: &AuthConfig) -> Result<ReqwestClient, AuthError> {
    Ok(ReqwestClient::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .pool_max_idle_per_host(10)
        .tcp_nodelay(true)
        .build()?)
}

/// HTTP client for the identity admin REST API
///
/// Every call carries a bearer token from the configured [`TokenSource`]
/// and transient failures are retried per the [`RetryPolicy`].
pub struct IdentityClient {
    http_client: ReqwestClient,
    base_url: String,
    project_id: String,
    token_source: Arc<dyn TokenSource>,
    retry_policy: RetryPolicy,
}

impl IdentityClient {
    pub fn new(
        http_client: ReqwestClient,
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        token_source: Arc<dyn TokenSource>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            token_source,
            retry_policy,
        }
    }

    /// Wire a client for an initialized app
    ///
    /// Tokens are minted from the app's credential; the project comes from
    /// the app options and must be known.
    pub fn for_app(app: &App, config: &Config) -> Result<Self, AuthError> {
        let project_id = app.project_id().ok_or(AuthError::MissingProjectId)?;
        let http_client = build_http_client(&config.auth)?;

        let mut token_source =
            ServiceAccountTokenSource::new(Arc::clone(app.options().credential()), http_client.clone());
        if let Some(token_uri) = &config.auth.token_uri {
            token_source = token_source.with_token_uri(token_uri.clone());
        }

        Ok(Self::new(
            http_client,
            config.auth.base_url.clone(),
            project_id,
            Arc::new(token_source),
            RetryPolicy::from(&config.retry),
        ))
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn accounts_url(&self, suffix: &str) -> String {
        format!(
            "{}/v1/projects/{}/accounts{}",
            self.base_url, self.project_id, suffix
        )
    }

    async fn post<B, R>(&self, suffix: &str, body: &B, subject: &str) -> Result<R, AuthError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.accounts_url(suffix);
        let url = url.as_str();

        self.retry_policy
            .execute(|| async move {
                let token = self.token_source.access_token().await?;

                debug!("POST {}", url);

                let response = self
                    .http_client
                    .post(url)
                    .header(header::AUTHORIZATION, token.bearer())
                    .json(body)
                    .send()
                    .await?;

                self.handle_response(response, subject).await
            })
            .await
    }

    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: Response,
        subject: &str,
    ) -> Result<R, AuthError> {
        let status = response.status();

        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let body = SecretScrubber::global().scrub_message(&body);
            warn!("Identity API error ({}): {}", status, body);
            return Err(AuthError::from_status(status, body, subject));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl IdentityProvider for IdentityClient {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserRecord, AuthError> {
        let body = SignUpRequest {
            email: &request.email,
            password: request.password.expose_secret(),
            display_name: request.display_name.as_deref(),
        };

        let response: SignUpResponse = self.post("", &body, &request.email).await?;
        Ok(response.into())
    }

    #[instrument(skip(self))]
    async fn get_user_by_email(&self, email: &str) -> Result<UserRecord, AuthError> {
        let body = LookupRequest { email: vec![email] };

        let response: LookupResponse = self.post(":lookup", &body, email).await?;
        response
            .users
            .into_iter()
            .next()
            .map(UserRecord::from)
            .ok_or_else(|| AuthError::UserNotFound(email.to_string()))
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, uid: &str) -> Result<(), AuthError> {
        let body = DeleteRequest { local_id: uid };

        let _: serde_json::Value = self.post(":delete", &body, uid).await?;
        Ok(())
    }
}
