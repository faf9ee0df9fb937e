use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, Header};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::domain::error::AuthError;
use crate::domain::models::{AccessToken, ServiceAccountCredential};
use crate::domain::ports::TokenSource;
use crate::infrastructure::logging::SecretScrubber;

/// Scopes requested for admin access
pub const DEFAULT_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/identitytoolkit",
    "https://www.googleapis.com/auth/userinfo.email",
];

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for assertions and assumed when the endpoint omits `expires_in`
const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Upper bound on the lifetime accepted from the token endpoint
const MAX_TOKEN_LIFETIME_SECS: i64 = 86_400;

/// Cached tokens are refreshed once they get this close to expiry
const REFRESH_MARGIN_SECS: i64 = 300;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AssertionClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub scope: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Mints access tokens with the JWT-bearer grant
///
/// Signs an RS256 assertion with the service account's private key, trades it
/// at the token endpoint and caches the result until it nears expiry. The
/// cache lock is held across the refresh so concurrent callers share one
/// exchange.
pub struct ServiceAccountTokenSource {
    credential: Arc<ServiceAccountCredential>,
    http_client: ReqwestClient,
    token_uri: String,
    scopes: Vec<String>,
    cached: Mutex<Option<AccessToken>>,
}

impl ServiceAccountTokenSource {
    pub fn new(credential: Arc<ServiceAccountCredential>, http_client: ReqwestClient) -> Self {
        let token_uri = credential.token_uri().to_string();
        Self {
            credential,
            http_client,
            token_uri,
            scopes: DEFAULT_SCOPES.iter().map(ToString::to_string).collect(),
            cached: Mutex::new(None),
        }
    }

    /// Send the exchange somewhere other than the key file's `token_uri`
    #[must_use]
    pub fn with_token_uri(mut self, token_uri: impl Into<String>) -> Self {
        self.token_uri = token_uri.into();
        self
    }

    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    /// Build the signed assertion presented to the token endpoint
    pub fn sign_assertion(&self, now: DateTime<Utc>) -> Result<String, AuthError> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.credential.private_key_id().map(ToString::to_string);

        let iat = now.timestamp();
        let claims = AssertionClaims {
            iss: self.credential.client_email().to_string(),
            sub: self.credential.client_email().to_string(),
            aud: self.token_uri.clone(),
            scope: self.scopes.join(" "),
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
        };

        Ok(encode(&header, &claims, self.credential.signing_key())?)
    }

    async fn fetch_token(&self) -> Result<AccessToken, AuthError> {
        let now = Utc::now();
        let assertion = self.sign_assertion(now)?;

        debug!("POST {}", self.token_uri);

        let response = self
            .http_client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let body = SecretScrubber::global().scrub_message(&body);
            warn!("Token exchange failed ({}): {}", status, body);
            return Err(AuthError::TokenExchange {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        let expires_in = token
            .expires_in
            .unwrap_or(TOKEN_LIFETIME_SECS)
            .clamp(0, MAX_TOKEN_LIFETIME_SECS);

        Ok(AccessToken::new(
            token.access_token,
            now + Duration::seconds(expires_in),
        ))
    }
}

#[async_trait]
impl TokenSource for ServiceAccountTokenSource {
    #[instrument(skip(self), fields(client_email = %self.credential.client_email()))]
    async fn access_token(&self) -> Result<AccessToken, AuthError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if !token.expires_within(Utc::now(), Duration::seconds(REFRESH_MARGIN_SECS)) {
                return Ok(token.clone());
            }
            debug!("Cached access token is about to expire, refreshing");
        }

        let token = self.fetch_token().await?;
        info!(expires_at = %token.expires_at, "Obtained access token");
        *cached = Some(token.clone());
        Ok(token)
    }
}
