//! Service-account credential model
//!
//! A service-account key is the JSON document the platform console issues
//! for server-side access. [`ServiceAccountKey`] mirrors that document;
//! [`ServiceAccountCredential`] is the validated form, holding a parsed
//! RSA signing key ready for token assertions.

use jsonwebtoken::EncodingKey;
use serde::Deserialize;
use std::fmt;

use crate::domain::error::InitError;

/// Token endpoint used when the key file does not name one
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Value of the `type` field for service-account keys
pub const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// Secure string wrapper that masks sensitive data in logs
///
/// Debug output shows only `SecretString(***)` and Display shows the
/// truncated form `first4...last4`. Deserialize-only, so the raw value
/// never round-trips into serialized output.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new SecretString from a String
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string
    ///
    /// Only use this when the raw value is actually needed on the wire.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns a masked version of the secret for safe logging
    pub fn masked(&self) -> String {
        let s = &self.0;
        if s.len() <= 8 || !s.is_char_boundary(4) || !s.is_char_boundary(s.len() - 4) {
            return "***".to_string();
        }
        format!("{}...{}", &s[..4], &s[s.len() - 4..])
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(***)")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Raw service-account key document as issued by the platform
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    /// Credential kind; must be `service_account`
    #[serde(rename = "type")]
    pub key_type: String,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub private_key_id: Option<String>,

    /// PEM-encoded RSA private key
    #[serde(default)]
    pub private_key: SecretString,

    #[serde(default)]
    pub client_email: String,

    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(default)]
    pub auth_uri: Option<String>,

    #[serde(default)]
    pub token_uri: Option<String>,

    #[serde(default)]
    pub auth_provider_x509_cert_url: Option<String>,

    #[serde(default)]
    pub client_x509_cert_url: Option<String>,

    #[serde(default)]
    pub universe_domain: Option<String>,
}

/// A validated service-account credential
#[derive(Clone)]
pub struct ServiceAccountCredential {
    key: ServiceAccountKey,
    signing_key: EncodingKey,
}

impl ServiceAccountCredential {
    /// Validate a key document and parse its private key
    pub fn from_key(key: ServiceAccountKey) -> Result<Self, InitError> {
        if key.key_type != SERVICE_ACCOUNT_TYPE {
            return Err(InitError::InvalidCredential(format!(
                "expected type \"{SERVICE_ACCOUNT_TYPE}\", found \"{}\"",
                key.key_type
            )));
        }

        if key.client_email.trim().is_empty() {
            return Err(InitError::InvalidCredential(
                "client_email cannot be empty".to_string(),
            ));
        }

        if key.private_key.expose_secret().trim().is_empty() {
            return Err(InitError::InvalidCredential(
                "private_key cannot be empty".to_string(),
            ));
        }

        let signing_key = EncodingKey::from_rsa_pem(key.private_key.expose_secret().as_bytes())
            .map_err(InitError::InvalidPrivateKey)?;

        Ok(Self { key, signing_key })
    }

    /// Service-account email, used as issuer and subject of assertions
    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    pub fn project_id(&self) -> Option<&str> {
        self.key.project_id.as_deref()
    }

    pub fn private_key_id(&self) -> Option<&str> {
        self.key.private_key_id.as_deref()
    }

    /// Token endpoint, falling back to the platform default
    pub fn token_uri(&self) -> &str {
        self.key.token_uri.as_deref().unwrap_or(DEFAULT_TOKEN_URI)
    }

    pub(crate) const fn signing_key(&self) -> &EncodingKey {
        &self.signing_key
    }

    /// The underlying key document
    pub const fn key(&self) -> &ServiceAccountKey {
        &self.key
    }
}

impl fmt::Debug for ServiceAccountCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredential")
            .field("client_email", &self.key.client_email)
            .field("project_id", &self.key.project_id)
            .field("private_key_id", &self.key.private_key_id)
            .finish_non_exhaustive()
    }
}
