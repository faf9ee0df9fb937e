use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a key file into a registered app
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to read credential file {}: {source}", .path.display())]
    CredentialFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed service account JSON: {0}")]
    MalformedCredential(#[from] serde_json::Error),

    #[error("Invalid service account credential: {0}")]
    InvalidCredential(String),

    #[error("Invalid service account private key: {0}")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),

    #[error("App options require a credential")]
    MissingCredential,

    #[error("Firebase app named \"{0}\" already exists")]
    AppAlreadyExists(String),

    #[error("Firebase app named \"{0}\" does not exist")]
    AppNotFound(String),
}

impl InitError {
    /// True when the key file itself could not be found
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CredentialFile { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Errors from the token endpoint and the identity admin API
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to sign service account assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("Token exchange failed ({status}): {body}")]
    TokenExchange { status: u16, body: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("User with email {0} already exists")]
    EmailAlreadyExists(String),

    #[error("No user record found for {0}")]
    UserNotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Identity API server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("No project id configured; set project_id in the credential or the configuration")]
    MissingProjectId,

    #[error("Unexpected identity API response ({status}): {body}")]
    Unknown { status: u16, body: String },
}

impl AuthError {
    /// Returns true if this error is transient and should be retried
    ///
    /// Transient errors include:
    /// - Rate limit exceeded
    /// - Server errors (5xx)
    /// - Network errors
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded | Self::ServerError { .. } | Self::NetworkError(_)
        )
    }

    /// Map an identity API error response to an error variant
    ///
    /// The API reports the failure reason as an upper-case code in
    /// `error.message`, optionally followed by ` : <detail>`.
    /// `subject` is the email the request was about.
    pub fn from_status(status: reqwest::StatusCode, body: String, subject: &str) -> Self {
        let code = error_code(&body);

        match (status.as_u16(), code.as_deref()) {
            (_, Some("EMAIL_EXISTS" | "DUPLICATE_EMAIL")) => {
                Self::EmailAlreadyExists(subject.to_string())
            }
            (_, Some("USER_NOT_FOUND" | "EMAIL_NOT_FOUND")) => {
                Self::UserNotFound(subject.to_string())
            }
            (400, Some(code)) => Self::InvalidArgument(code.to_string()),
            (400, None) => Self::InvalidArgument(body),
            (401 | 403, _) => Self::Unauthorized(body),
            (404, _) => Self::UserNotFound(subject.to_string()),
            (429, _) => Self::RateLimitExceeded,
            (status, _) if status >= 500 => Self::ServerError { status, body },
            (status, _) => Self::Unknown { status, body },
        }
    }
}

fn error_code(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("error")?.get("message")?.as_str()?;
    let code = message.split(':').next().unwrap_or(message).trim();
    Some(code.to_string())
}
