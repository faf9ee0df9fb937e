use regex::{Captures, Regex};
use std::fmt;
use std::sync::OnceLock;

static GLOBAL_SCRUBBER: OnceLock<SecretScrubber> = OnceLock::new();

/// Scrubs credentials out of text bound for logs and the console
///
/// Covers PEM private keys (raw or JSON-escaped), OAuth access tokens,
/// signed JWTs, bearer headers, and `token`/`secret`/`password` fields.
#[derive(Clone)]
pub struct SecretScrubber {
    private_key_pattern: Regex,
    access_token_pattern: Regex,
    jwt_pattern: Regex,
    bearer_pattern: Regex,
    token_pattern: Regex,
    password_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new secret scrubber
    pub fn new() -> Self {
        Self {
            private_key_pattern: Regex::new(
                r"-----BEGIN [A-Z ]*PRIVATE KEY-----[\s\S]*?-----END [A-Z ]*PRIVATE KEY-----",
            )
            .expect("private key pattern is valid"),
            access_token_pattern: Regex::new(r"ya29\.[A-Za-z0-9_\-\.]+")
                .expect("access token pattern is valid"),
            jwt_pattern: Regex::new(r"eyJ[A-Za-z0-9_\-]+\.[A-Za-z0-9_\-]+\.[A-Za-z0-9_\-]+")
                .expect("jwt pattern is valid"),
            bearer_pattern: Regex::new(r"Bearer\s+[A-Za-z0-9\-_\.]+")
                .expect("bearer pattern is valid"),
            token_pattern: Regex::new(
                r#"["']?(?:api_key|apikey|access_token|refresh_token|token|secret)["']?\s*[:=]\s*["']?([A-Za-z0-9\-_\.]{20,})["']?"#,
            )
            .expect("token pattern is valid"),
            password_pattern: Regex::new(r#"["']?password["']?\s*[:=]\s*["']?([^"'\s,}]+)["']?"#)
                .expect("password pattern is valid"),
        }
    }

    /// Shared scrubber, compiled on first use
    pub fn global() -> &'static Self {
        GLOBAL_SCRUBBER.get_or_init(Self::new)
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = self
            .private_key_pattern
            .replace_all(message, "[PRIVATE_KEY_REDACTED]")
            .to_string();
        scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .to_string();
        scrubbed = self
            .access_token_pattern
            .replace_all(&scrubbed, "[ACCESS_TOKEN_REDACTED]")
            .to_string();
        scrubbed = self
            .jwt_pattern
            .replace_all(&scrubbed, "[JWT_REDACTED]")
            .to_string();
        scrubbed = self
            .token_pattern
            .replace_all(&scrubbed, |caps: &Captures| {
                let full_match = &caps[0];
                if let Some(colon_pos) = full_match.find(':') {
                    format!("{}:[REDACTED]", &full_match[..colon_pos])
                } else if let Some(eq_pos) = full_match.find('=') {
                    format!("{}=[REDACTED]", &full_match[..eq_pos])
                } else {
                    "[REDACTED]".to_string()
                }
            })
            .to_string();
        self.password_pattern
            .replace_all(&scrubbed, "password=[REDACTED]")
            .to_string()
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
