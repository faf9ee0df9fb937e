use chrono::{DateTime, Duration, Utc};

use super::credential::SecretString;

/// Bearer token minted from a service-account credential
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: SecretString,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: SecretString::new(token.into()),
            expires_at,
        }
    }

    /// True when the token expires within `margin` of `now`
    pub fn expires_within(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        self.expires_at - now <= margin
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_within() {
        let now = Utc::now();
        let token = AccessToken::new("ya29.test", now + Duration::minutes(10));
        assert!(!token.expires_within(now, Duration::minutes(5)));
        assert!(token.expires_within(now, Duration::minutes(10)));
        assert!(token.expires_within(now + Duration::minutes(6), Duration::minutes(5)));
    }

    #[test]
    fn test_bearer_header() {
        let token = AccessToken::new("ya29.abc", Utc::now());
        assert_eq!(token.bearer(), "Bearer ya29.abc");
        assert!(!format!("{token:?}").contains("ya29.abc"));
    }
}
