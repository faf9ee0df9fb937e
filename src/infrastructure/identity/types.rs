//! Wire types for the identity admin REST API

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::UserRecord;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LookupRequest<'a> {
    pub email: Vec<&'a str>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<UserInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest<'a> {
    pub local_id: &'a str,
}

/// Account entry as returned by `accounts:lookup`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Milliseconds since the epoch, sent as a string
    #[serde(default)]
    pub created_at: Option<String>,
}

fn parse_millis(value: Option<&str>) -> Option<DateTime<Utc>> {
    let millis = value?.parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

impl From<UserInfo> for UserRecord {
    fn from(info: UserInfo) -> Self {
        let created_at = parse_millis(info.created_at.as_deref());
        Self {
            uid: info.local_id,
            email: info.email,
            email_verified: info.email_verified,
            display_name: info.display_name,
            disabled: info.disabled,
            created_at,
        }
    }
}

impl From<SignUpResponse> for UserRecord {
    fn from(response: SignUpResponse) -> Self {
        Self {
            uid: response.local_id,
            email: response.email,
            email_verified: false,
            display_name: response.display_name,
            disabled: false,
            created_at: None,
        }
    }
}
