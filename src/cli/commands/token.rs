//! Implementation of the `firebase-init token` command.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

use crate::cli::commands::initialized_app;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::domain::ports::TokenSource;
use crate::infrastructure::credentials::ServiceAccountTokenSource;
use crate::infrastructure::identity::build_http_client;

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Print the full token instead of a masked one
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Debug, Serialize)]
pub struct TokenOutput {
    pub client_email: String,
    pub token_uri: String,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl CommandOutput for TokenOutput {
    fn to_human(&self) -> String {
        [
            format!("Access token:  {}", self.access_token),
            format!("Expires at:    {}", self.expires_at.to_rfc3339()),
            format!("Issued for:    {}", self.client_email),
            format!("Token server:  {}", self.token_uri),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: TokenArgs, config: &Config, json_mode: bool) -> Result<()> {
    let app = initialized_app(config)?;
    let http_client = build_http_client(&config.auth)?;

    let credential = Arc::clone(app.options().credential());
    let mut source = ServiceAccountTokenSource::new(Arc::clone(&credential), http_client);
    if let Some(token_uri) = &config.auth.token_uri {
        source = source.with_token_uri(token_uri.clone());
    }

    let token = source
        .access_token()
        .await
        .context("Failed to obtain access token")?;

    let access_token = if args.reveal {
        token.token.expose_secret().to_string()
    } else {
        token.token.masked()
    };

    output(
        &TokenOutput {
            client_email: credential.client_email().to_string(),
            token_uri: source.token_uri().to_string(),
            access_token,
            expires_at: token.expires_at,
        },
        json_mode,
    );
    Ok(())
}
