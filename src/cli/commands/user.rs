//! User CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::sync::Arc;

use crate::cli::commands::initialized_app;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, UserRecord};
use crate::infrastructure::identity::IdentityClient;
use crate::services::UserService;

#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Create an email/password user
    Create {
        /// Email address
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long, env = "FIREBASE_USER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show a user
    Get {
        /// Email address
        #[arg(long)]
        email: String,
    },
    /// Resolve an enabled user by email
    SignIn {
        /// Email address
        #[arg(long)]
        email: String,
    },
    /// Delete a user
    Delete {
        /// Email address
        #[arg(long)]
        email: String,
    },
}

#[derive(Debug, Serialize)]
pub struct UserOutput {
    pub action: &'static str,
    pub user: UserRecord,
}

impl CommandOutput for UserOutput {
    fn to_human(&self) -> String {
        let user = &self.user;
        let mut lines = vec![format!("User {}: {}", self.action, user.uid)];
        if let Some(email) = &user.email {
            lines.push(format!("  Email:      {email}"));
        }
        if let Some(name) = &user.display_name {
            lines.push(format!("  Name:       {name}"));
        }
        lines.push(format!("  Verified:   {}", user.email_verified));
        lines.push(format!("  Disabled:   {}", user.disabled));
        if let Some(created_at) = user.created_at {
            lines.push(format!("  Created:    {}", created_at.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: UserArgs, config: &Config, json_mode: bool) -> Result<()> {
    let app = initialized_app(config)?;
    let client = IdentityClient::for_app(&app, config).context("Failed to set up identity client")?;
    let service = UserService::new(Arc::new(client));

    let (action, user) = match args.command {
        UserCommands::Create { email, password } => (
            "created",
            service
                .create_user(&email, &password)
                .await
                .context("Failed to create user")?,
        ),
        UserCommands::Get { email } => (
            "found",
            service
                .get_user_by_email(&email)
                .await
                .context("Failed to look up user")?,
        ),
        UserCommands::SignIn { email } => (
            "signed in",
            service
                .sign_in_user(&email)
                .await
                .context("Failed to sign in user")?,
        ),
        UserCommands::Delete { email } => (
            "deleted",
            service
                .delete_user(&email)
                .await
                .context("Failed to delete user")?,
        ),
    };

    output(&UserOutput { action, user }, json_mode);
    Ok(())
}
