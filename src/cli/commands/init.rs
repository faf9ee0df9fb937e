//! Implementation of the `firebase-init init` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::cli::ReportedError;
use crate::domain::models::{App, Config};
use crate::services::{initialize_with, try_initialize, AppRegistry};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Register the app under this name instead of the configured one
    #[arg(long)]
    pub name: Option<String>,

    /// Project id overriding the one in the key file
    #[arg(long)]
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub app_name: String,
    pub project_id: Option<String>,
    pub client_email: String,
    pub credential_path: PathBuf,
}

impl InitOutput {
    fn new(app: &App, credential_path: PathBuf) -> Self {
        Self {
            success: true,
            message: crate::services::initializer::SUCCESS_MESSAGE.to_string(),
            app_name: app.name().to_string(),
            project_id: app.project_id().map(str::to_string),
            client_email: app.options().credential().client_email().to_string(),
            credential_path,
        }
    }
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            self.message.clone(),
            format!("  App:          {}", self.app_name),
            format!("  Service acct: {}", self.client_email),
        ];
        if let Some(project_id) = &self.project_id {
            lines.push(format!("  Project:      {project_id}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: InitArgs, config: &Config, json_mode: bool) -> Result<()> {
    let mut config = config.clone();
    if let Some(name) = args.name {
        config.app_name = name;
    }
    if let Some(project_id) = args.project_id {
        config.project_id = Some(project_id);
    }

    let registry = AppRegistry::global();

    if json_mode {
        let app = try_initialize(&config, registry).context("Firebase initialization failed")?;
        output(&InitOutput::new(&app, config.credential_path.clone()), true);
        return Ok(());
    }

    // Human mode prints one line on stdout or stderr; the initializer logs
    // stay below the default `warn` console level.
    let stdout = io::stdout();
    let stderr = io::stderr();
    initialize_with(&config, registry, &mut stdout.lock(), &mut stderr.lock())
        .ok_or(ReportedError)?;
    Ok(())
}
