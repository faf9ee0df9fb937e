//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::init::InitArgs;
use crate::cli::commands::token::TokenArgs;
use crate::cli::commands::user::UserArgs;

#[derive(Parser, Debug)]
#[command(name = "firebase-init")]
#[command(about = "Firebase service-account initializer and user admin", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (default: firebase-init.yaml plus firebase-init.local.yaml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Service-account key file, overriding the configured path
    #[arg(long, global = true, value_name = "FILE")]
    pub credential: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the key file and register the default app
    Init(InitArgs),

    /// Exchange the service-account key for an OAuth2 access token
    Token(TokenArgs),

    /// User account management
    User(UserArgs),
}
