//! firebase-init CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use firebase_init::cli::commands::{self, load_config};
use firebase_init::cli::{handle_error, Cli, Commands};
use firebase_init::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref(), cli.credential.clone()) {
        Ok(config) => config,
        Err(err) => {
            handle_error(&err, cli.json);
            return ExitCode::FAILURE;
        }
    };

    // Held until exit so buffered file logs get flushed
    let _logger = match LogConfig::try_from(&config.logging).and_then(|c| LoggerImpl::init(&c)) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args, &config, cli.json),
        Commands::Token(args) => commands::token::execute(args, &config, cli.json).await,
        Commands::User(args) => commands::user::execute(args, &config, cli.json).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            handle_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}
