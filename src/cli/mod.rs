//! Command-line interface
//!
//! Clap definitions, command implementations and output helpers.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use thiserror::Error;

use crate::infrastructure::logging::SecretScrubber;

/// Failure the command already reported on the console
///
/// Only affects the exit status; [`handle_error`] prints nothing for it.
#[derive(Debug, Error)]
#[error("error already reported")]
pub struct ReportedError;

/// Report a command failure on the console
///
/// JSON mode prints an error object on stdout so scripted callers can parse
/// it; human mode prints the error chain on stderr.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if err.downcast_ref::<ReportedError>().is_some() {
        return;
    }

    let message = SecretScrubber::global().scrub_message(&format!("{err:#}"));
    if json_mode {
        let body = serde_json::json!({ "success": false, "error": message });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {message}");
    }
}
