// SPDX-License-Identifier: Apache-2.0

//! Error types for linear-ai-cli.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Command code uses `anyhow::Result` for top-level error handling;
//! `format_error` adds a user-facing hint per variant before exit.

use std::fmt::Write;

use thiserror::Error;

/// Errors that can occur during a CLI run.
#[derive(Error, Debug)]
pub enum CliError {
    /// Credential file is absent or either key is missing/empty.
    #[error("API keys not found")]
    NotConfigured,

    /// The user submitted an empty text prompt.
    #[error("no text input provided")]
    EmptyInput,

    /// OpenAI API error.
    #[error("OpenAI API error: {message}")]
    Ai {
        /// Error message from the provider.
        message: String,
        /// Optional HTTP status code from the provider.
        status: Option<u16>,
    },

    /// Linear API error (transport-level or GraphQL-level).
    #[error("Linear API error: {message}")]
    Linear {
        /// Error message.
        message: String,
    },

    /// The Linear workspace has no teams to create issues in.
    #[error("no teams found in your Linear workspace")]
    NoTeams,

    /// The model's response content was not the expected JSON shape.
    #[error("invalid JSON response from the model")]
    InvalidAiResponse(#[source] serde_json::Error),

    /// Network/HTTP error from reqwest.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Formats an error for CLI display with helpful hints.
///
/// Downcasts `anyhow::Error` to [`CliError`] and adds a hint for the
/// variants where the user can do something about it. Errors that are not
/// a `CliError` are rendered with their full context chain.
pub fn format_error(error: &anyhow::Error) -> String {
    let Some(cli_err) = error.downcast_ref::<CliError>() else {
        return format!("{error:#}");
    };

    match cli_err {
        CliError::NotConfigured => format!(
            "{cli_err}.\n\nTip: Run `linear-ai-cli init` to store your API keys."
        ),
        CliError::Ai { message: _, status } => {
            let mut msg = cli_err.to_string();
            if let Some(code) = status {
                let _ = write!(msg, " (HTTP {code})");
            }
            msg.push_str("\n\nTip: Check the OpenAI API key stored via `linear-ai-cli init`.");
            msg
        }
        CliError::Linear { message: _ } => {
            format!("{cli_err}\n\nTip: Check the Linear API key stored via `linear-ai-cli init`.")
        }
        CliError::NoTeams => format!(
            "{cli_err}.\n\nTip: Create a team in Linear first - issues must belong to a team."
        ),
        CliError::InvalidAiResponse(_) => format!(
            "{cli_err}\n\nTip: This may be a temporary issue with the model. Try again in a moment."
        ),
        CliError::Network(_) => {
            format!("{cli_err}\n\nTip: Check your internet connection and try again.")
        }
        CliError::EmptyInput => cli_err.to_string(),
    }
}
