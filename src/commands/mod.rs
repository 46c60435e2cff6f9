// SPDX-License-Identifier: Apache-2.0

//! Command handlers for linear-ai-cli.

pub mod init;
pub mod process_text;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::Commands;

/// Creates a styled spinner for a long-running step.
fn spinner(message: &str) -> ProgressBar {
    let s = ProgressBar::new_spinner();
    s.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("Invalid spinner template"),
    );
    s.set_message(message.to_string());
    s.enable_steady_tick(Duration::from_millis(100));
    s
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Init { yes } => init::run(yes),
        Commands::ProcessText => process_text::run().await,
    }
}
