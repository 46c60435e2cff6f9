// SPDX-License-Identifier: Apache-2.0

//! linear-ai-cli - Convert free-form text to Linear issues from the terminal.
//!
//! Two flows share one credential file: `init` stores the OpenAI and Linear
//! API keys, `process-text` turns a piece of text into issue proposals and
//! creates the selected ones in Linear.

mod ai;
mod cli;
mod commands;
mod credentials;
mod error;
mod linear;
mod logging;

use clap::Parser;
use console::style;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    if let Err(e) = commands::run(cli.command).await {
        let formatted = error::format_error(&e);
        eprintln!("{} {formatted}", style("Error:").red().bold());
        std::process::exit(1);
    }
}
