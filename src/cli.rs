// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for linear-ai-cli.
//!
//! Uses clap's derive API for declarative CLI parsing.

use clap::{Parser, Subcommand};

/// linear-ai-cli - Convert free-form text to Linear issues from the terminal.
#[derive(Parser)]
#[command(name = "linear-ai-cli")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Store your OpenAI and Linear API keys
    Init {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Process text input and create Linear issues from it
    ProcessText,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_yes_flag() {
        let cli = Cli::try_parse_from(["linear-ai-cli", "init", "--yes"]).expect("parse");
        match cli.command {
            Commands::Init { yes } => assert!(yes),
            Commands::ProcessText => panic!("expected init"),
        }
    }

    #[test]
    fn test_init_short_yes_flag() {
        let cli = Cli::try_parse_from(["linear-ai-cli", "init", "-y"]).expect("parse");
        assert!(matches!(cli.command, Commands::Init { yes: true }));
    }

    #[test]
    fn test_process_text_takes_no_flags() {
        assert!(Cli::try_parse_from(["linear-ai-cli", "process-text", "--repo", "x"]).is_err());
        assert!(Cli::try_parse_from(["linear-ai-cli", "process-text"]).is_ok());
    }
}
