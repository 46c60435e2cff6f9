// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for linear-ai-cli.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warn level only - user output is handled separately
//! cargo run
//!
//! # Debug output for troubleshooting
//! RUST_LOG=linear_ai_cli=debug cargo run
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// Sets up `tracing` with the following defaults:
/// - `linear_ai_cli=warn` - Warn level for our code (prompts own the terminal)
/// - `reqwest=warn` - Warn level for the HTTP client
///
/// These defaults can be overridden via the `RUST_LOG` environment variable.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = "linear_ai_cli=warn,reqwest=warn";
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
