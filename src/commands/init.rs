// SPDX-License-Identifier: Apache-2.0

//! Store the OpenAI and Linear API keys.
//!
//! Collects the two secrets via masked prompts, asks for confirmation
//! (skippable with `--yes`), and overwrites the credential file wholesale.
//! Declining the confirmation leaves any existing file untouched and exits 0.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Password};
use tracing::info;

use super::spinner;
use crate::credentials::{ApiKeys, CredentialStore};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    let keys = prompt_for_keys()?;

    if !yes {
        let proceed = Confirm::new()
            .with_prompt("Proceed with storing the provided keys?")
            .default(true)
            .interact()
            .context("Failed to get user confirmation")?;

        if !proceed {
            println!("{}", style("Aborted. No keys were stored.").dim());
            return Ok(());
        }
    }

    let store = CredentialStore::new();
    let pb = spinner("Storing API keys...");
    let saved = store.save(&keys);
    pb.finish_and_clear();
    saved?;

    info!(path = %store.path().display(), "Credential file written");
    println!();
    println!(
        "{} Project initialization completed. Your API keys have been stored.",
        style("Success!").green().bold()
    );
    println!();

    Ok(())
}

/// Collects the two secrets via masked prompts.
///
/// No validation of secret format - the keys are stored as entered.
fn prompt_for_keys() -> Result<ApiKeys> {
    let open_ai_key = Password::new()
        .with_prompt("Please provide your OpenAI API key")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read OpenAI API key")?;

    let linear_key = Password::new()
        .with_prompt("Please provide your Linear API key")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read Linear API key")?;

    Ok(ApiKeys {
        open_ai_key,
        linear_key,
    })
}
