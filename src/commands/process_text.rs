// SPDX-License-Identifier: Apache-2.0

//! Turn free-form text into Linear issues.
//!
//! The flow is strictly linear: load credentials, prompt for text, extract
//! proposals with the model, multi-select, resolve a destination team,
//! confirm, then create each selected issue sequentially. Creation aborts
//! on the first failure - remaining proposals are not attempted.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use secrecy::SecretString;
use tracing::{debug, info};

use super::spinner;
use crate::ai::OpenAiClient;
use crate::ai::types::IssueProposal;
use crate::credentials::CredentialStore;
use crate::error::CliError;
use crate::linear::LinearClient;
use crate::linear::types::{CreatedIssue, Team};

/// Run the process-text command.
pub async fn run() -> Result<()> {
    let keys = CredentialStore::new().load()?;

    let text: String = Input::new()
        .with_prompt("Please provide the text to process")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read text input")?;

    if text.trim().is_empty() {
        return Err(CliError::EmptyInput.into());
    }

    let ai = OpenAiClient::new(SecretString::from(keys.open_ai_key))?;
    let pb = spinner("Processing text with AI...");
    let extracted = ai.extract_issues(&text).await;
    pb.finish_and_clear();
    let proposals = extracted?;

    if proposals.is_empty() {
        anyhow::bail!("The model did not extract any issues from the input.");
    }
    debug!(count = proposals.len(), "Presenting extracted proposals");

    let selected = select_proposals(&proposals)?;

    let linear = LinearClient::new(SecretString::from(keys.linear_key))?;
    let pb = spinner("Fetching teams...");
    let fetched = linear.teams().await;
    pb.finish_and_clear();
    let teams = fetched?;

    if teams.is_empty() {
        return Err(CliError::NoTeams.into());
    }
    println!("{}", style("Teams fetched successfully.").green());

    let team = select_team(&teams)?;

    let confirmed = Confirm::new()
        .with_prompt("Do you want to create these issues?")
        .default(true)
        .interact()
        .context("Failed to get user confirmation")?;

    if !confirmed {
        println!("{}", style("No issues created.").dim());
        return Ok(());
    }

    let pb = spinner("Creating issues in Linear...");
    let created = create_all(&linear, &team.id, &selected).await;
    pb.finish_and_clear();
    let created = created?;

    info!(count = created.len(), team = %team.name, "Issues created");
    println!(
        "{} Created {} issue(s) in {}:",
        style("Success!").green().bold(),
        created.len(),
        style(&team.name).cyan()
    );
    for issue in &created {
        println!("  {}  {}", style(&issue.identifier).cyan(), issue.url);
    }

    Ok(())
}

/// Multi-select over the extracted proposals, all pre-selected.
///
/// Re-prompts until at least one proposal is selected.
fn select_proposals(proposals: &[IssueProposal]) -> Result<Vec<IssueProposal>> {
    let labels: Vec<&str> = proposals.iter().map(|p| p.title.as_str()).collect();
    let defaults = vec![true; proposals.len()];

    loop {
        let picked = MultiSelect::new()
            .with_prompt("Select the issues you want to create (space to toggle, enter to submit)")
            .items(&labels)
            .defaults(&defaults)
            .interact()
            .context("Failed to read issue selection")?;

        if picked.is_empty() {
            eprintln!("{}", style("Select at least one issue.").yellow());
            continue;
        }

        return Ok(picked.into_iter().map(|i| proposals[i].clone()).collect());
    }
}

/// Single-select over the fetched teams.
fn select_team(teams: &[Team]) -> Result<&Team> {
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();

    let index = Select::new()
        .with_prompt("Select the team to create the issues in")
        .items(&names)
        .default(0)
        .interact()
        .context("Failed to read team selection")?;

    Ok(&teams[index])
}

/// Creates the selected issues sequentially, aborting on the first failure.
async fn create_all(
    client: &LinearClient,
    team_id: &str,
    proposals: &[IssueProposal],
) -> Result<Vec<CreatedIssue>> {
    let mut created = Vec::with_capacity(proposals.len());

    for proposal in proposals {
        let issue = client
            .create_issue(team_id, proposal)
            .await
            .with_context(|| format!("Failed to create issue \"{}\"", proposal.title))?;
        created.push(issue);
    }

    Ok(created)
}
