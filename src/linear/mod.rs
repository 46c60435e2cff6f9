// SPDX-License-Identifier: Apache-2.0

//! Linear GraphQL client.
//!
//! Covers the two operations the pipeline needs: listing teams and creating
//! issues. Linear personal API keys are sent bare in the `Authorization`
//! header (no `Bearer` prefix). GraphQL-level errors arrive with HTTP 200
//! and are surfaced from the `errors` field of the response body.

pub mod types;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::ai::types::IssueProposal;
use crate::error::CliError;
use types::{CreatedIssue, IssueCreateData, Team, TeamsData};

/// Linear GraphQL endpoint.
pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

/// Request timeout for Linear API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query listing the teams of the workspace.
const TEAMS_QUERY: &str = "query { teams { nodes { id name } } }";

/// Mutation creating one issue.
const ISSUE_CREATE_MUTATION: &str = "\
mutation IssueCreate($input: IssueCreateInput!) { \
  issueCreate(input: $input) { success issue { identifier url } } \
}";

/// Linear API client.
pub struct LinearClient {
    /// HTTP client with configured timeout.
    http: Client,
    /// API key for authentication.
    api_key: SecretString,
}

impl LinearClient {
    /// Creates a new client with the given API key.
    pub fn new(api_key: SecretString) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, api_key })
    }

    /// Fetches the teams of the workspace.
    #[instrument(skip_all)]
    pub async fn teams(&self) -> Result<Vec<Team>> {
        let response = self.execute(json!({ "query": TEAMS_QUERY })).await?;
        let data: TeamsData = parse_data(response)?;

        debug!(count = data.teams.nodes.len(), "Fetched Linear teams");
        Ok(data.teams.nodes)
    }

    /// Creates one issue in the given team.
    #[instrument(skip_all, fields(title = %proposal.title))]
    pub async fn create_issue(
        &self,
        team_id: &str,
        proposal: &IssueProposal,
    ) -> Result<CreatedIssue> {
        let body = json!({
            "query": ISSUE_CREATE_MUTATION,
            "variables": {
                "input": {
                    "teamId": team_id,
                    "title": proposal.title,
                    "description": proposal.description,
                }
            }
        });

        let response = self.execute(body).await?;
        let data: IssueCreateData = parse_data(response)?;

        if !data.issue_create.success {
            return Err(CliError::Linear {
                message: "issueCreate mutation reported failure".to_string(),
            }
            .into());
        }

        let issue = data.issue_create.issue.ok_or_else(|| CliError::Linear {
            message: "issueCreate succeeded but returned no issue".to_string(),
        })?;

        debug!(identifier = %issue.identifier, "Created Linear issue");
        Ok(issue)
    }

    /// Executes one GraphQL request and returns the raw response body.
    async fn execute(&self, body: Value) -> Result<Value> {
        let response = self
            .http
            .post(LINEAR_API_URL)
            .header("Authorization", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(CliError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CliError::Linear {
                message: format!("HTTP {}: {error_body}", status.as_u16()),
            }
            .into());
        }

        let value: Value = response
            .json()
            .await
            .context("Failed to parse Linear API response")?;
        Ok(value)
    }
}

/// Extracts the `data` field of a GraphQL response, surfacing `errors`.
fn parse_data<T: serde::de::DeserializeOwned>(response: Value) -> Result<T> {
    if let Some(errors) = response.get("errors") {
        let message = serde_json::to_string_pretty(errors).unwrap_or_default();
        return Err(CliError::Linear { message }.into());
    }

    let data = response
        .get("data")
        .context("Missing 'data' field in GraphQL response")?;

    serde_json::from_value(data.clone()).context("Unexpected GraphQL response shape")
}
